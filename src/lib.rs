pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{NVec3, SystemState};
pub use simulation::bodies::{MassiveBody, GRAVITATIONAL_CONSTANT};
pub use simulation::error::SimulationError;
pub use simulation::forces::{AccelerationField, Ephemeris, StateObserver};
pub use simulation::trajectory::{Trajectory, TrajectoryPoint, TrajectoryRecorder};
pub use simulation::methods::{
    Composition, IntegrationMethod, MCLACHLAN_ATELA_1992_ORDER_4_OPTIMAL,
    MCLACHLAN_ATELA_1992_ORDER_5_OPTIMAL,
};
pub use simulation::integrator::{CompensatedSum, SymplecticIntegrator};
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_gravity, bench_solve};
