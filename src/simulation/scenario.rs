//! Build fully-initialized simulation scenarios from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - the `Ephemeris` force law over the configured bodies,
//! - an initial `SystemState` with bodies at the configured time zero,
//! - a `SymplecticIntegrator` owning that state,
//! - a `TrajectoryRecorder` as the per-step observer.

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::bodies::MassiveBody;
use crate::simulation::error::SimulationError;
use crate::simulation::forces::Ephemeris;
use crate::simulation::integrator::SymplecticIntegrator;
use crate::simulation::methods::IntegrationMethod;
use crate::simulation::states::{NVec3, SystemState};
use crate::simulation::trajectory::TrajectoryRecorder;

/// A fully-initialized runtime scenario: force law, recorder, integrator
/// and the target time for `run`.
#[derive(Debug)]
pub struct Scenario {
    pub ephemeris: Ephemeris,
    pub recorder: TrajectoryRecorder,
    pub integrator: SymplecticIntegrator,
    pub t_final: f64,
}

fn body_vector(bc: &BodyConfig, field: &'static str, raw: &[f64]) -> Result<NVec3, SimulationError> {
    if raw.len() != 3 {
        return Err(SimulationError::BadBodyVector {
            name: bc.name.clone(),
            field,
            got: raw.len(),
        });
    }
    Ok(NVec3::new(raw[0], raw[1], raw[2]))
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimulationError> {
        // Bodies: µ is authoritative when given, mass otherwise; giving both
        // or neither is a configuration error.
        let mut bodies = Vec::with_capacity(cfg.bodies.len());
        let mut positions = Vec::with_capacity(cfg.bodies.len());
        let mut velocities = Vec::with_capacity(cfg.bodies.len());
        for bc in &cfg.bodies {
            let body = match (bc.gravitational_parameter, bc.mass) {
                (Some(mu), None) => MassiveBody::from_gravitational_parameter(mu, &bc.name),
                (None, Some(m)) => MassiveBody::from_mass(m, &bc.name),
                _ => return Err(SimulationError::AmbiguousBodyMass(bc.name.clone())),
            };
            bodies.push(body);
            positions.push(body_vector(bc, "position", &bc.position)?);
            velocities.push(body_vector(bc, "velocity", &bc.velocity)?);
        }

        let method = IntegrationMethod::by_name(&cfg.parameters.method)
            .ok_or_else(|| SimulationError::UnknownMethod(cfg.parameters.method.clone()))?;

        let state = SystemState::new(positions, velocities, 0.0);
        let recorder = TrajectoryRecorder::new(state.dimension());
        let integrator = SymplecticIntegrator::new(method, state, cfg.parameters.step)?;

        tracing::info!(
            bodies = bodies.len(),
            method = method.name,
            step = cfg.parameters.step,
            t_final = cfg.parameters.t_final,
            "scenario built"
        );

        Ok(Self {
            ephemeris: Ephemeris::new(bodies),
            recorder,
            integrator,
            t_final: cfg.parameters.t_final,
        })
    }

    /// Integrate to the configured target, logging each step's state into
    /// the recorder.
    pub fn run(&mut self) -> Result<(), SimulationError> {
        self.integrator
            .solve(self.t_final, &self.ephemeris, &mut self.recorder)
    }
}
