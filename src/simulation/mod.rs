pub mod states;
pub mod bodies;
pub mod error;
pub mod forces;
pub mod trajectory;
pub mod methods;
pub mod integrator;
pub mod scenario;
