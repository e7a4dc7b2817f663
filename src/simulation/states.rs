//! Core state types for the solar-system simulation.
//!
//! Defines the `NVec3` vector alias and the single mutable `SystemState`
//! record advanced by the integrator. Positions and velocities are stored
//! per body, correlated strictly by array index with the body list held
//! by the `Ephemeris`.

use nalgebra::Vector3;
pub type NVec3 = Vector3<f64>;

/// The full physical state of the system at one instant.
///
/// `positions[i]` and `velocities[i]` belong to body `i`; both vectors must
/// have the same length and that length stays constant for the lifetime of
/// one integrator instance. The integrator owns this record exclusively and
/// mutates it in place, step by step; it is never replaced, only advanced.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemState {
    pub positions: Vec<NVec3>, // position per body, metres
    pub velocities: Vec<NVec3>, // velocity per body, m/s
    pub time: f64, // simulation time, seconds
}

impl SystemState {
    pub fn new(positions: Vec<NVec3>, velocities: Vec<NVec3>, time: f64) -> Self {
        Self {
            positions,
            velocities,
            time,
        }
    }

    /// Number of bodies in the state.
    pub fn dimension(&self) -> usize {
        self.positions.len()
    }
}
