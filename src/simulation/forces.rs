//! Gravitational acceleration evaluation and the integrator's callback traits.
//!
//! `AccelerationField` is the force-evaluation seam: given positions (current
//! or stage-intermediate) it fills one acceleration per body. `StateObserver`
//! is the per-step consumer seam. `Ephemeris` is the N-body implementation
//! of the force law, driven purely by gravitational parameters.

use crate::simulation::bodies::{MassiveBody, GRAVITATIONAL_CONSTANT};
use crate::simulation::states::{NVec3, SystemState};

/// A source of instantaneous accelerations for all bodies.
///
/// `accelerations[i]` is overwritten (not accumulated into) for every body;
/// `dimension()` is the body count the field covers and is checked against
/// the state length before integration starts.
pub trait AccelerationField {
    fn dimension(&self) -> usize;

    /// Fill `accelerations` with the acceleration of each body at time `t`
    /// given `positions`. Both slices have `dimension()` entries.
    fn evaluate_accelerations(&self, t: f64, positions: &[NVec3], accelerations: &mut [NVec3]);
}

/// Per-step consumer invoked once after each completed integration step.
///
/// The state is reused and mutated in place on the next step, so observers
/// must copy out whatever they keep.
pub trait StateObserver {
    fn observe_state(&mut self, state: &SystemState);
}

/// Closures work directly as observers, mirroring callback-style callers.
impl<F: FnMut(&SystemState)> StateObserver for F {
    fn observe_state(&mut self, state: &SystemState) {
        self(state)
    }
}

/// The N-body gravitational force law over an ordered list of massive bodies.
///
/// Body `i` corresponds to `positions[i]` and `accelerations[i]` strictly by
/// index. The pairwise sum exploits Newton's third law so each unordered pair
/// is evaluated exactly once.
#[derive(Debug)]
pub struct Ephemeris {
    bodies: Vec<MassiveBody>,
}

impl Ephemeris {
    pub fn new(bodies: Vec<MassiveBody>) -> Self {
        Self { bodies }
    }

    pub fn bodies(&self) -> &[MassiveBody] {
        &self.bodies
    }

    /// Total mechanical energy (kinetic + pairwise gravitational potential)
    /// of `state`. Bounded drift of this quantity over long integrations is
    /// the defining property of a symplectic scheme.
    pub fn total_energy(&self, state: &SystemState) -> f64 {
        let n = self.bodies.len();
        let mut kinetic = 0.0;
        for i in 0..n {
            kinetic += 0.5 * self.bodies[i].mass * state.velocities[i].norm_squared();
        }
        let mut potential = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                let r = (state.positions[i] - state.positions[j]).norm();
                potential -= GRAVITATIONAL_CONSTANT * self.bodies[i].mass * self.bodies[j].mass / r;
            }
        }
        kinetic + potential
    }

    /// Total angular momentum `sum_i m_i q_i x v_i` of `state`.
    pub fn total_angular_momentum(&self, state: &SystemState) -> NVec3 {
        let mut l = NVec3::zeros();
        for i in 0..self.bodies.len() {
            l += self.bodies[i].mass * state.positions[i].cross(&state.velocities[i]);
        }
        l
    }
}

impl AccelerationField for Ephemeris {
    fn dimension(&self) -> usize {
        self.bodies.len()
    }

    /// Direct O(n^2) pairwise sum, each unordered pair visited once.
    ///
    /// Coincident bodies (`dq2 = 0`) are not guarded: the division produces a
    /// non-finite acceleration that propagates through all subsequent state.
    /// Avoiding coincident initial positions is caller responsibility.
    fn evaluate_accelerations(&self, _t: f64, positions: &[NVec3], accelerations: &mut [NVec3]) {
        // Zero buffer
        for a in accelerations.iter_mut() {
            *a = NVec3::zeros();
        }

        let n = self.bodies.len();
        for b1 in 0..n {
            let mu1 = self.bodies[b1].gravitational_parameter;
            let position_of_b1 = positions[b1];

            for b2 in (b1 + 1)..n {
                let mu2 = self.bodies[b2].gravitational_parameter;

                // Displacement from b2 to b1; b2 is pulled along +dq, b1 along -dq.
                let dq = position_of_b1 - positions[b2];
                let dq2 = dq.norm_squared();

                // 1 / |dq|^3 as sqrt(dq2) / dq2^2, avoiding a fractional power.
                let one_over_dq3 = dq2.sqrt() / (dq2 * dq2);

                let mu1_over_dq3 = mu1 * one_over_dq3;
                accelerations[b2] += dq * mu1_over_dq3;

                let mu2_over_dq3 = mu2 * one_over_dq3;
                accelerations[b1] -= dq * mu2_over_dq3;
            }
        }
    }
}
