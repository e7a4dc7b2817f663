//! Fixed-step explicit symplectic Runge–Kutta–Nyström integrator.
//!
//! Owns the live `SystemState` and advances it monotonically in whole steps
//! of a fixed signed size, driven by a tabulated coefficient set
//! (`IntegrationMethod`), an injected `AccelerationField` and an injected
//! `StateObserver` invoked once per completed step.

use crate::simulation::error::SimulationError;
use crate::simulation::forces::{AccelerationField, StateObserver};
use crate::simulation::methods::IntegrationMethod;
use crate::simulation::states::{NVec3, SystemState};

/// Kahan-style compensated accumulator: `value` carries the running sum,
/// `error` the round-off lost by the last addition. Keeps accumulated
/// round-off O(eps) over arbitrarily many increments instead of O(n*eps).
#[derive(Debug, Clone, Copy, Default)]
pub struct CompensatedSum {
    value: f64,
    error: f64,
}

impl CompensatedSum {
    pub fn new(value: f64) -> Self {
        Self { value, error: 0.0 }
    }

    pub fn increment(&mut self, right: f64) -> &mut Self {
        let temp = self.value;
        let y = self.error + right;
        self.value = temp + y;
        self.error = (temp - self.value) + y;
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Stateful fixed-step SRKN integrator.
///
/// Construction validates the method table shape and the state lengths,
/// derives the stage time offsets `c` (exclusive prefix sum of `a`), and
/// takes exclusive ownership of the state. There is no reset: the state is
/// only ever advanced, and repeated `solve` calls resume where the previous
/// one stopped.
#[derive(Debug)]
pub struct SymplecticIntegrator {
    method: &'static IntegrationMethod,
    c: Vec<f64>, // stage time offsets, c[0] = 0, c[i] = c[i-1] + a[i-1]
    step: f64, // signed; the sign sets the integration direction
    state: SystemState,
    time: CompensatedSum, // compensated mirror of state.time
}

impl SymplecticIntegrator {
    pub fn new(
        method: &'static IntegrationMethod,
        initial_state: SystemState,
        step: f64,
    ) -> Result<Self, SimulationError> {
        if method.a.len() != method.evaluations || method.b.len() != method.evaluations {
            return Err(SimulationError::MalformedMethod {
                name: method.name,
                evaluations: method.evaluations,
                a_len: method.a.len(),
                b_len: method.b.len(),
            });
        }
        if initial_state.positions.len() != initial_state.velocities.len() {
            return Err(SimulationError::MismatchedState {
                positions: initial_state.positions.len(),
                velocities: initial_state.velocities.len(),
            });
        }
        if step == 0.0 || !step.is_finite() {
            return Err(SimulationError::InvalidStep(step));
        }

        // Exclusive running prefix sum of a: stage i evaluates forces at
        // time + c[i] * h.
        let mut c = Vec::with_capacity(method.evaluations);
        let mut c_i = 0.0;
        for i in 0..method.evaluations {
            c.push(c_i);
            c_i += method.a[i];
        }

        let time = CompensatedSum::new(initial_state.time);
        Ok(Self {
            method,
            c,
            step,
            state: initial_state,
            time,
        })
    }

    /// The live state. External readers may inspect it between `solve`
    /// calls; only the integrator advances it.
    pub fn state(&self) -> &SystemState {
        &self.state
    }

    pub fn method(&self) -> &'static IntegrationMethod {
        self.method
    }

    pub fn step_size(&self) -> f64 {
        self.step
    }

    /// Advance the state toward `t_final` in whole steps of the fixed size.
    ///
    /// Steps are taken while the remaining time-to-target, measured in the
    /// direction implied by `sign(step)`, is at least `|step|`. No partial
    /// final step is taken: a residual strictly smaller than one step is
    /// left un-integrated, and a later call with a larger target resumes
    /// consistently from the current state.
    ///
    /// `forces` is evaluated at every stage; `observer` fires once per
    /// committed step with the updated state. No NaN or bounds checking is
    /// performed inside the step loop: a non-finite acceleration (e.g. from
    /// coincident bodies) silently propagates into all subsequent state.
    pub fn solve<F, O>(
        &mut self,
        t_final: f64,
        forces: &F,
        observer: &mut O,
    ) -> Result<(), SimulationError>
    where
        F: AccelerationField + ?Sized,
        O: StateObserver + ?Sized,
    {
        let n = self.state.positions.len();
        if forces.dimension() != n {
            return Err(SimulationError::DimensionMismatch {
                field: forces.dimension(),
                state: n,
            });
        }

        let h = self.step;
        let integration_direction = h.signum();
        let abs_h = integration_direction * h;
        let evaluations = self.method.evaluations;

        // Per-step accumulated corrections and scratch buffers, allocated
        // once per solve and reused across steps.
        let mut dq = vec![NVec3::zeros(); n]; // position corrections
        let mut dv = vec![NVec3::zeros(); n]; // velocity corrections
        let mut q_stage = vec![NVec3::zeros(); n]; // stage positions
        let mut g = vec![NVec3::zeros(); n]; // stage accelerations

        while abs_h <= integration_direction * (t_final - self.state.time) {
            for k in 0..n {
                dq[k] = NVec3::zeros();
                dv[k] = NVec3::zeros();
            }

            for i in 0..evaluations {
                // Stage positions: committed position plus the correction
                // accumulated so far this step.
                for k in 0..n {
                    q_stage[k] = self.state.positions[k] + dq[k];
                }

                forces.evaluate_accelerations(
                    self.state.time + self.c[i] * h,
                    &q_stage,
                    &mut g,
                );

                // Kick then drift within the same stage: dv is updated first
                // and the *updated* dv feeds this stage's dq. Using the
                // pre-stage velocity instead breaks the symplectic property.
                let h_b = h * self.method.b[i];
                let h_a = h * self.method.a[i];
                for k in 0..n {
                    dv[k] += g[k] * h_b;
                    dq[k] += (self.state.velocities[k] + dv[k]) * h_a;
                }
            }

            // Commit the full step.
            self.time.increment(h);
            self.state.time = self.time.value();
            for k in 0..n {
                self.state.positions[k] += dq[k];
                self.state.velocities[k] += dv[k];
            }

            observer.observe_state(&self.state);
        }

        Ok(())
    }
}
