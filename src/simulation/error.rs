//! Error type for precondition violations.
//!
//! The taxonomy is deliberately narrow: mismatched array lengths and
//! malformed inputs fail fast at construction or first use. Numerical
//! degeneracy (coincident bodies producing non-finite accelerations) is
//! NOT detected or recovered here; avoiding it is caller responsibility.

/// Errors surfaced by scenario construction and the integrator.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("integration method `{name}`: expected {evaluations} coefficients, got a.len() = {a_len}, b.len() = {b_len}")]
    MalformedMethod {
        name: &'static str,
        evaluations: usize,
        a_len: usize,
        b_len: usize,
    },

    #[error("state has {positions} positions but {velocities} velocities")]
    MismatchedState { positions: usize, velocities: usize },

    #[error("force model covers {field} bodies but the state holds {state}")]
    DimensionMismatch { field: usize, state: usize },

    #[error("step size must be nonzero and finite, got {0}")]
    InvalidStep(f64),

    #[error("unknown integration method `{0}`")]
    UnknownMethod(String),

    #[error("body `{0}` must specify exactly one of `gravitational_parameter` or `mass`")]
    AmbiguousBodyMass(String),

    #[error("body `{name}`: expected 3 components for `{field}`, got {got}")]
    BadBodyVector {
        name: String,
        field: &'static str,
        got: usize,
    },
}
