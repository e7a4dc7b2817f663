//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – integration method, step size and target time
//! - [`BodyConfig`]       – identity, µ or mass, and initial state per body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types (SI units throughout):
//!
//! ```yaml
//! parameters:
//!   method: mclachlan_atela_1992_order5_optimal
//!   step: 2.0e5            # seconds; the sign sets the integration direction
//!   t_final: 4.0e7         # seconds
//!
//! bodies:
//!   - name: Sol
//!     gravitational_parameter: 1.3271244004193938e20   # m^3/s^2
//!     position: [ -1.067598502264559e9, -3.959890535950128e8, -1.380711260212289e8 ]
//!     velocity: [ 9.312570119052345e0, -1.170150735349599e1, -5.251247980405208e0 ]
//!   - name: Probe
//!     mass: 1.0e3          # kg; exactly one of mass / gravitational_parameter
//!     position: [ 0.0, 0.0, 0.0 ]
//!     velocity: [ 0.0, 0.0, 0.0 ]
//! ```
//!
//! The scenario builder maps this configuration into the runtime
//! representation (`Ephemeris`, `SystemState`, `SymplecticIntegrator`).

use serde::Deserialize;

/// Numerical parameters for a scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub method: String, // integration method table, looked up by name
    pub step: f64,      // fixed signed step size, seconds
    pub t_final: f64,   // target time handed to solve, seconds
}

/// Configuration for a single body's identity and initial state.
///
/// Exactly one of `gravitational_parameter` and `mass` must be given; the
/// other is derived at build time using the gravitational constant.
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    #[serde(default)]
    pub gravitational_parameter: Option<f64>, // µ in m^3/s^2
    #[serde(default)]
    pub mass: Option<f64>, // kg
    pub position: Vec<f64>, // initial position [x, y, z], metres
    pub velocity: Vec<f64>, // initial velocity [x, y, z], m/s
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>, // index order here is the body index everywhere
}
