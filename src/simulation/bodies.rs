//! Massive bodies and the gravitational constant.
//!
//! A `MassiveBody` carries a name, a gravitational parameter µ and a mass,
//! with the invariant `µ = m * G` maintained by construction. Ephemeris
//! catalogs publish µ directly (it is known more precisely than mass for
//! most bodies), so µ is the authoritative quantity in the force law and
//! mass is derived for display and diagnostics only.

/// Gravitational constant G in SI units, m^3 / (kg s^2).
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67384e-11;

/// A gravitating body. Immutable after construction.
///
/// Identity is the name plus the index position in the owning body list:
/// accelerations and positions are correlated strictly by array index,
/// never by name lookup.
#[derive(Debug, Clone)]
pub struct MassiveBody {
    pub name: String,
    pub gravitational_parameter: f64, // µ, m^3 / s^2
    pub mass: f64, // kg, derived or authoritative depending on constructor
}

impl MassiveBody {
    /// Construct from a gravitational parameter; mass is derived as `µ / G`.
    pub fn from_gravitational_parameter(gravitational_parameter: f64, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gravitational_parameter,
            mass: gravitational_parameter / GRAVITATIONAL_CONSTANT,
        }
    }

    /// Construct from a mass; the gravitational parameter is derived as `m * G`.
    pub fn from_mass(mass: f64, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gravitational_parameter: mass * GRAVITATIONAL_CONSTANT,
            mass,
        }
    }
}
