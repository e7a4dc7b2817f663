//! Coefficient tables for explicit symplectic Runge–Kutta–Nyström methods.
//!
//! Each method is a named, fixed coefficient set; the table alone determines
//! order and stability. Swapping one table for another of the same shape
//! changes no other code path in the integrator.

/// Stage composition ordering. All tables here are kick–drift ("BA"): each
/// stage updates the velocity correction first and feeds it into the same
/// stage's position correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composition {
    BA,
}

/// One tabulated explicit symplectic RKN scheme.
///
/// `a[i]` weights the position (drift) update of stage `i`, `b[i]` the
/// velocity (kick) update. The stage time offsets `c[i]` are derived at
/// integrator construction as the exclusive running prefix sum of `a`.
#[derive(Debug)]
pub struct IntegrationMethod {
    pub name: &'static str,
    pub order: u32,
    pub time_reversible: bool,
    pub evaluations: usize,
    pub composition: Composition,
    pub a: &'static [f64],
    pub b: &'static [f64],
}

impl IntegrationMethod {
    /// Look up a method table by its config-facing name.
    pub fn by_name(name: &str) -> Option<&'static IntegrationMethod> {
        match name {
            "mclachlan_atela_1992_order5_optimal" => Some(&MCLACHLAN_ATELA_1992_ORDER_5_OPTIMAL),
            "mclachlan_atela_1992_order4_optimal" => Some(&MCLACHLAN_ATELA_1992_ORDER_4_OPTIMAL),
            _ => None,
        }
    }
}

/// McLachlan & Atela (1992), optimal 5th-order method, 6 evaluations.
pub static MCLACHLAN_ATELA_1992_ORDER_5_OPTIMAL: IntegrationMethod = IntegrationMethod {
    name: "mclachlan_atela_1992_order5_optimal",
    order: 5,
    time_reversible: false,
    evaluations: 6,
    composition: Composition::BA,
    a: &[
        0.339839625839110000,
        -0.088601336903027329,
        0.5858564768259621188,
        -0.603039356536491888,
        0.3235807965546976394,
        0.4423637942197494587,
    ],
    b: &[
        0.1193900292875672758,
        0.6989273703824752308,
        -0.1713123582716007754,
        0.4012695022513534480,
        0.0107050818482359840,
        -0.0589796254980311632,
    ],
};

/// McLachlan & Atela (1992), optimal 4th-order method, 4 evaluations.
pub static MCLACHLAN_ATELA_1992_ORDER_4_OPTIMAL: IntegrationMethod = IntegrationMethod {
    name: "mclachlan_atela_1992_order4_optimal",
    order: 4,
    time_reversible: false,
    evaluations: 4,
    composition: Composition::BA,
    a: &[
        0.5153528374311229364,
        -0.085782019412973646,
        0.4415830236164665242,
        0.1288461583653841854,
    ],
    b: &[
        0.1344961992774310892,
        -0.2248198030794208058,
        0.7563200005156682911,
        0.3340036032863214255,
    ],
};
