//! Manual timing helpers for the force evaluation and the integrator.
//!
//! Not wired into the normal run; call these from `main` by hand when
//! measuring. Output is plain text suitable for pasting into a spreadsheet.

use std::time::Instant;

use crate::simulation::bodies::MassiveBody;
use crate::simulation::forces::{AccelerationField, Ephemeris};
use crate::simulation::integrator::SymplecticIntegrator;
use crate::simulation::methods::MCLACHLAN_ATELA_1992_ORDER_5_OPTIMAL;
use crate::simulation::states::{NVec3, SystemState};

/// Build a synthetic n-body ephemeris + state, deterministic, no rand needed.
fn make_system(n: usize) -> (Ephemeris, SystemState) {
    let mut bodies = Vec::with_capacity(n);
    let mut positions = Vec::with_capacity(n);
    let mut velocities = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        bodies.push(MassiveBody::from_gravitational_parameter(1.0, format!("body-{i}")));
        positions.push(NVec3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 5.0,
        ));
        velocities.push(NVec3::zeros());
    }

    (
        Ephemeris::new(bodies),
        SystemState::new(positions, velocities, 0.0),
    )
}

/// Time one direct O(n^2) force evaluation for a range of body counts.
pub fn bench_gravity() {
    let ns = [50, 100, 200, 400, 800, 1600];

    for n in ns {
        let (ephemeris, state) = make_system(n);
        let mut out = vec![NVec3::zeros(); n];

        // Warm up
        ephemeris.evaluate_accelerations(0.0, &state.positions, &mut out);

        let t0 = Instant::now();
        ephemeris.evaluate_accelerations(0.0, &state.positions, &mut out);
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, direct = {dt:8.6} s");
    }
}

/// Time whole integration steps (6 force evaluations each) per body count.
pub fn bench_solve() {
    let ns = [50, 100, 200, 400, 800];
    let steps = 10;

    for n in ns {
        let (ephemeris, state) = make_system(n);
        let mut integrator =
            SymplecticIntegrator::new(&MCLACHLAN_ATELA_1992_ORDER_5_OPTIMAL, state, 1.0e-3)
                .expect("bench method table is well-formed");
        let mut observer = |_: &SystemState| {};

        // Warm up one step
        integrator
            .solve(1.0e-3, &ephemeris, &mut observer)
            .expect("dimensions match by construction");

        let t0 = Instant::now();
        integrator
            .solve(1.0e-3 * (1 + steps) as f64, &ephemeris, &mut observer)
            .expect("dimensions match by construction");
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, step = {per_step:8.6} s");
    }
}
