//! Timing sweeps for the force pass and the full stepper.
//!
//! Both passes are O(n^2), so the interesting question is how many bodies
//! fit in a frame. Systems are synthetic and deterministic; jitter stays
//! disabled.

use std::time::Instant;

use crate::simulation::collisions::Jitter;
use crate::simulation::forces::{AccelSet, PlanarGravity};
use crate::simulation::integrator::step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyRole, NVec3, System};

/// Build a system of size `n`: one central mass plus `n - 1` bodies
/// scattered deterministically on the plane.
fn make_system(n: usize) -> System {
    let mut sys = System::new();
    sys.add_body(Body {
        x: NVec3::zeros(),
        v: NVec3::zeros(),
        m: 20.0,
        role: BodyRole::Central,
    })
    .expect("central mass is positive");

    for i in 1..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec3::new((i_f * 0.37).sin() * 10.0, 0.0, (i_f * 0.13).cos() * 10.0);
        sys.add_body(Body {
            x,
            v: NVec3::zeros(),
            m: 1.0,
            role: BodyRole::Orbiting,
        })
        .expect("body mass is positive");
    }

    sys
}

fn make_params() -> Parameters {
    Parameters::default()
}

fn gravity_set(params: &Parameters) -> AccelSet {
    AccelSet::new().with(PlanarGravity {
        g: params.g,
        eps2: params.eps2,
    })
}

/// Time a single force accumulation for a range of system sizes.
pub fn bench_gravity() {
    let ns = [10, 20, 40, 80, 160, 320, 640];

    for n in ns {
        let sys = make_system(n);
        let params = make_params();
        let forces = gravity_set(&params);

        let mut out = vec![NVec3::zeros(); n];

        // Warm up
        forces.accumulate_accels(0.0, &sys, &mut out);

        let t0 = Instant::now();
        forces.accumulate_accels(0.0, &sys, &mut out);
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, gravity pass = {dt:8.6} s");
    }
}

/// Time full ticks (all four stages) for a range of system sizes.
pub fn bench_step() {
    let ns = [10, 20, 40, 80, 160, 320, 640];
    let steps = 10;

    for n in ns {
        let mut sys = make_system(n);
        let params = make_params();
        let forces = gravity_set(&params);
        let mut jitter = Jitter::disabled();

        // Warm up
        step(&mut sys, &forces, &params, &mut jitter, params.h0);

        let t0 = Instant::now();
        for _ in 0..steps {
            step(&mut sys, &forces, &params, &mut jitter, params.h0);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("N = {n:5}, step = {per_step:8.6} s");
    }
}

/// CSV sweep of per-tick cost over system size.
/// Paste the output directly into a spreadsheet to graph.
pub fn bench_step_curve() {
    println!("N,step_ms");

    for n in (10..=640).step_by(10) {
        // Small n: average over more steps to smooth noise
        let steps = if n <= 160 { 50 } else { 10 };

        let mut sys = make_system(n);
        let params = make_params();
        let forces = gravity_set(&params);
        let mut jitter = Jitter::disabled();

        let t0 = Instant::now();
        for _ in 0..steps {
            step(&mut sys, &forces, &params, &mut jitter, params.h0);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms:.6}");
    }
}
