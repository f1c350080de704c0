//! The per-tick stepper for the planar N-body system
//!
//! [`step`] advances all bodies through a fixed four-stage pipeline:
//! orbit correction, gravity + damping/bounds/cap, collision separation,
//! position integration. Each stage is a standalone function so its
//! post-conditions can be exercised in isolation.

use super::collisions::{resolve_collisions, Jitter};
use super::forces::AccelSet;
use super::orbit::correct_orbits;
use super::params::Parameters;
use super::states::{NVec3, System};

/// Fraction of an outward radial velocity removed when a body is clamped
/// back onto the containment sphere. Partial and inelastic: tangential
/// motion survives the clamp.
const BOUNDARY_RESTITUTION: f64 = 0.5;

/// Advance the system by one tick of `dt`.
///
/// Fully synchronous, O(n^2) in the body count. The speed cap is enforced
/// inside [`apply_forces`] only; the collision pass may push a body past
/// it again and no stage re-clamps afterwards.
pub fn step(sys: &mut System, forces: &AccelSet, params: &Parameters, jitter: &mut Jitter, dt: f64) {
    correct_orbits(sys, params);
    apply_forces(sys, forces, params, dt);
    resolve_collisions(sys, params, jitter);
    integrate_positions(sys, dt);
    sys.t += dt;
}

/// Stage 2: accumulate gravity, integrate velocities (forward Euler),
/// damp, contain within the boundary sphere, and cap speed.
pub fn apply_forces(sys: &mut System, forces: &AccelSet, params: &Parameters, dt: f64) {
    let n = sys.bodies().len();
    if n == 0 {
        return;
    }

    let mut acc = vec![NVec3::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut acc);

    for (b, a) in sys.bodies_mut().iter_mut().zip(acc.iter_mut()) {
        // Planar constraint: motion stays on the XZ plane
        a.y = 0.0;
        b.v.y = 0.0;

        // Forward Euler; error grows with dt, no sub-stepping
        b.v += *a * dt;

        // Per-tick decay, deliberately not scaled by dt
        b.v *= params.damping;

        // Clamp runaways back onto the containment sphere and bleed off
        // part of any outward radial velocity
        let dist = b.x.norm();
        if dist > params.boundary_radius {
            let outward = b.x / dist;
            b.x = outward * params.boundary_radius;

            let radial_v = b.v.dot(&outward);
            if radial_v > 0.0 {
                b.v -= outward * (radial_v * BOUNDARY_RESTITUTION);
            }
        }

        // Hard speed cap, direction preserved
        let speed = b.v.norm();
        if speed > params.max_speed {
            b.v *= params.max_speed / speed;
        }
    }
}

/// Stage 4: advance positions and re-assert the planar invariant.
pub fn integrate_positions(sys: &mut System, dt: f64) {
    for b in sys.bodies_mut() {
        b.x += b.v * dt;
        b.x.y = 0.0;
    }
}
