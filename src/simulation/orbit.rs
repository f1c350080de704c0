//! Orbital-velocity controller
//!
//! Nudges every non-central body toward the tangential velocity of a
//! circular orbit around the central body. Bodies that are effectively at
//! rest are snapped straight onto that orbit so freshly placed bodies
//! start moving without a long spiral-in.

use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, System, MIN_LEN};

/// Speed at or below which a body counts as at rest and has its orbital
/// velocity set directly instead of blended.
const REST_SPEED: f64 = 0.1;

/// Per-tick blend factor toward the circular-orbit velocity. Small enough
/// that corrections never show as visible jumps.
const ORBIT_BLEND: f64 = 0.01;

/// Speed of a circular orbit of radius `r` around `central_mass`, from
/// the centripetal-force balance `v^2 / r = g m / r^2`.
pub fn circular_speed(g: f64, central_mass: f64, r: f64) -> f64 {
    (g * central_mass / r).sqrt()
}

/// Stage 1: steer non-central bodies toward circular orbits.
///
/// Mutates velocities only. Skipped entirely when no body is tagged
/// central; a body coincident with the anchor is left alone (no usable
/// radial direction).
pub fn correct_orbits(sys: &mut System, params: &Parameters) {
    let c = match sys.central() {
        Some(c) => c,
        None => return,
    };
    if sys.bodies().len() < 2 {
        return;
    }

    let anchor_x = sys.bodies()[c].x;
    let anchor_m = sys.bodies()[c].m;

    for (i, b) in sys.bodies_mut().iter_mut().enumerate() {
        if i == c {
            continue;
        }

        let offset = b.x - anchor_x;
        let r = offset.norm();
        if r <= MIN_LEN {
            continue;
        }

        let target = circular_speed(params.g, anchor_m, r);

        let radial = offset / r;
        // Perpendicular to radial within the XZ plane
        let tangential = NVec3::new(-radial.z, 0.0, radial.x);

        if b.v.norm() > REST_SPEED {
            // First-order controller: ease toward the circular velocity
            b.v = b.v.lerp(&(tangential * target), ORBIT_BLEND);
        } else {
            // At rest: bootstrap directly onto the orbit
            b.v = tangential * target;
        }
    }
}
