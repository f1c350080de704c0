//! Pairwise collision separation and bounce
//!
//! Overlapping pairs get an amplified positional push apart, their closing
//! velocity along the contact normal is cancelled inelastically, and pairs
//! in deep overlap receive a small random kick so repeated pairwise
//! resolution cannot cycle forever without converging.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec3, System, MIN_LEN};

/// Overlap corrections are amplified so a single pass over all pairs
/// usually ends in a non-overlapping configuration.
const SEPARATION_GAIN: f64 = 1.8;

/// Pairs closer than this fraction of the minimum distance count as stuck
/// and get jittered.
const STUCK_RATIO: f64 = 0.7;

/// Largest jitter kick per in-plane axis.
const KICK: f64 = 0.4;

/// Random source for the stuck-pair kick.
///
/// The kick is the one non-deterministic part of the stepper, so it is
/// injected rather than drawn from a global source: `seeded` makes runs
/// reproducible, `disabled` turns the kick off entirely (tests),
/// `from_entropy` is the live default.
#[derive(Debug)]
pub enum Jitter {
    Disabled,
    Rng(StdRng),
}

impl Jitter {
    pub fn disabled() -> Self {
        Jitter::Disabled
    }

    pub fn seeded(seed: u64) -> Self {
        Jitter::Rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Jitter::Rng(StdRng::from_entropy())
    }

    /// In-plane kick with both axes scaled by one draw from `[0, 1)`.
    fn kick(&mut self) -> Option<NVec3> {
        match self {
            Jitter::Disabled => None,
            Jitter::Rng(rng) => {
                let t: f64 = rng.gen();
                Some(NVec3::new(KICK, 0.0, KICK) * t)
            }
        }
    }
}

/// Stage 3: separate overlapping pairs and cancel their closing velocity.
///
/// Every unordered pair (i, j) with i < j is processed once, in index
/// order. Coincident pairs have no usable contact normal and are skipped;
/// the softened gravity keeps them finite until they drift apart.
pub fn resolve_collisions(sys: &mut System, params: &Parameters, jitter: &mut Jitter) {
    let bodies = sys.bodies_mut();
    let n = bodies.len();

    for i in 0..n {
        for j in (i + 1)..n {
            let diff = bodies[i].x - bodies[j].x;
            let dist = diff.norm();
            if dist >= params.min_distance {
                continue;
            }

            let normal = match diff.try_normalize(MIN_LEN) {
                Some(normal) => normal,
                None => continue,
            };

            // Push both bodies apart along the normal, over-correcting so
            // the pair lands clear of the threshold in one pass
            let correction = normal * (params.min_distance - dist);
            bodies[i].x += correction * SEPARATION_GAIN;
            bodies[j].x -= correction * SEPARATION_GAIN;

            // Cancel the closing velocity along the normal: i loses it,
            // j gains the same amount. Inelastic, not a bounce.
            let closing = (bodies[i].v - bodies[j].v).dot(&normal);
            if closing < 0.0 {
                bodies[i].v -= normal * closing;
                bodies[j].v += normal * closing;
            }

            // Deep overlap at detection time means the pair is likely in a
            // resolution cycle with its neighbours; kick both bodies
            if dist < params.min_distance * STUCK_RATIO {
                if let Some(kick) = jitter.kick() {
                    bodies[i].v += kick;
                }
                if let Some(kick) = jitter.kick() {
                    bodies[j].v += kick;
                }
            }
        }
    }
}
