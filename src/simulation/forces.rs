//! Force / acceleration contributors for the planar n-body stepper
//!
//! Defines the acceleration trait and the softened pairwise gravity term.
//! Terms are collected in an [`AccelSet`] and their contributions summed
//! into a single acceleration vector per body.

use crate::simulation::states::{NVec3, System, MIN_LEN};

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec3]);
}

/// Softened pairwise Newtonian gravity, accumulated per body.
///
/// Each body sums the pull of every other body in a full asymmetric loop.
/// The magnitude uses the softened squared distance `|r|^2 + eps2` while
/// the direction uses the true separation; pairs too close to normalize
/// are skipped (the collision pass separates them on the same tick).
pub struct PlanarGravity {
    pub g: f64, // gravitational constant
    pub eps2: f64, // softening
}

impl Acceleration for PlanarGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec3]) {
        let bodies = sys.bodies();
        let n = bodies.len();

        for i in 0..n {
            let bi = &bodies[i];
            let mut acc = NVec3::zeros();

            for j in 0..n {
                if i == j {
                    continue;
                }
                let bj = &bodies[j];

                // Displacement from i toward j; i feels a pull along +dir
                let dir = bj.x - bi.x;

                // Softened squared separation keeps the magnitude finite
                // at near-zero distance
                let d2 = dir.dot(&dir) + self.eps2;

                if let Some(unit) = dir.try_normalize(MIN_LEN) {
                    // F = G m_i m_j / d2, applied to i as F / m_i
                    let force = self.g * bi.m * bj.m / d2;
                    acc += unit * (force / bi.m);
                }
            }

            out[i] += acc;
        }
    }
}
