//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the runtime tunables shared by every stage of the
//! stepper: gravitational constant and softening, per-tick damping, the
//! speed cap, the collision separation distance, the containment radius,
//! the fixed step size, and the optional jitter seed.
//!
//! One instance is threaded through all stages, so the orbit controller
//! and the force law can never disagree about `g`.

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub damping: f64, // per-tick velocity decay factor
    pub max_speed: f64, // speed cap applied at the end of the force stage
    pub min_distance: f64, // separation enforced by the collision pass
    pub boundary_radius: f64, // containment sphere radius
    pub eps2: f64, // softening added to squared distance
    pub h0: f64, // fixed step size
    pub seed: Option<u64>, // jitter seed; None draws from entropy
}

impl Default for Parameters {
    /// Reference tuning for a sun plus a handful of planets.
    fn default() -> Self {
        Self {
            g: 0.02,
            damping: 0.999,
            max_speed: 1.2,
            min_distance: 1.2,
            boundary_radius: 12.0,
            eps2: 1e-6,
            h0: 0.016,
            seed: None,
        }
    }
}
