pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodyRole, NVec3, SimError, System, MIN_LEN};
pub use simulation::params::Parameters;
pub use simulation::forces::{AccelSet, Acceleration, PlanarGravity};
pub use simulation::orbit::{circular_speed, correct_orbits};
pub use simulation::collisions::{resolve_collisions, Jitter};
pub use simulation::integrator::{apply_forces, integrate_positions, step};
pub use simulation::scenario::{BodyStyle, Scenario};

pub use configuration::config::{
    load_scenario, BodyConfig, BodyKind, ConfigError, PhysicsConfig, ScenarioConfig, VisualConfig,
};

pub use visualization::{vis2d::run_2d, vis3d::run_3d};

pub use benchmark::benchmark::{bench_gravity, bench_step, bench_step_curve};
