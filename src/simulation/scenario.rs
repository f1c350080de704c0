//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! consumed by the viewers:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//! - jitter source for the collision pass
//! - per-body display styles, index-aligned with the body list
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! stepping and visualization systems. Configuration changes are applied
//! by rebuilding the whole bundle from scratch, never by mutating it.

use bevy::prelude::Resource;
use log::info;

use crate::configuration::config::{BodyConfig, BodyKind, ScenarioConfig};
use crate::simulation::collisions::Jitter;
use crate::simulation::forces::{AccelSet, PlanarGravity};
use crate::simulation::orbit::circular_speed;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyRole, NVec3, SimError, System, MIN_LEN};

/// Fraction of the circular-orbit speed given to `orbiting` bodies at
/// build time. Slightly under-speed, so the orbit controller pulls them
/// onto a circle instead of chasing an overshoot outward.
const BOOTSTRAP_FRACTION: f64 = 0.9;

/// Per-body display metadata, index-aligned with `System::bodies`.
#[derive(Debug, Clone)]
pub struct BodyStyle {
    pub name: String,
    pub radius: f32,
    pub color: [f32; 3],
}

/// Bevy resource representing a fully-initialized simulation scenario.
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the parameters, current system state, the active force
/// set, the jitter source, and the display styles.
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
    pub jitter: Jitter,
    pub styles: Vec<BodyStyle>,
    pub scale: f32, // world units -> screen pixels
}

impl Scenario {
    pub fn build(cfg: &ScenarioConfig) -> Result<Self, SimError> {
        if cfg.bodies.is_empty() {
            return Err(SimError::NoBodies);
        }

        let p = &cfg.physics;
        let parameters = Parameters {
            g: p.gravity_constant,
            damping: p.damping,
            max_speed: p.max_speed,
            min_distance: p.min_distance,
            boundary_radius: p.boundary_radius,
            eps2: p.softening,
            h0: p.time_step,
            seed: p.seed,
        };
        check_positive("gravity_constant", parameters.g)?;
        check_positive("damping", parameters.damping)?;
        check_positive("max_speed", parameters.max_speed)?;
        check_positive("min_distance", parameters.min_distance)?;
        check_positive("boundary_radius", parameters.boundary_radius)?;
        check_positive("softening", parameters.eps2)?;
        check_positive("time_step", parameters.h0)?;

        // The central body anchors the orbit bootstrap; reference
        // scenarios list it first.
        let central_cfg = cfg.bodies.iter().find(|bc| bc.kind == BodyKind::Central);

        let mut system = System::new();
        for bc in &cfg.bodies {
            let x = NVec3::from(bc.position);
            let v = initial_velocity(bc, central_cfg, &parameters);
            let role = match bc.kind {
                BodyKind::Central => BodyRole::Central,
                BodyKind::Orbiting | BodyKind::Asteroid => BodyRole::Orbiting,
            };
            system.add_body(Body { x, v, m: bc.mass, role })?;
        }

        // The force law is built from the same parameters the orbit
        // controller reads, so the two cannot drift apart
        let forces = AccelSet::new().with(PlanarGravity {
            g: parameters.g,
            eps2: parameters.eps2,
        });

        let jitter = match parameters.seed {
            Some(seed) => Jitter::seeded(seed),
            None => Jitter::from_entropy(),
        };

        let styles = cfg
            .bodies
            .iter()
            .map(|bc| BodyStyle {
                name: bc.name.clone(),
                radius: bc.radius as f32,
                color: bc.color,
            })
            .collect();

        info!("built scenario with {} bodies", system.bodies().len());

        Ok(Self {
            parameters,
            system,
            forces,
            jitter,
            styles,
            scale: cfg.visual.scale,
        })
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), SimError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SimError::BadParameter { name, value });
    }
    Ok(())
}

/// Initial velocity for a configured body.
///
/// `orbiting` bodies with no configured velocity start at a fraction of
/// the circular-orbit speed, tangential to their radial offset from the
/// central body — the same direction convention the orbit controller
/// uses. Everything else keeps its configured velocity.
fn initial_velocity(
    bc: &BodyConfig,
    central: Option<&BodyConfig>,
    params: &Parameters,
) -> NVec3 {
    let configured = NVec3::from(bc.velocity);
    if bc.kind != BodyKind::Orbiting || configured.norm() > MIN_LEN {
        return configured;
    }
    let central = match central {
        Some(central) => central,
        None => return configured,
    };

    let offset = NVec3::from(bc.position) - NVec3::from(central.position);
    let r = offset.norm();
    if r <= MIN_LEN {
        return configured;
    }

    let speed = BOOTSTRAP_FRACTION * circular_speed(params.g, central.mass, r);
    let radial = offset / r;
    NVec3::new(-radial.z, 0.0, radial.x) * speed
}
