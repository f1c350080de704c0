//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`PhysicsConfig`] – the tunable physics parameters and jitter seed
//! - [`VisualConfig`]  – viewer options (2D/3D, world-to-screen scale)
//! - [`BodyConfig`]    – initial state and display style for each body
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario file
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! physics:
//!   gravity_constant: 0.02   # shared by orbit controller and force law
//!   damping: 0.999           # per-tick velocity decay
//!   max_speed: 1.2           # hard speed cap
//!   min_distance: 1.2        # collision separation distance
//!   boundary_radius: 12.0    # containment sphere radius
//!   softening: 1.0e-6        # added to squared distance
//!   time_step: 0.016         # fixed step per frame
//!   seed: 42                 # optional; omit for entropy-seeded jitter
//!
//! visual:
//!   three_d: false           # false -> top-down 2D viewer
//!   scale: 50.0              # world units -> screen pixels
//!
//! bodies:
//!   - name: sun
//!     kind: central          # central | orbiting | asteroid
//!     position: [0.0, 0.0, 0.0]
//!     velocity: [0.0, 0.0, 0.0]
//!     mass: 20.0
//!     radius: 0.2
//!     color: [1.0, 0.7, 0.2]
//! ```
//!
//! The simulation maps this configuration into its runtime scenario
//! representation; any change to the file is applied by rebuilding that
//! scenario from scratch, never by mutating it in place.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario file")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario YAML")]
    Yaml(#[from] serde_yaml::Error),
}

/// Load a [`ScenarioConfig`] from a YAML file.
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig, ConfigError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_yaml::from_reader(reader)?)
}

/// How a body participates in the orbit controller and scenario building.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    /// The dominant mass everything else orbits.
    Central,
    /// Gets a tangential bootstrap velocity at build time when its
    /// configured velocity is zero.
    Orbiting,
    /// Corrected like an orbiting body but keeps its configured velocity.
    Asteroid,
}

/// The tunable physics parameters for a scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct PhysicsConfig {
    pub gravity_constant: f64, // shared by orbit controller and force law
    pub damping: f64,          // per-tick velocity decay factor
    pub max_speed: f64,        // hard speed cap
    pub min_distance: f64,     // collision separation distance
    pub boundary_radius: f64,  // containment sphere radius
    #[serde(default = "default_softening")]
    pub softening: f64,        // added to squared distance
    #[serde(default = "default_time_step")]
    pub time_step: f64,        // fixed step per frame
    #[serde(default)]
    pub seed: Option<u64>,     // jitter seed; None draws from entropy
}

fn default_softening() -> f64 {
    1e-6
}

fn default_time_step() -> f64 {
    0.016
}

/// Viewer options.
#[derive(Deserialize, Debug, Clone)]
pub struct VisualConfig {
    #[serde(default)]
    pub three_d: bool, // false -> top-down 2D viewer, true -> 3D viewer
    #[serde(default = "default_scale")]
    pub scale: f32, // world units -> screen pixels
}

fn default_scale() -> f32 {
    50.0
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            three_d: false,
            scale: default_scale(),
        }
    }
}

/// Configuration for a single body: initial state plus display style.
/// List order matters — runtime body indices follow it.
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub kind: BodyKind,
    pub position: [f64; 3], // initial position in simulation units
    pub velocity: [f64; 3], // initial velocity in simulation units per time unit
    pub mass: f64,
    pub radius: f64, // display radius, not used by the physics
    pub color: [f32; 3],
    #[serde(default)]
    pub description: Option<String>,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub visual: VisualConfig,
    pub bodies: Vec<BodyConfig>,
}
