//! Core state types for the planar N-body simulation.
//!
//! Defines the body/system structs:
//! - `Body` with position, velocity, mass, and orbital role
//! - `System` holding the ordered body list and the current time `t`
//!
//! All motion lives on the XZ plane. Positions and velocities still carry a
//! `y` component so the 3D renderer can consume them directly; the stepper
//! keeps that component at zero.

use nalgebra::Vector3;
use thiserror::Error;

pub type NVec3 = Vector3<f64>;

/// Shortest difference vector worth normalizing. Anything at or below this
/// is treated as coincident and the stage that hit it skips the pair.
pub const MIN_LEN: f64 = 1e-9;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("body mass must be positive and finite, got {0}")]
    NonPositiveMass(f64),

    #[error("physics parameter `{name}` must be positive and finite, got {value}")]
    BadParameter { name: &'static str, value: f64 },

    #[error("scenario defines no bodies")]
    NoBodies,
}

/// Role of a body in the orbit controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyRole {
    /// Anchor of the orbit controller. The first body added with this role
    /// becomes the anchor; every other body is corrected around it.
    Central,
    /// Corrected toward a circular orbit around the central body.
    Orbiting,
}

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f64, // mass
    pub role: BodyRole,
}

/// Ordered body collection plus the accumulated simulation time.
///
/// Append-only: the stepper never reorders, removes, or inserts bodies, so
/// indices stay aligned with any external per-body metadata for the
/// lifetime of the system.
#[derive(Debug, Clone, Default)]
pub struct System {
    bodies: Vec<Body>,
    central: Option<usize>,
    pub t: f64, // time
}

impl System {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a body.
    ///
    /// Mass must be positive and finite: the force stage divides by it when
    /// turning force into acceleration, and a zero mass would silently
    /// poison every later state with non-finite values. Rejected here
    /// instead.
    pub fn add_body(&mut self, body: Body) -> Result<(), SimError> {
        if !body.m.is_finite() || body.m <= 0.0 {
            return Err(SimError::NonPositiveMass(body.m));
        }
        if body.role == BodyRole::Central && self.central.is_none() {
            self.central = Some(self.bodies.len());
        }
        self.bodies.push(body);
        Ok(())
    }

    /// Read-only view of the bodies, insertion order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Index of the orbit anchor, if any body was tagged [`BodyRole::Central`].
    pub fn central(&self) -> Option<usize> {
        self.central
    }

    // Mutable per-body access for the stages. A slice, not the vec:
    // membership is fixed between calls.
    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }
}
