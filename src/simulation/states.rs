//! Core state types for the falling-body simulation.
//!
//! Defines the single rigid point-mass [`Body`] and the [`System`] bundle
//! holding it together with the current simulation time `t`.
//!
//! All state is single-precision (`f32`), using the `NVec3` nalgebra alias.

use nalgebra::{Matrix4, Vector3};
use thiserror::Error;

pub type NVec3 = Vector3<f32>;

/// Construction-time precondition violations for [`Body`].
///
/// Mass and elasticity are validated once, at construction; `update` never
/// re-checks them (division by mass happens every tick).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BodyError {
    #[error("mass must be positive and finite, got {0}")]
    NonPositiveMass(f32),

    #[error("elasticity must lie in [0, 1], got {0}")]
    ElasticityOutOfRange(f32),
}

/// The single simulated rigid point-mass.
///
/// `f` is the per-tick force accumulator: it is reset to zero at the end of
/// every `update`, so persistent forces (gravity) must be re-applied each
/// tick by the caller.
#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub m: f32, // mass, > 0
    pub f: NVec3, // accumulated force, cleared by update
    pub elasticity: f32, // restitution in [0, 1]
    pub ground: f32, // ground plane height (world-space y)
}

impl Body {
    /// Create a body with an empty force accumulator.
    ///
    /// Rejects non-positive or non-finite mass and elasticity outside
    /// `[0, 1]`; these are precondition violations, not runtime conditions.
    pub fn new(x: NVec3, v: NVec3, m: f32, elasticity: f32, ground: f32) -> Result<Self, BodyError> {
        if !(m.is_finite() && m > 0.0) {
            return Err(BodyError::NonPositiveMass(m));
        }
        if !(elasticity.is_finite() && (0.0..=1.0).contains(&elasticity)) {
            return Err(BodyError::ElasticityOutOfRange(elasticity));
        }

        Ok(Self {
            x,
            v,
            m,
            f: NVec3::zeros(),
            elasticity,
            ground,
        })
    }

    /// Add `force` into the per-tick accumulator. No validation: finite
    /// inputs are the caller's responsibility.
    pub fn add_force(&mut self, force: NVec3) {
        self.f += force;
    }

    /// Advance the body by one step of length `dt`.
    ///
    /// Semi-implicit Euler: velocity is updated from the accumulated force
    /// first, then position from the new velocity. The accumulator is zeroed
    /// every step, so it is always the zero vector after `update` returns.
    ///
    /// Ground collision: if the new position is below the ground plane, the
    /// body is clamped to the surface and the vertical velocity reflected,
    /// scaled by elasticity. Penetration deeper than one step of travel is
    /// corrected only to the surface; there is no swept collision.
    pub fn update(&mut self, dt: f32) {
        // a = F / m
        let acceleration = self.f / self.m;

        // v_n+1 = v_n + a dt
        self.v += acceleration * dt;

        // x_n+1 = x_n + v_n+1 dt
        self.x += self.v * dt;

        // Forces never persist across ticks
        self.f = NVec3::zeros();

        // Ground collision: clamp to the plane, reflect vertical velocity
        if self.x.y < self.ground {
            self.x.y = self.ground;
            self.v.y = -self.v.y * self.elasticity;
        }
    }

    /// Model transform placing the body's mesh at its current position.
    ///
    /// A pure translation; the body carries no orientation state. nalgebra
    /// matrices are column-major, so `as_slice()` yields the 16 floats in
    /// the order a shader uniform upload expects.
    pub fn model_transform(&self) -> Matrix4<f32> {
        Matrix4::new_translation(&self.x)
    }
}

/// The full mutable simulation state: the one body plus the current time.
#[derive(Debug, Clone)]
pub struct System {
    pub body: Body,
    pub t: f32, // time
}
