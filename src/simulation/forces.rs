//! Force contributors for the falling-body simulation
//!
//! Defines the [`Force`] trait and a [`ForceSet`] that feeds each term's
//! contribution through the body's force accumulator once per tick. Because
//! the accumulator is cleared by every `update`, standing forces such as
//! gravity must be re-applied through the set on every tick.

use crate::simulation::states::{Body, NVec3};

/// Collection of force terms (gravity, constant pushes, etc.)
/// Each term implements [`Force`] and their contributions are summed into
/// the body's accumulator
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add a force term
    pub fn with(mut self, term: impl Force + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Accumulate every term's force on `body` at time `t`
    ///
    /// Equivalent to one `add_force` call with the sum of all terms;
    /// repeated applications within a tick keep accumulating additively
    pub fn apply(&self, t: f32, body: &mut Body) {
        for term in &self.terms {
            let f = term.force(t, body);
            body.add_force(f);
        }
    }
}

/// Trait for force sources acting on the [`Body`]
/// Implementations return their contribution for the current tick
pub trait Force {
    fn force(&self, t: f32, body: &Body) -> NVec3;
}

/// Uniform gravity: `m * g` straight down
pub struct Gravity {
    pub g: f32, // gravitational acceleration
}

impl Force for Gravity {
    fn force(&self, _t: f32, body: &Body) -> NVec3 {
        NVec3::new(0.0, -self.g * body.m, 0.0)
    }
}

/// Fixed external force, independent of body state
pub struct ConstantForce {
    pub f: NVec3,
}

impl Force for ConstantForce {
    fn force(&self, _t: f32, _body: &Body) -> NVec3 {
        self.f
    }
}
