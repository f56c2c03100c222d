//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! [`Scenario`] containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with the body at t = 0)
//! - active force set (`ForceSet` with gravity registered)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! tick and transform-sync systems. All configuration validation happens
//! here, so a constructed `Scenario` always satisfies the body invariants.

use bevy::prelude::Resource;
use thiserror::Error;

use crate::configuration::config::ScenarioConfig;
use crate::simulation::forces::{ForceSet, Gravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyError, NVec3, System};

/// Invalid scenario configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScenarioError {
    #[error("time_step must be positive and finite, got {0}")]
    NonPositiveTimeStep(f32),

    #[error("{0} must be finite, got {1}")]
    NonFiniteParameter(&'static str, f32),

    #[error(transparent)]
    Body(#[from] BodyError),
}

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main runtime bundle constructed from a [`ScenarioConfig`]:
/// parameters, current system state, and the set of active force terms.
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: ForceSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ScenarioError> {
        // Parameters (runtime) from ParametersConfig, validated up front
        let p_cfg = cfg.parameters;
        if !(p_cfg.time_step.is_finite() && p_cfg.time_step > 0.0) {
            return Err(ScenarioError::NonPositiveTimeStep(p_cfg.time_step));
        }
        if !p_cfg.gravity.is_finite() {
            return Err(ScenarioError::NonFiniteParameter("gravity", p_cfg.gravity));
        }
        if !p_cfg.ground_level.is_finite() {
            return Err(ScenarioError::NonFiniteParameter("ground_level", p_cfg.ground_level));
        }
        let parameters = Parameters {
            time_step: p_cfg.time_step,
            gravity: p_cfg.gravity,
            ground_level: p_cfg.ground_level,
        };

        // Body: map `BodyConfig` -> runtime `Body` using nalgebra vectors;
        // mass/elasticity preconditions are checked by the constructor
        let b_cfg = cfg.body;
        let body = Body::new(
            NVec3::new(b_cfg.position[0], b_cfg.position[1], b_cfg.position[2]),
            NVec3::new(b_cfg.velocity[0], b_cfg.velocity[1], b_cfg.velocity[2]),
            b_cfg.mass,
            b_cfg.elasticity,
            parameters.ground_level,
        )?;

        // Initial system state: body at t = 0
        let system = System {
            body,
            t: 0.0,
        };

        // Forces: construct a ForceSet and register gravity
        let forces = ForceSet::new().with(Gravity {
            g: parameters.gravity,
        });

        Ok(Self {
            parameters,
            system,
            forces,
        })
    }
}
