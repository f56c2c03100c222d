//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`WindowConfig`]     – window dimensions and title (viewer only)
//! - [`ParametersConfig`] – fixed timestep and physical constants
//! - [`BodyConfig`]       – initial state of the body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! window:
//!   width: 800
//!   height: 600
//!   title: "Falling Body"
//!
//! parameters:
//!   time_step: 0.01        # fixed step size (seconds)
//!   gravity: 9.81          # gravitational acceleration
//!   ground_level: -1.0     # ground plane height (world-space y)
//!
//! body:
//!   position: [0.0, 0.0, 0.0]
//!   velocity: [0.0, 5.0, 0.0]
//!   mass: 1.0
//!   elasticity: 0.8        # restitution in [0, 1]
//! ```
//!
//! The engine maps this configuration into its validated runtime scenario
//! representation; invalid values are rejected at build time, not at tick
//! time.

use serde::Deserialize;

/// Window settings for the viewer. Not consumed by the physics core.
#[derive(Deserialize, Debug, Clone)]
pub struct WindowConfig {
    pub width: u32, // window width in pixels
    pub height: u32, // window height in pixels
    pub title: String, // window title
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub time_step: f32, // fixed step size (seconds)
    pub gravity: f32, // gravitational acceleration, applied downward
    pub ground_level: f32, // ground plane height (world-space y)
}

/// Configuration for the body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub position: [f32; 3], // initial position in world units
    pub velocity: [f32; 3], // initial velocity in world units per second
    pub mass: f32, // mass of the body, must be positive
    pub elasticity: f32, // restitution coefficient in [0, 1]
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub window: WindowConfig, // viewer window settings
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub body: BodyConfig, // initial state of the body
}
