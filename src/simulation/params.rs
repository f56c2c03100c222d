//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step size,
//! - gravitational acceleration `g`,
//! - ground plane height

#[derive(Debug, Clone)]
pub struct Parameters {
    pub time_step: f32, // fixed step size (seconds)
    pub gravity: f32, // gravitational acceleration, applied downward
    pub ground_level: f32, // ground plane height (world-space y)
}
