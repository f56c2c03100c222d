//! Fixed-step time integration for the falling body
//!
//! One tick: accumulate the standing forces, advance the body by one
//! semi-implicit Euler step, advance the system clock. Driven by
//! `ForceSet` and `Parameters`.

use super::forces::ForceSet;
use super::params::Parameters;
use super::states::System;

/// Advance the system by one fixed step of `params.time_step`
///
/// Forces are pushed into the body's accumulator at the current time, then
/// consumed (and cleared) by `Body::update`. Velocity is updated before
/// position, so the new velocity drives this step's position change.
pub fn euler_step(sys: &mut System, forces: &ForceSet, params: &Parameters) {
    let dt = params.time_step; // time step dt

    // Standing forces for this tick (gravity, etc.)
    forces.apply(sys.t, &mut sys.body);

    // v_n+1 = v_n + (F/m) dt, then x_n+1 = x_n + v_n+1 dt,
    // accumulator cleared, ground collision resolved
    sys.body.update(dt);

    // Advance the clock by one full step
    sys.t += dt;
}
