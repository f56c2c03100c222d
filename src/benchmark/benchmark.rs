use std::time::Instant;

use crate::simulation::forces::{ForceSet, Gravity};
use crate::simulation::integrator::euler_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec3, System};

/// Time batches of raw integration ticks, without any rendering attached
///
/// Uses the default bounce scenario constants so runs are deterministic and
/// comparable across changes to the integrator.
pub fn bench_update() {
    // Different tick counts to test
    let ns = [10_000, 100_000, 1_000_000];

    let parameters = Parameters {
        time_step: 0.01,
        gravity: 9.81,
        ground_level: -1.0,
    };

    let forces = ForceSet::new().with(Gravity {
        g: parameters.gravity,
    });

    for n in ns {
        let body = Body::new(
            NVec3::new(0.0, 0.0, 0.0),
            NVec3::new(0.0, 5.0, 0.0),
            1.0,
            0.8,
            parameters.ground_level,
        )
        .expect("bench body constants are valid");

        let mut sys = System { body, t: 0.0 };

        // Warm up
        euler_step(&mut sys, &forces, &parameters);

        let t0 = Instant::now();
        for _ in 0..n {
            euler_step(&mut sys, &forces, &parameters);
        }
        let dt = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:8}, total = {:8.6} s, per tick = {:10.3} ns",
            dt,
            dt * 1e9 / n as f64
        );
    }
}
