pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodyError, NVec3, System};
pub use simulation::params::Parameters;
pub use simulation::forces::{ConstantForce, Force, ForceSet, Gravity};
pub use simulation::integrator::euler_step;
pub use simulation::scenario::{Scenario, ScenarioError};
pub use simulation::ticker::{IntervalClock, ManualClock, TickClock};

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig, WindowConfig};

pub use visualization::fallsim_vis::run_vis;

pub use benchmark::benchmark::bench_update;
