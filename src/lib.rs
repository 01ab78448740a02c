pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec2};
pub use simulation::params::Parameters;
pub use simulation::forces::NewtonianGravity;
pub use simulation::trajectory::TrajectoryHistory;
pub use simulation::integrator::{integrate, verlet_step};
pub use simulation::scenario::Scenario;
pub use simulation::error::{ConfigError, IntegrationError, ZeroSeparation};

pub use configuration::config::{BodyConfig, ParametersConfig, PlaybackConfig, ScenarioConfig};

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::bench_verlet;
