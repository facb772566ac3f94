pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::{SimError, SimResult};

pub use simulation::space_point::{signum, NVec3i, SpacePoint, MAX_COORDINATE};
pub use simulation::body::{Body, BodyKind, Planet, Star};
pub use simulation::system::System;
pub use simulation::forces::{Attraction, UnitStepGravity};
pub use simulation::integrator::unit_step;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ScenarioConfig, SimulationConfig};
pub use configuration::descriptor::{parse_descriptors, BodyDescriptor};

pub use benchmark::benchmark::{bench_step_curve, make_system};
