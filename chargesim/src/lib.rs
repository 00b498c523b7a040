pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{SimError, VectorError};

pub use simulation::vector::Vec2;
pub use simulation::states::{Particle, ParticleId};
pub use simulation::forces::{ForceSet, PairForce, PairGeometry, Gravity, Electroweak, Electrostrong};
pub use simulation::integrator::{euler_integrator, integrate_particle, net_acceleration};
pub use simulation::lifecycle::{prune, has_escaped};
pub use simulation::engine::Simulation;
pub use simulation::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, WindowConfig, SpawnConfig, ParticleConfig};

pub use visualization::chargesim_vis2d::{run_2d, PhysicsPlugin};

pub use benchmark::benchmark::bench_step;
