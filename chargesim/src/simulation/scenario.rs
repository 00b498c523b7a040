//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - viewer window settings
//! - the fixed time step `dt`
//! - attributes for click-spawned particles
//! - the `Simulation` holding the initial particles
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! input, physics and rendering systems

use bevy::prelude::Resource;
use log::{info, warn};

use crate::configuration::config::{ScenarioConfig, SpawnConfig, WindowConfig};
use crate::error::SimError;
use crate::simulation::engine::Simulation;
use crate::simulation::states::validate_attributes;
use crate::simulation::vector::Vec2;

/// Bevy resource representing a fully-initialized scenario
#[derive(Resource)]
pub struct Scenario {
    pub window: WindowConfig,
    pub dt: f64,
    pub spawn: SpawnConfig,
    pub simulation: Simulation,
}

impl Scenario {
    /// Validate `cfg` and spawn its initial particles
    ///
    /// A malformed vector or a bad frame rate / spawn setting aborts the build.
    /// An initial particle with invalid mass or radius is skipped with a warning
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        if !(cfg.frame_rate > 0.0) {
            return Err(SimError::InvalidFrameRate(cfg.frame_rate));
        }
        let dt = cfg.frame_rate.recip();

        // Click spawns would fail every time otherwise
        validate_attributes(cfg.spawn.mass, cfg.spawn.radius)?;

        let mut simulation = Simulation::new();
        for (i, pc) in cfg.particles.iter().enumerate() {
            let position = Vec2::try_from_slice(&pc.position)?;
            let velocity = match &pc.velocity {
                Some(v) => Vec2::try_from_slice(v)?,
                None => Vec2::zeros(),
            };

            if let Err(err) = simulation.spawn_with_velocity(position, velocity, pc.charge, pc.mass, pc.radius) {
                warn!("skipping scenario particle {i}: {err}");
            }
        }

        info!("scenario built: {} particles, dt = {dt}", simulation.len());

        Ok(Self {
            window: cfg.window,
            dt,
            spawn: cfg.spawn,
            simulation,
        })
    }

    /// Advance the simulation `steps` frames with the fixed step
    pub fn run_steps(&mut self, steps: u64) {
        for _ in 0..steps {
            self.simulation.step(self.dt);
        }
    }
}
