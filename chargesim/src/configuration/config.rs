//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`WindowConfig`]   – viewer window size and title
//! - `frame_rate`       – frames per second, the fixed step is `1 / frame_rate`
//! - [`SpawnConfig`]    – attributes of particles spawned by mouse clicks
//! - [`ParticleConfig`] – optional initial particles
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! Physical constants are fixed and live in `simulation::params`, they are
//! deliberately not part of a scenario.
//!
//! # YAML format
//!
//! ```yaml
//! window:
//!   width: 800
//!   height: 600
//!   title: "Physics"
//!
//! frame_rate: 60
//!
//! spawn:
//!   charge: 1.0
//!   mass: 100.0
//!   radius: 10.0
//!
//! particles:
//!   - position: [0.0, 0.0]
//!     mass: 100.0
//!     radius: 30.0
//!   - position: [100.0, 0.0]
//!     velocity: [0.0, 1.0]   # optional, defaults to rest
//!     charge: 0.0            # optional, defaults to 0
//!     mass: 100.0
//!     radius: 30.0
//! ```
//!
//! Every top-level section has a default, so `{}` is a valid scenario.

use serde::Deserialize;

use crate::simulation::params::DEFAULT_FRAME_RATE;

/// Viewer window settings
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            title: "Physics".to_string(),
        }
    }
}

/// Attributes given to particles spawned by a click
/// A right click spawns with the charge negated
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SpawnConfig {
    pub charge: f64,
    pub mass: f64,
    pub radius: f64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            charge: 1.0,
            mass: 100.0,
            radius: 10.0,
        }
    }
}

/// Initial state of one particle
#[derive(Deserialize, Debug, Clone)]
pub struct ParticleConfig {
    pub position: Vec<f64>, // [x, y]
    #[serde(default)]
    pub velocity: Option<Vec<f64>>, // [vx, vy], at rest when omitted
    #[serde(default)]
    pub charge: f64,
    pub mass: f64,
    pub radius: f64,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ScenarioConfig {
    pub window: WindowConfig,
    pub frame_rate: f64,
    pub spawn: SpawnConfig,
    pub particles: Vec<ParticleConfig>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            frame_rate: DEFAULT_FRAME_RATE,
            spawn: SpawnConfig::default(),
            particles: Vec::new(),
        }
    }
}
