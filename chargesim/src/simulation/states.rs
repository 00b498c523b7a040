//! Particle state for the simulation
//!
//! A `Particle` owns its kinematic state (position, velocity, last
//! acceleration) and its static attributes (charge, mass, radius).
//! Fields are crate-private: only the integrator mutates them, everything
//! outside the crate reads through accessors

use std::fmt;

use crate::error::SimError;
use crate::simulation::vector::Vec2;

/// Stable identity of a particle, assigned by the simulation on spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub u64);

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub(crate) id: ParticleId,
    pub(crate) position: Vec2,
    pub(crate) velocity: Vec2,
    pub(crate) acceleration: Vec2, // last computed, informational
    pub(crate) charge: f64,
    pub(crate) mass: f64,
    pub(crate) radius: f64, // softening term of the force law
}

impl Particle {
    /// Create a particle at rest
    /// Mass and radius must both be strictly positive (NaN is rejected too)
    pub fn new(id: ParticleId, position: Vec2, charge: f64, mass: f64, radius: f64) -> Result<Self, SimError> {
        validate_attributes(mass, radius)?;
        Ok(Self {
            id,
            position,
            velocity: Vec2::zeros(),
            acceleration: Vec2::zeros(),
            charge,
            mass,
            radius,
        })
    }

    /// Same particle with an initial velocity
    pub fn with_velocity(self, velocity: Vec2) -> Self {
        Self { velocity, ..self }
    }

    pub fn id(&self) -> ParticleId {
        self.id
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    pub fn charge(&self) -> f64 {
        self.charge
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// Check the static attributes a particle needs for the force law to be defined
pub fn validate_attributes(mass: f64, radius: f64) -> Result<(), SimError> {
    if !(mass > 0.0) {
        return Err(SimError::InvalidMass(mass));
    }
    if !(radius > 0.0) {
        return Err(SimError::InvalidRadius(radius));
    }
    Ok(())
}
