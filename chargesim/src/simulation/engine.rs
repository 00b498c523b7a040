//! Per-frame orchestration of the particle engine
//!
//! `Simulation` exclusively owns the ordered particle collection.
//! Outside code only spawns, steps, reads and clears

use log::{debug, trace};

use crate::error::SimError;
use crate::simulation::forces::ForceSet;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::lifecycle::prune;
use crate::simulation::params::ESCAPE_RADIUS;
use crate::simulation::states::{Particle, ParticleId};
use crate::simulation::vector::Vec2;

pub struct Simulation {
    particles: Vec<Particle>, // live particles, insertion order
    forces: ForceSet,
    next_id: u64,
    t: f64, // simulated time
    frame: u64,
}

impl Simulation {
    /// Empty simulation with the standard force set
    pub fn new() -> Self {
        Self::with_forces(ForceSet::standard())
    }

    pub fn with_forces(forces: ForceSet) -> Self {
        Self {
            particles: Vec::new(),
            forces,
            next_id: 0,
            t: 0.0,
            frame: 0,
        }
    }

    /// Add a particle at rest and return its id
    pub fn spawn(&mut self, position: Vec2, charge: f64, mass: f64, radius: f64) -> Result<ParticleId, SimError> {
        self.spawn_with_velocity(position, Vec2::zeros(), charge, mass, radius)
    }

    /// Add a particle with an initial velocity (scenario files)
    pub fn spawn_with_velocity(
        &mut self,
        position: Vec2,
        velocity: Vec2,
        charge: f64,
        mass: f64,
        radius: f64,
    ) -> Result<ParticleId, SimError> {
        let id = ParticleId(self.next_id);
        let particle = Particle::new(id, position, charge, mass, radius)?.with_velocity(velocity);

        self.next_id += 1;
        self.particles.push(particle);
        debug!("spawned particle {id} at ({}, {}), q = {charge}, m = {mass}, r = {radius}", position.x(), position.y());

        Ok(id)
    }

    /// One frame: prune escaped particles, then integrate the survivors
    pub fn step(&mut self, dt: f64) {
        let pruned = prune(&mut self.particles, ESCAPE_RADIUS);

        euler_integrator(&mut self.particles, &self.forces, dt);

        self.t += dt;
        self.frame += 1;
        trace!("frame {}: {} live, {} pruned", self.frame, self.particles.len(), pruned);
    }

    /// Read-only view of the live particles, insertion order
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id == id)
    }

    /// Remove every particle
    pub fn clear(&mut self) {
        debug!("clearing {} particles", self.particles.len());
        self.particles.clear();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}
