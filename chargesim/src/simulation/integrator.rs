//! Fixed-step explicit Euler integrator
//!
//! Particles are advanced one at a time in insertion order. Each update
//! reads the positions as they are at that moment, so particles updated
//! earlier in a frame act on later ones with their new positions

use super::forces::ForceSet;
use super::params::{BOOST_SPEED, MAX_SPEED};
use super::states::Particle;
use super::vector::Vec2;

/// Net acceleration on `particles[i]` from every other particle
/// Identity is by index: a distinct particle at the same position still counts (as zero)
///
/// # Panics
/// If `i >= particles.len()`
pub fn net_acceleration(i: usize, particles: &[Particle], forces: &ForceSet) -> Vec2 {
    let target = &particles[i];
    particles
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != i)
        .fold(Vec2::zeros(), |acc, (_, source)| acc + forces.acceleration(target, source))
}

/// Advance `particles[i]` by one step of `dt`
///
/// # Panics
/// If `i >= particles.len()`
pub fn integrate_particle(i: usize, particles: &mut [Particle], forces: &ForceSet, dt: f64) {
    let a = net_acceleration(i, particles, forces);

    let p = &mut particles[i];
    p.acceleration = a;

    // v_n+1 = v_n + a dt, then clamp-and-boost
    p.velocity = (p.velocity + a * dt).rescale_above(MAX_SPEED, BOOST_SPEED);

    // x_n+1 = x_n + v_n+1 dt
    p.position = p.position + p.velocity * dt;
}

/// Advance every particle by one step, sequentially
pub fn euler_integrator(particles: &mut [Particle], forces: &ForceSet, dt: f64) {
    for i in 0..particles.len() {
        integrate_particle(i, particles, forces, dt);
    }
}
