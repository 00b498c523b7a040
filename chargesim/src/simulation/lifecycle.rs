//! Removal of particles that leave the simulated region

use log::debug;

use super::states::Particle;

/// True when the particle lies farther than `bound` from the origin
/// A non-finite position counts as escaped
pub fn has_escaped(particle: &Particle, bound: f64) -> bool {
    !(particle.position.magnitude() <= bound)
}

/// Remove every escaped particle in place, keeping the order of the rest
/// Returns how many particles were removed
pub fn prune(particles: &mut Vec<Particle>, bound: f64) -> usize {
    let before = particles.len();
    particles.retain(|p| {
        let escaped = has_escaped(p, bound);
        if escaped {
            debug!("pruning particle {} at ({}, {})", p.id, p.position.x(), p.position.y());
        }
        !escaped
    });
    before - particles.len()
}
