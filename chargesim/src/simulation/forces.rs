//! Pairwise force terms for the particle engine
//!
//! Defines the [`PairForce`] trait and a [`ForceSet`] that sums several
//! terms into the acceleration one particle receives from another.
//! The standard set blends gravity, an "electroweak" charge term and a
//! short-range "electrostrong" repulsion, all softened by the particle radii

use crate::simulation::params::{G, K};
use crate::simulation::states::Particle;
use crate::simulation::vector::Vec2;

/// Geometry shared by every term for one (target, source) pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairGeometry {
    pub dir: Vec2, // unit vector from target toward source
    pub distance: f64, // raw separation
    pub effective_distance: f64, // separation / (r_target + r_source)
}

impl PairGeometry {
    /// Geometry of the pair, or `None` when both particles sit at the exact
    /// same position (direction undefined, the pair contributes nothing)
    ///
    /// Near-coincident pairs still get a geometry, however large their forces get
    pub fn between(target: &Particle, source: &Particle) -> Option<Self> {
        let delta = source.position - target.position;
        let distance = delta.magnitude();
        if distance == 0.0 {
            return None;
        }

        let dir = delta.normalized().ok()?;
        Some(Self {
            dir,
            distance,
            effective_distance: distance / (target.radius + source.radius),
        })
    }
}

/// A single force law acting between two particles
/// Implementations return the force exerted on `target` by `source`
pub trait PairForce {
    fn force(&self, target: &Particle, source: &Particle, geometry: &PairGeometry) -> Vec2;
}

/// Collection of pairwise force terms
/// The forces of all terms are summed, then divided by the target mass
pub struct ForceSet {
    terms: Vec<Box<dyn PairForce + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Gravity + electroweak + electrostrong with the fixed constants
    pub fn standard() -> Self {
        Self::new()
            .with(Gravity { g: G })
            .with(Electroweak { k: K })
            .with(Electrostrong { k: K })
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: PairForce + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Acceleration imparted on `target` by `source` (a = F / m)
    /// Coincident particles contribute zero and no term is evaluated
    pub fn acceleration(&self, target: &Particle, source: &Particle) -> Vec2 {
        let Some(geometry) = PairGeometry::between(target, source) else {
            return Vec2::zeros();
        };

        let force = self
            .terms
            .iter()
            .fold(Vec2::zeros(), |sum, term| sum + term.force(target, source, &geometry));

        force / target.mass
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::standard()
    }
}

/// Attractive gravity-like term: G m_t m_s / d_eff², toward the source
pub struct Gravity {
    pub g: f64,
}

impl PairForce for Gravity {
    fn force(&self, target: &Particle, source: &Particle, geometry: &PairGeometry) -> Vec2 {
        let d = geometry.effective_distance;
        geometry.dir * (self.g * target.mass * source.mass / (d * d))
    }
}

/// Charge term: K q_t q_s / d_eff², toward the source
/// The sign comes only from the charge product, so like charges attract here
pub struct Electroweak {
    pub k: f64,
}

impl PairForce for Electroweak {
    fn force(&self, target: &Particle, source: &Particle, geometry: &PairGeometry) -> Vec2 {
        let d = geometry.effective_distance;
        geometry.dir * (self.k * target.charge * source.charge / (d * d))
    }
}

/// Short-range repulsion: K m_t m_s / d_eff³, away from the source
pub struct Electrostrong {
    pub k: f64,
}

impl PairForce for Electrostrong {
    fn force(&self, target: &Particle, source: &Particle, geometry: &PairGeometry) -> Vec2 {
        let d = geometry.effective_distance;
        -geometry.dir * (self.k * target.mass * source.mass / (d * d * d))
    }
}
