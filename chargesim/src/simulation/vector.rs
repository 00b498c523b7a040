//! 2D vector value type for the particle engine
//!
//! `Vec2` wraps nalgebra's `Vector2<f64>` and keeps it strictly value-style:
//! every operation returns a new vector, nothing mutates an operand.
//! On top of the plain arithmetic it adds checked normalization and the
//! magnitude rescaling rules used by the integrator

use std::ops::{Add, Div, Mul, Neg, Sub};

use nalgebra::Vector2;

use crate::error::VectorError;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2(NVec2);

impl Vec2 {
    /// Number of components, fixed for this domain
    pub const DIM: usize = 2;

    pub fn new(x: f64, y: f64) -> Self {
        Self(NVec2::new(x, y))
    }

    pub fn zeros() -> Self {
        Self(NVec2::zeros())
    }

    /// Build a vector from a component list (e.g. a YAML `[x, y]` entry)
    /// Fails with [`VectorError::DimensionMismatch`] unless exactly two components are given
    pub fn try_from_slice(components: &[f64]) -> Result<Self, VectorError> {
        match components {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(VectorError::DimensionMismatch {
                expected: Self::DIM,
                found: components.len(),
            }),
        }
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn scale(&self, s: f64) -> Self {
        Self(self.0 * s)
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.0.dot(&other.0)
    }

    /// Euclidean norm
    /// Uses `hypot` so tiny non-zero vectors do not underflow to zero
    pub fn magnitude(&self) -> f64 {
        self.0.x.hypot(self.0.y)
    }

    pub fn is_finite(&self) -> bool {
        self.0.x.is_finite() && self.0.y.is_finite()
    }

    /// Unit vector pointing along `self`
    /// Fails with [`VectorError::Degenerate`] when the magnitude is exactly zero
    pub fn normalized(&self) -> Result<Self, VectorError> {
        let m = self.magnitude();
        if m == 0.0 {
            return Err(VectorError::Degenerate);
        }
        Ok(Self(self.0 / m))
    }

    /// Limit the magnitude to `limit`, keeping the direction
    pub fn clamp_magnitude(&self, limit: f64) -> Self {
        self.rescale_above(limit, limit)
    }

    /// If the magnitude exceeds `threshold`, return a vector of magnitude `target`
    /// along the same direction; otherwise return `self` unchanged
    ///
    /// `clamp_magnitude` is the special case `threshold == target`
    pub fn rescale_above(&self, threshold: f64, target: f64) -> Self {
        if self.magnitude() <= threshold {
            return *self;
        }
        match self.normalized() {
            Ok(dir) => dir * target,
            // only reachable with a negative threshold and a zero vector
            Err(_) => *self,
        }
    }
}

impl Default for Vec2 {
    fn default() -> Self {
        Self::zeros()
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl TryFrom<&[f64]> for Vec2 {
    type Error = VectorError;

    fn try_from(components: &[f64]) -> Result<Self, Self::Error> {
        Self::try_from_slice(components)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2(self.0 + rhs.0)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2(self.0 - rhs.0)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, s: f64) -> Vec2 {
        self.scale(s)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, v: Vec2) -> Vec2 {
        v.scale(self)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;

    fn div(self, s: f64) -> Vec2 {
        Vec2(self.0 / s)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2(-self.0)
    }
}
