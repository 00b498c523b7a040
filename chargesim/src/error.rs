//! Error types for the simulation core
//!
//! - [`VectorError`] – failures of the 2D vector primitive
//! - [`SimError`]    – failures when building particles or scenarios

use std::error::Error;
use std::fmt;

/// Failures of [`Vec2`](crate::simulation::vector::Vec2) operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VectorError {
    /// Normalization of a vector whose magnitude is exactly zero
    Degenerate,
    /// A vector was built from a component list of the wrong length
    DimensionMismatch { expected: usize, found: usize },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::Degenerate => write!(f, "cannot normalize a zero-length vector"),
            VectorError::DimensionMismatch { expected, found } => {
                write!(f, "expected {expected} vector components, found {found}")
            }
        }
    }
}

impl Error for VectorError {}

/// Failures raised by the simulation when spawning particles or loading a scenario
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimError {
    /// Mass must be strictly positive
    InvalidMass(f64),
    /// Radius must be strictly positive (it softens the force law)
    InvalidRadius(f64),
    /// Frame rate must be strictly positive, dt is its reciprocal
    InvalidFrameRate(f64),
    Vector(VectorError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidMass(m) => write!(f, "particle mass must be > 0, got {m}"),
            SimError::InvalidRadius(r) => write!(f, "particle radius must be > 0, got {r}"),
            SimError::InvalidFrameRate(hz) => write!(f, "frame rate must be > 0, got {hz}"),
            SimError::Vector(err) => write!(f, "vector error: {err}"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SimError::Vector(err) => Some(err),
            _ => None,
        }
    }
}

impl From<VectorError> for SimError {
    fn from(err: VectorError) -> Self {
        SimError::Vector(err)
    }
}
