//! Fixed physical and runtime constants
//!
//! - force-law strengths (`G`, `K`),
//! - the clamp-and-boost speed rule (`MAX_SPEED`, `BOOST_SPEED`),
//! - the escape bound used for pruning,
//! - the default frame rate (dt = 1 / frame rate)

/// Strength of the attractive gravity-like term
pub const G: f64 = 1.0;

/// Strength of both charge-like terms (electroweak and electrostrong)
pub const K: f64 = 1.0;

/// Speed above which the velocity gets rescaled
pub const MAX_SPEED: f64 = 10.0;

/// Speed a velocity is rescaled to once it exceeds `MAX_SPEED`
/// Larger than `MAX_SPEED` on purpose, so this is a boost, not a ceiling
pub const BOOST_SPEED: f64 = 50.0;

/// Particles farther than this from the origin are pruned
pub const ESCAPE_RADIUS: f64 = 1000.0;

pub const DEFAULT_FRAME_RATE: f64 = 60.0;
