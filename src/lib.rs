//! Brickfall - an Arkanoid-style collision engine
//!
//! Core modules:
//! - `geometry`: Points, segments, axis-aligned rectangles and velocities
//! - `sim`: Obstacles, the collision registry, balls and hit listeners
//! - `config`: Data-driven arena layout

pub mod config;
pub mod geometry;
pub mod sim;

pub use config::{ArenaConfig, ConfigError};

/// Engine-wide constants
pub mod consts {
    /// Tolerance for point equality and segment intersection parameters
    pub const EPSILON: f64 = 1e-5;
    /// Fraction of the velocity a ball backs off from its collision point
    pub const BACK_OFF: f64 = 1e-3;
    /// Below this magnitude two segments are treated as parallel
    pub const PARALLEL_EPSILON: f64 = 1e-10;

    /// Number of equal-width zones across the paddle surface
    pub const PADDLE_ZONES: usize = 5;
    /// Rebound angles (degrees) for the outer paddle zones; the middle zone mirrors
    pub const PADDLE_ZONE_ANGLES: [f64; PADDLE_ZONES] = [210.0, 240.0, 0.0, 300.0, 330.0];

    /// Points awarded per scoring block hit
    pub const HIT_SCORE: i64 = 5;
    /// Bonus points for clearing every block
    pub const CLEAR_BONUS: i64 = 100;
}

/// Approximate equality of two scalars within [`consts::EPSILON`]
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= consts::EPSILON
}
