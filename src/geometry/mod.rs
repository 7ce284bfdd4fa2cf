//! Planar geometry for the collision engine
//!
//! Screen coordinates: x grows to the right, y grows downward. All math is
//! done in `f64` so the tolerances in [`crate::consts`] hold.

pub mod point;
pub mod rect;
pub mod segment;
pub mod velocity;

pub use point::ApproxEq;
pub use rect::Rect;
pub use segment::Segment;
pub use velocity::Velocity;
