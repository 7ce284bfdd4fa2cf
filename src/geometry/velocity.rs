//! Per-frame velocity
//!
//! A velocity is the displacement applied in one tick, not a per-second
//! rate. Angles are in degrees, measured from +x toward +y (clockwise on
//! screen, since y grows downward).

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Change in position per tick
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub dx: f64,
    pub dy: f64,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Velocity of magnitude `speed` pointing at `angle` degrees
    pub fn from_angle_and_speed(angle: f64, speed: f64) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();
        Self::new(speed * cos, speed * sin)
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.as_dvec2().length()
    }

    /// Direction in degrees, normalized to `[0, 360)`
    pub fn angle_degrees(&self) -> f64 {
        self.dy.atan2(self.dx).to_degrees().rem_euclid(360.0)
    }

    #[inline]
    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.dx, self.dy)
    }

    #[inline]
    pub fn apply_to_point(&self, p: DVec2) -> DVec2 {
        p + self.as_dvec2()
    }

    /// Mirror off a vertical surface
    pub fn flip_x(self) -> Self {
        Self::new(-self.dx, self.dy)
    }

    /// Mirror off a horizontal surface
    pub fn flip_y(self) -> Self {
        Self::new(self.dx, -self.dy)
    }

    pub fn reversed(self) -> Self {
        Self::new(-self.dx, -self.dy)
    }
}

impl From<DVec2> for Velocity {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}
