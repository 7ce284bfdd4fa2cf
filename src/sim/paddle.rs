//! The player's paddle
//!
//! Moves horizontally inside the arena walls and steers balls by where they
//! land: the top face is split into five zones, each with a fixed rebound
//! angle, so the player can aim.

use std::cell::Cell;

use glam::DVec2;

use super::ball::Ball;
use super::collision::{HitFace, Obstacle, ObstacleId};
use super::color::Color;
use super::listener::HitError;
use crate::approx_eq;
use crate::consts::{PADDLE_ZONE_ANGLES, PADDLE_ZONES};
use crate::geometry::{Rect, Velocity};

/// Zone that mirrors instead of steering
const MIRROR_ZONE: usize = PADDLE_ZONES / 2;

/// Player paddle
///
/// The rectangle lives in a `Cell` so the paddle can be moved while it is
/// shared with the collision registry.
#[derive(Debug)]
pub struct Paddle {
    id: ObstacleId,
    rect: Cell<Rect>,
    color: Color,
    /// Horizontal distance per move
    speed: f64,
    /// Leftmost x the paddle may occupy
    min_x: f64,
    /// Rightmost x the paddle's right edge may reach
    max_x: f64,
}

impl Paddle {
    pub fn new(id: ObstacleId, rect: Rect, color: Color, speed: f64, min_x: f64, max_x: f64) -> Self {
        debug_assert!(max_x - min_x >= rect.width, "paddle wider than its track");
        Self {
            id,
            rect: Cell::new(rect),
            color,
            speed,
            min_x,
            max_x,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect.get()
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Horizontal track as `(min_x, max_x)`
    pub fn bounds(&self) -> (f64, f64) {
        (self.min_x, self.max_x)
    }

    /// Move left by one step; once at or past the left bound, wrap to the right bound
    ///
    /// A step is never shortened, so the last one before a wrap may overshoot
    /// the bound.
    pub fn move_left(&self) {
        let rect = self.rect.get();
        let x = if rect.left() > self.min_x && !approx_eq(rect.left(), self.min_x) {
            rect.left() - self.speed
        } else {
            self.max_x - rect.width
        };
        self.rect.set(rect.with_left(x));
    }

    /// Move right by one step; once at or past the right bound, wrap to the left bound
    pub fn move_right(&self) {
        let rect = self.rect.get();
        let x = if rect.right() < self.max_x && !approx_eq(rect.right(), self.max_x) {
            rect.left() + self.speed
        } else {
            self.min_x
        };
        self.rect.set(rect.with_left(x));
    }

    /// Zone index (0..PADDLE_ZONES) of a contact x coordinate, left to right
    pub fn zone_of(&self, x: f64) -> usize {
        let rect = self.rect.get();
        let zone_width = rect.width / PADDLE_ZONES as f64;
        let zone = ((x - rect.left()) / zone_width).floor();
        zone.clamp(0.0, (PADDLE_ZONES - 1) as f64) as usize
    }
}

impl Obstacle for Paddle {
    fn id(&self) -> ObstacleId {
        self.id
    }

    fn collision_rect(&self) -> Rect {
        self.rect.get()
    }

    fn hit(
        &self,
        hitter: &mut Ball,
        collision_point: DVec2,
        velocity: Velocity,
    ) -> Result<Velocity, HitError> {
        let rect = self.rect.get();
        let face = HitFace::classify(&rect, collision_point, hitter.radius());
        if face != HitFace::Horizontal {
            return Ok(face.reflect(velocity));
        }

        let zone = self.zone_of(collision_point.x);
        let outgoing = if zone == MIRROR_ZONE {
            velocity.flip_y()
        } else {
            Velocity::from_angle_and_speed(PADDLE_ZONE_ANGLES[zone], velocity.speed())
        };
        log::trace!("Paddle zone {zone} -> {outgoing:?}");
        Ok(outgoing)
    }
}
