//! Obstacles and collision results
//!
//! Anything a ball can bounce off implements [`Obstacle`]: it exposes a
//! collision rectangle and decides the outgoing velocity when struck.

use std::fmt;
use std::rc::Rc;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::listener::{HitError, HitNotifier};
use crate::approx_eq;
use crate::geometry::{Rect, Velocity};

/// Stable identity of an obstacle within an arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObstacleId(pub u32);

impl fmt::Display for ObstacleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "obstacle#{}", self.0)
    }
}

/// Something a ball can collide with
///
/// `hit` may notify listeners and recolor the hitter, but must not change
/// the obstacle's geometry. Given the same rectangle, point and velocity it
/// returns the same result.
pub trait Obstacle: fmt::Debug {
    fn id(&self) -> ObstacleId;

    /// The rectangle balls collide with
    fn collision_rect(&self) -> Rect;

    /// Resolve a hit at `collision_point` and return the outgoing velocity
    fn hit(
        &self,
        hitter: &mut Ball,
        collision_point: DVec2,
        velocity: Velocity,
    ) -> Result<Velocity, HitError>;

    /// Listener list, for obstacles that broadcast hits
    fn notifier(&self) -> Option<&HitNotifier> {
        None
    }
}

/// The closest collision along a trajectory
#[derive(Debug, Clone)]
pub struct CollisionInfo {
    /// Where the trajectory meets the (possibly grown) collision rectangle
    pub point: DVec2,
    /// The obstacle that was struck
    pub obstacle: Rc<dyn Obstacle>,
}

impl CollisionInfo {
    pub fn obstacle_id(&self) -> ObstacleId {
        self.obstacle.id()
    }
}

/// Which face of a rectangle a contact point lies on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitFace {
    /// Left or right edge
    Vertical,
    /// Top or bottom edge
    Horizontal,
    /// Neither matched (numerical corner case)
    Ambiguous,
}

impl HitFace {
    /// Classify `point` against `rect`, allowing for a hitter of radius `clearance`
    ///
    /// Balls collide with the rectangle grown by their radius, so the contact
    /// point can sit on either outline. The grown one is used when the point
    /// is on it; otherwise the rectangle itself. On the chosen outline the
    /// x test wins over the y test, which means exact corners count as
    /// vertical hits.
    pub fn classify(rect: &Rect, point: DVec2, clearance: f64) -> HitFace {
        let grown = rect.expand(clearance);
        let outline = if clearance > 0.0 && grown.on_boundary(point) {
            grown
        } else {
            *rect
        };

        if approx_eq(point.x, outline.left()) || approx_eq(point.x, outline.right()) {
            HitFace::Vertical
        } else if approx_eq(point.y, outline.top()) || approx_eq(point.y, outline.bottom()) {
            HitFace::Horizontal
        } else {
            HitFace::Ambiguous
        }
    }

    /// Plain mirror reflection for this face
    pub fn reflect(self, velocity: Velocity) -> Velocity {
        match self {
            HitFace::Vertical => velocity.flip_x(),
            HitFace::Horizontal => velocity.flip_y(),
            HitFace::Ambiguous => velocity.reversed(),
        }
    }
}
