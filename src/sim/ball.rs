//! Balls
//!
//! A ball moves by its velocity once per tick. Before moving it asks the
//! collision registry for the first obstacle along the way; if there is one
//! it stops just short of the contact point and takes the velocity the
//! obstacle hands back. Any distance left over after a bounce is dropped
//! for that tick.

use std::rc::Rc;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::collision::ObstacleId;
use super::color::Color;
use super::environment::CollisionRegistry;
use super::listener::HitError;
use crate::consts::BACK_OFF;
use crate::geometry::{Segment, Velocity};

/// Stable identity of a ball within an arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct BallId(pub u32);

/// What happened during one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Nothing in the way; moved by the full velocity
    Free,
    /// Stopped short of `point` on `obstacle` and rebounded
    Rebounded { obstacle: ObstacleId, point: DVec2 },
}

/// A moving ball
#[derive(Debug)]
pub struct Ball {
    id: BallId,
    radius: f64,
    center: DVec2,
    velocity: Velocity,
    color: Color,
    /// Set by a listener when the ball leaves play
    removed: bool,
    environment: Rc<CollisionRegistry>,
}

impl Ball {
    pub fn new(
        radius: f64,
        center: DVec2,
        velocity: Velocity,
        environment: Rc<CollisionRegistry>,
    ) -> Self {
        Self {
            id: BallId::default(),
            radius,
            center,
            velocity,
            color: Color::BLACK,
            removed: false,
            environment,
        }
    }

    pub fn with_id(mut self, id: BallId) -> Self {
        self.id = id;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn id(&self) -> BallId {
        self.id
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Take the ball out of play; the owner drops it after the tick
    pub fn mark_removed(&mut self) {
        self.removed = true;
    }

    /// The segment the center would travel this tick
    pub fn trajectory(&self) -> Segment {
        Segment::new(self.center, self.velocity.apply_to_point(self.center))
    }

    /// Advance one tick
    ///
    /// Obstacles are tested grown by the radius, so the ball's surface stops
    /// short of them, not only its center. Listener failures raised by the
    /// struck obstacle propagate; the ball is then left at its backed-off
    /// position with its old velocity.
    pub fn step(&mut self) -> Result<StepOutcome, HitError> {
        let trajectory = self.trajectory();
        let Some(collision) = self
            .environment
            .closest_collision_with_clearance(&trajectory, self.radius)
        else {
            self.center = trajectory.end;
            return Ok(StepOutcome::Free);
        };

        let incoming = self.velocity;
        self.center = collision.point - incoming.as_dvec2() * BACK_OFF;

        let obstacle = collision.obstacle;
        self.velocity = obstacle.hit(self, collision.point, incoming)?;
        log::trace!(
            "Ball {} hit {} at {:?}: {:?} -> {:?}",
            self.id.0,
            obstacle.id(),
            collision.point,
            incoming,
            self.velocity
        );

        Ok(StepOutcome::Rebounded {
            obstacle: obstacle.id(),
            point: collision.point,
        })
    }
}
