//! Rectangular blocks: bricks, walls and the death region

use std::rc::Rc;

use glam::DVec2;

use super::ball::Ball;
use super::collision::{HitFace, Obstacle, ObstacleId};
use super::color::Color;
use super::listener::{HitError, HitListener, HitNotifier};
use crate::geometry::{Rect, Velocity};

/// A static rectangle that mirrors balls off its faces
#[derive(Debug)]
pub struct Block {
    id: ObstacleId,
    rect: Rect,
    color: Color,
    /// Whether hits are broadcast to listeners (walls are not)
    scoring: bool,
    /// Whether a ball takes this block's color, and is then ignored by it
    adopts_color: bool,
    notifier: HitNotifier,
}

impl Block {
    /// A scoring block that recolors the balls that hit it
    pub fn new(id: ObstacleId, rect: Rect, color: Color) -> Self {
        Self {
            id,
            rect,
            color,
            scoring: true,
            adopts_color: true,
            notifier: HitNotifier::new(),
        }
    }

    /// A non-scoring surface: never notifies, never recolors
    pub fn wall(id: ObstacleId, rect: Rect, color: Color) -> Self {
        Self {
            scoring: false,
            adopts_color: false,
            ..Self::new(id, rect, color)
        }
    }

    /// Whether hits notify listeners regardless of the ball's color
    pub fn with_adopts_color(mut self, adopts_color: bool) -> Self {
        self.adopts_color = adopts_color;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_scoring(&self) -> bool {
        self.scoring
    }

    pub fn add_hit_listener(&self, listener: Rc<dyn HitListener>) {
        self.notifier.add_hit_listener(listener);
    }

    pub fn remove_hit_listener(&self, listener: &dyn HitListener) -> bool {
        self.notifier.remove_hit_listener(listener)
    }

    fn color_matches(&self, ball: &Ball) -> bool {
        self.adopts_color && ball.color() == self.color
    }
}

impl Obstacle for Block {
    fn id(&self) -> ObstacleId {
        self.id
    }

    fn collision_rect(&self) -> Rect {
        self.rect
    }

    fn hit(
        &self,
        hitter: &mut Ball,
        collision_point: DVec2,
        velocity: Velocity,
    ) -> Result<Velocity, HitError> {
        if self.scoring && !self.color_matches(hitter) {
            self.notifier.notify_hit(self, hitter)?;
            if self.adopts_color {
                hitter.set_color(self.color);
            }
        }

        let face = HitFace::classify(&self.rect, collision_point, hitter.radius());
        Ok(face.reflect(velocity))
    }

    fn notifier(&self) -> Option<&HitNotifier> {
        Some(&self.notifier)
    }
}
