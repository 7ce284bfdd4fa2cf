//! Arena state
//!
//! Everything one game needs: the registry of obstacles, the paddle, the
//! live balls and the counters the listeners update. Built from an
//! [`ArenaConfig`].

use std::rc::Rc;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::ball::{Ball, BallId};
use super::block::Block;
use super::collision::ObstacleId;
use super::color::Color;
use super::environment::CollisionRegistry;
use super::listener::{BallRemover, BlockRemover, Counter, HitListener, ScoreTrackingListener};
use super::paddle::Paddle;
use crate::config::{ArenaConfig, ConfigError};
use crate::geometry::{Rect, Velocity};

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Balls are moving
    Playing,
    /// Every block was destroyed
    Cleared,
    /// Every ball was lost
    GameOver,
}

/// A running game
#[derive(Debug)]
pub struct Arena {
    pub config: ArenaConfig,
    pub phase: GamePhase,
    /// Ticks simulated so far
    pub time_ticks: u64,
    pub(crate) environment: Rc<CollisionRegistry>,
    pub(crate) paddle: Rc<Paddle>,
    /// Live balls, sorted by id
    pub(crate) balls: Vec<Ball>,
    pub(crate) score: Rc<Counter>,
    pub(crate) remaining_blocks: Rc<Counter>,
    pub(crate) remaining_balls: Rc<Counter>,
    /// Id of the death region, for renderers that skip it
    death_region: ObstacleId,
    next_id: u32,
}

impl Arena {
    /// Build the walls, death region, bricks, paddle and balls from `config`
    pub fn new(config: ArenaConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let environment = Rc::new(CollisionRegistry::new());
        let (min_x, max_x) = config.interior_x();
        let paddle = Rc::new(Paddle::new(
            ObstacleId(0),
            Rect::from_coords(
                config.paddle.x.clamp(min_x, max_x - config.paddle.width),
                config.paddle.y,
                config.paddle.width,
                config.paddle.height,
            ),
            config.paddle.color,
            config.paddle.speed,
            min_x,
            max_x,
        ));

        let mut arena = Self {
            config,
            phase: GamePhase::Playing,
            time_ticks: 0,
            environment,
            paddle,
            balls: Vec::new(),
            score: Rc::new(Counter::default()),
            remaining_blocks: Rc::new(Counter::default()),
            remaining_balls: Rc::new(Counter::default()),
            death_region: ObstacleId(0),
            next_id: 1,
        };

        arena.add_walls();
        arena.add_bricks();
        arena.environment.add(arena.paddle.clone());
        let spawns = arena.config.balls.clone();
        for spawn in spawns {
            arena.spawn_ball(
                DVec2::new(spawn.x, spawn.y),
                Velocity::from_angle_and_speed(spawn.angle, spawn.speed),
                spawn.radius,
                spawn.color,
            );
        }

        log::info!(
            "Arena ready: {} blocks, {} balls, {} obstacles",
            arena.remaining_blocks.value(),
            arena.remaining_balls.value(),
            arena.environment.len()
        );
        Ok(arena)
    }

    /// Allocate a new obstacle id
    fn next_obstacle_id(&mut self) -> ObstacleId {
        let id = ObstacleId(self.next_id);
        self.next_id += 1;
        id
    }

    fn add_walls(&mut self) {
        let (w, h, t) = (self.config.width, self.config.height, self.config.wall_thickness);
        let color = self.config.wall_color;
        for rect in [
            Rect::from_coords(0.0, 0.0, t, h),
            Rect::from_coords(0.0, 0.0, w, t),
            Rect::from_coords(w - t, 0.0, t, h),
        ] {
            let id = self.next_obstacle_id();
            self.environment.add(Rc::new(Block::wall(id, rect, color)));
        }

        let id = self.next_obstacle_id();
        let death = Block::new(id, Rect::from_coords(0.0, h - t, w, t), self.config.death_color)
            .with_adopts_color(false);
        death.add_hit_listener(Rc::new(BallRemover::new(self.remaining_balls.clone())));
        self.death_region = id;
        self.environment.add(Rc::new(death));
    }

    fn add_bricks(&mut self) {
        let layout = self.config.bricks.clone();
        let remover: Rc<dyn HitListener> =
            Rc::new(BlockRemover::new(&self.environment, self.remaining_blocks.clone()));
        let score: Rc<dyn HitListener> = Rc::new(ScoreTrackingListener::new(self.score.clone()));

        for (row, color) in layout.row_colors.iter().enumerate() {
            for col in (row * layout.indent)..layout.columns {
                let rect = Rect::from_coords(
                    layout.origin_x + col as f64 * layout.brick_width,
                    layout.origin_y + row as f64 * layout.brick_height,
                    layout.brick_width,
                    layout.brick_height,
                );
                let id = self.next_obstacle_id();
                let block = Block::new(id, rect, *color);
                block.add_hit_listener(remover.clone());
                block.add_hit_listener(score.clone());
                self.environment.add(Rc::new(block));
                self.remaining_blocks.increase(1);
            }
        }
    }

    /// Add a ball to play and return its id
    pub fn spawn_ball(&mut self, center: DVec2, velocity: Velocity, radius: f64, color: Color) -> BallId {
        let id = BallId(self.next_id);
        self.next_id += 1;
        let ball = Ball::new(radius, center, velocity, self.environment.clone())
            .with_id(id)
            .with_color(color);
        self.balls.push(ball);
        self.remaining_balls.increase(1);
        id
    }

    pub fn environment(&self) -> &Rc<CollisionRegistry> {
        &self.environment
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn ball(&self, id: BallId) -> Option<&Ball> {
        self.balls.iter().find(|b| b.id() == id)
    }

    pub fn score(&self) -> i64 {
        self.score.value()
    }

    pub fn remaining_blocks(&self) -> i64 {
        self.remaining_blocks.value()
    }

    pub fn remaining_balls(&self) -> i64 {
        self.remaining_balls.value()
    }

    pub fn death_region(&self) -> ObstacleId {
        self.death_region
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_arena() {
        let arena = Arena::new(ArenaConfig::default()).unwrap();
        assert_eq!(arena.phase, GamePhase::Playing);
        assert_eq!(arena.remaining_blocks(), 57);
        assert_eq!(arena.remaining_balls(), 3);
        assert_eq!(arena.balls().len(), 3);
        // 3 walls + death region + bricks + paddle
        assert_eq!(arena.environment().len(), 4 + 57 + 1);
        assert_eq!(arena.score(), 0);
    }

    #[test]
    fn test_ids_are_unique() {
        let arena = Arena::new(ArenaConfig::default()).unwrap();
        let mut ids: Vec<_> = arena.environment().snapshot().iter().map(|o| o.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), arena.environment().len());
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = ArenaConfig {
            width: -1.0,
            ..ArenaConfig::default()
        };
        assert!(Arena::new(config).is_err());
    }

    #[test]
    fn test_ball_ids_follow_spawn_order() {
        let arena = Arena::new(ArenaConfig::default()).unwrap();
        let ids: Vec<_> = arena.balls().iter().map(|b| b.id()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }
}
