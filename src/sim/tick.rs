//! One simulation tick
//!
//! Moves the paddle, then steps each ball to completion (trajectory query,
//! position, velocity, listener notification) before the next ball starts.
//! Frame pacing and drawing belong to the caller.

use super::ball::BallId;
use super::listener::HitError;
use super::state::{Arena, GamePhase};
use crate::consts::CLEAR_BONUS;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
}

impl Arena {
    /// Advance one tick, stepping balls in id order
    pub fn tick(&mut self, input: &TickInput) -> Result<(), HitError> {
        let order: Vec<BallId> = self.balls.iter().map(|b| b.id()).collect();
        self.tick_ordered(input, &order)
    }

    /// Advance one tick, stepping balls in the given order
    ///
    /// Ids that are not live balls are skipped; live balls missing from
    /// `order` do not move this tick.
    pub fn tick_ordered(&mut self, input: &TickInput, order: &[BallId]) -> Result<(), HitError> {
        if self.phase != GamePhase::Playing {
            return Ok(());
        }
        self.time_ticks += 1;

        if input.move_left {
            self.paddle.move_left();
        }
        if input.move_right {
            self.paddle.move_right();
        }

        for id in order {
            let Some(ball) = self.balls.iter_mut().find(|b| b.id() == *id) else {
                continue;
            };
            if ball.is_removed() {
                continue;
            }
            ball.step()?;
        }

        let before = self.balls.len();
        self.balls.retain(|b| !b.is_removed());
        if self.balls.len() != before {
            log::debug!("Tick {}: {} balls left in play", self.time_ticks, self.balls.len());
        }

        self.update_phase();
        Ok(())
    }

    fn update_phase(&mut self) {
        if self.remaining_blocks.value() <= 0 {
            self.score.increase(CLEAR_BONUS);
            self.phase = GamePhase::Cleared;
            log::info!("All blocks cleared at tick {}, score {}", self.time_ticks, self.score());
        } else if self.remaining_balls.value() <= 0 {
            self.phase = GamePhase::GameOver;
            log::info!("All balls lost at tick {}, score {}", self.time_ticks, self.score());
        }
    }
}

/// Advance `arena` by one tick
pub fn tick(arena: &mut Arena, input: &TickInput) -> Result<(), HitError> {
    arena.tick(input)
}
