//! Arena layout configuration
//!
//! Stored as JSON. Every field has a default, so a partial file only
//! overrides what it names; the defaults reproduce the classic 800x600
//! board.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::Color;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid arena config: {0}")]
    Invalid(String),
}

/// Paddle geometry and movement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    /// Initial left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Horizontal distance per tick of input
    pub speed: f64,
    pub color: Color,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            x: 350.0,
            y: 560.0,
            width: 100.0,
            height: 20.0,
            speed: 8.0,
            color: Color::ORANGE,
        }
    }
}

/// Staircase of brick rows
///
/// Row `i` starts `i * indent` bricks to the right of `columns`' first slot,
/// so each row is one brick shorter than the one above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickLayout {
    pub origin_x: f64,
    pub origin_y: f64,
    pub brick_width: f64,
    pub brick_height: f64,
    /// Brick slots per row
    pub columns: usize,
    /// Slots skipped per row, cumulative
    pub indent: usize,
    /// One entry per row, top to bottom
    pub row_colors: Vec<Color>,
}

impl Default for BrickLayout {
    fn default() -> Self {
        Self {
            origin_x: 169.0,
            origin_y: 100.0,
            brick_width: 51.0,
            brick_height: 20.0,
            columns: 12,
            indent: 1,
            row_colors: vec![
                Color::GRAY,
                Color::RED,
                Color::YELLOW,
                Color::BLUE,
                Color::PINK,
                Color::GREEN,
            ],
        }
    }
}

impl BrickLayout {
    /// Total number of bricks the layout produces
    pub fn brick_count(&self) -> usize {
        (0..self.row_colors.len())
            .map(|row| self.columns.saturating_sub(row * self.indent))
            .sum()
    }
}

/// Initial state of one ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallSpawn {
    pub x: f64,
    pub y: f64,
    /// Launch direction in degrees
    pub angle: f64,
    /// Distance per tick
    pub speed: f64,
    pub radius: f64,
    pub color: Color,
}

/// Complete arena description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f64,
    pub height: f64,
    /// Thickness of the side/top walls and the death region
    pub wall_thickness: f64,
    pub wall_color: Color,
    pub death_color: Color,
    pub paddle: PaddleConfig,
    pub bricks: BrickLayout,
    pub balls: Vec<BallSpawn>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            wall_thickness: 20.0,
            wall_color: Color::LIGHT_GRAY,
            death_color: Color::WHITE,
            paddle: PaddleConfig::default(),
            bricks: BrickLayout::default(),
            balls: vec![
                BallSpawn {
                    x: 420.0,
                    y: 30.0,
                    angle: 240.0,
                    speed: 5.0,
                    radius: 5.0,
                    color: Color::BLACK,
                },
                BallSpawn {
                    x: 123.0,
                    y: 35.0,
                    angle: 324.0,
                    speed: 5.0,
                    radius: 5.0,
                    color: Color::BLUE,
                },
                BallSpawn {
                    x: 152.0,
                    y: 45.0,
                    angle: 25.0,
                    speed: 5.0,
                    radius: 5.0,
                    color: Color::BLUE,
                },
            ],
        }
    }
}

impl ArenaConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded arena config from {}", path.display());
        Ok(config)
    }

    /// Playable interior between the side walls, as `(min_x, max_x)`
    pub fn interior_x(&self) -> (f64, f64) {
        (self.wall_thickness, self.width - self.wall_thickness)
    }

    /// Reject geometry the collision core does not handle
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("wall_thickness", self.wall_thickness),
            ("paddle.width", self.paddle.width),
            ("paddle.height", self.paddle.height),
            ("bricks.brick_width", self.bricks.brick_width),
            ("bricks.brick_height", self.bricks.brick_height),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }

        let (min_x, max_x) = self.interior_x();
        if self.paddle.width > max_x - min_x {
            return Err(ConfigError::Invalid(format!(
                "paddle width {} does not fit between the walls ({min_x}..{max_x})",
                self.paddle.width
            )));
        }
        if self.paddle.speed < 0.0 {
            return Err(ConfigError::Invalid("paddle.speed must not be negative".into()));
        }
        if let Some(ball) = self.balls.iter().find(|b| !(b.radius > 0.0)) {
            return Err(ConfigError::Invalid(format!(
                "ball radius must be positive, got {}",
                ball.radius
            )));
        }
        Ok(())
    }
}
