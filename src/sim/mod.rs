//! Collision simulation
//!
//! Single-threaded and deterministic: every operation finishes before it
//! returns, and the only shared mutable structures (the registry and each
//! obstacle's listener list) are scanned through snapshots, so listeners
//! may mutate them mid-broadcast.

pub mod ball;
pub mod block;
pub mod collision;
pub mod color;
pub mod environment;
pub mod listener;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::{Ball, BallId, StepOutcome};
pub use block::Block;
pub use collision::{CollisionInfo, HitFace, Obstacle, ObstacleId};
pub use color::Color;
pub use environment::CollisionRegistry;
pub use listener::{
    BallRemover, BlockRemover, Counter, HitError, HitListener, HitNotifier, ScoreTrackingListener,
};
pub use paddle::Paddle;
pub use state::{Arena, GamePhase};
pub use tick::{TickInput, tick};
