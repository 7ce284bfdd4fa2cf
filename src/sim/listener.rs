//! Hit notification
//!
//! Obstacles broadcast "I was struck" to registered [`HitListener`]s without
//! knowing what they do. Listeners are where game state changes: scoring,
//! removing blocks, removing balls.
//!
//! Both the listener list and the registry may be mutated by the listeners
//! themselves while a notification is in progress, so every broadcast walks
//! a snapshot.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use super::ball::Ball;
use super::collision::{Obstacle, ObstacleId};
use super::environment::CollisionRegistry;
use crate::consts::HIT_SCORE;

/// Failure raised by a hit listener
///
/// Listener failures are not swallowed: the first error aborts the rest of
/// the broadcast and propagates out of the ball's step.
#[derive(Debug, thiserror::Error)]
pub enum HitError {
    /// A remover was asked to remove an obstacle that is not registered
    #[error("{0} is not registered in the collision registry")]
    UnknownObstacle(ObstacleId),

    /// The registry a listener refers to no longer exists
    #[error("collision registry was dropped while {0} was still listening")]
    RegistryDropped(&'static str),

    /// Failure reported by an external listener
    #[error("hit listener failed: {0}")]
    Listener(String),
}

/// Receives hit events from obstacles
pub trait HitListener {
    /// Called whenever `being_hit` is struck by `hitter`
    fn hit_event(&self, being_hit: &dyn Obstacle, hitter: &mut Ball) -> Result<(), HitError>;
}

/// Ordered listener list owned by a hit-broadcasting obstacle
#[derive(Default)]
pub struct HitNotifier {
    listeners: RefCell<Vec<Rc<dyn HitListener>>>,
}

impl HitNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_hit_listener(&self, listener: Rc<dyn HitListener>) {
        self.listeners.borrow_mut().push(listener);
    }

    /// Remove the first registration of `listener` (matched by identity)
    pub fn remove_hit_listener(&self, listener: &dyn HitListener) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let target = listener as *const dyn HitListener;
        match listeners
            .iter()
            .position(|l| std::ptr::addr_eq(Rc::as_ptr(l), target))
        {
            Some(index) => {
                listeners.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }

    /// Notify every listener, in registration order, that `being_hit` was struck
    pub fn notify_hit(&self, being_hit: &dyn Obstacle, hitter: &mut Ball) -> Result<(), HitError> {
        let snapshot: Vec<Rc<dyn HitListener>> = self.listeners.borrow().clone();
        for listener in &snapshot {
            listener.hit_event(being_hit, hitter)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HitNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HitNotifier")
            .field("listeners", &self.len())
            .finish()
    }
}

/// Shared integer counter (score, remaining blocks, remaining balls)
#[derive(Debug, Default)]
pub struct Counter {
    count: Cell<i64>,
}

impl Counter {
    pub fn new(initial: i64) -> Self {
        Self {
            count: Cell::new(initial),
        }
    }

    pub fn increase(&self, by: i64) {
        self.count.set(self.count.get() + by);
    }

    pub fn decrease(&self, by: i64) {
        self.count.set(self.count.get() - by);
    }

    pub fn value(&self) -> i64 {
        self.count.get()
    }
}

/// Removes struck blocks from the arena and counts them down
#[derive(Debug)]
pub struct BlockRemover {
    environment: Weak<CollisionRegistry>,
    remaining_blocks: Rc<Counter>,
}

impl BlockRemover {
    pub fn new(environment: &Rc<CollisionRegistry>, remaining_blocks: Rc<Counter>) -> Self {
        Self {
            environment: Rc::downgrade(environment),
            remaining_blocks,
        }
    }
}

impl HitListener for BlockRemover {
    fn hit_event(&self, being_hit: &dyn Obstacle, _hitter: &mut Ball) -> Result<(), HitError> {
        let environment = self
            .environment
            .upgrade()
            .ok_or(HitError::RegistryDropped("BlockRemover"))?;
        let id = being_hit.id();
        environment
            .remove(id)
            .ok_or(HitError::UnknownObstacle(id))?;

        if let Some(notifier) = being_hit.notifier() {
            notifier.remove_hit_listener(self);
        }
        self.remaining_blocks.decrease(1);
        log::debug!(
            "Removed {id}, {} blocks remaining",
            self.remaining_blocks.value()
        );
        Ok(())
    }
}

/// Takes balls out of play when they reach the death region
#[derive(Debug)]
pub struct BallRemover {
    remaining_balls: Rc<Counter>,
}

impl BallRemover {
    pub fn new(remaining_balls: Rc<Counter>) -> Self {
        Self { remaining_balls }
    }
}

impl HitListener for BallRemover {
    fn hit_event(&self, being_hit: &dyn Obstacle, hitter: &mut Ball) -> Result<(), HitError> {
        if hitter.is_removed() {
            return Ok(());
        }
        hitter.mark_removed();
        self.remaining_balls.decrease(1);
        log::debug!(
            "Ball {} lost on {}, {} balls remaining",
            hitter.id().0,
            being_hit.id(),
            self.remaining_balls.value()
        );
        Ok(())
    }
}

/// Awards points for every scoring hit
#[derive(Debug)]
pub struct ScoreTrackingListener {
    score: Rc<Counter>,
}

impl ScoreTrackingListener {
    pub fn new(score: Rc<Counter>) -> Self {
        Self { score }
    }
}

impl HitListener for ScoreTrackingListener {
    fn hit_event(&self, _being_hit: &dyn Obstacle, _hitter: &mut Ball) -> Result<(), HitError> {
        self.score.increase(HIT_SCORE);
        Ok(())
    }
}
