//! The collision registry
//!
//! Holds every obstacle a ball can hit and answers "what is the first thing
//! along this trajectory". Obstacles may be added or removed at any time,
//! including by listeners reacting to a hit from the very query that found
//! them, so each query scans a snapshot of the set.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::collision::{CollisionInfo, Obstacle, ObstacleId};
use crate::consts::EPSILON;
use crate::geometry::Segment;

/// Set of collidable obstacles
#[derive(Default)]
pub struct CollisionRegistry {
    obstacles: RefCell<Vec<Rc<dyn Obstacle>>>,
}

impl CollisionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, obstacle: Rc<dyn Obstacle>) {
        self.obstacles.borrow_mut().push(obstacle);
    }

    /// Remove the obstacle with `id`, returning it if it was registered
    pub fn remove(&self, id: ObstacleId) -> Option<Rc<dyn Obstacle>> {
        let mut obstacles = self.obstacles.borrow_mut();
        let index = obstacles.iter().position(|o| o.id() == id)?;
        Some(obstacles.remove(index))
    }

    pub fn contains(&self, id: ObstacleId) -> bool {
        self.obstacles.borrow().iter().any(|o| o.id() == id)
    }

    pub fn len(&self) -> usize {
        self.obstacles.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.borrow().is_empty()
    }

    /// Copy of the current obstacle set, in registration order
    pub fn snapshot(&self) -> Vec<Rc<dyn Obstacle>> {
        self.obstacles.borrow().clone()
    }

    /// Closest collision of `trajectory` with any obstacle rectangle
    pub fn closest_collision(&self, trajectory: &Segment) -> Option<CollisionInfo> {
        self.closest_collision_with_clearance(trajectory, 0.0)
    }

    /// Closest collision with every rectangle grown by `clearance`
    ///
    /// Distance is measured from `trajectory.start`. On equal distances the
    /// obstacle registered first wins. A trajectory that starts on a
    /// rectangle and moves away from it, or along one of its faces, does not
    /// collide with it there.
    pub fn closest_collision_with_clearance(
        &self,
        trajectory: &Segment,
        clearance: f64,
    ) -> Option<CollisionInfo> {
        let mut closest: Option<(f64, CollisionInfo)> = None;
        let direction = trajectory.end - trajectory.start;

        for obstacle in self.snapshot() {
            let rect = obstacle.collision_rect().expand(clearance);
            for point in rect.intersection_points(trajectory) {
                let distance = trajectory.start.distance(point);
                if distance <= EPSILON && !rect.is_entering(point, direction) {
                    continue;
                }
                if closest.as_ref().is_none_or(|(best, _)| distance < *best) {
                    closest = Some((
                        distance,
                        CollisionInfo {
                            point,
                            obstacle: obstacle.clone(),
                        },
                    ));
                }
            }
        }

        closest.map(|(_, info)| info)
    }
}

impl fmt::Debug for CollisionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollisionRegistry")
            .field("obstacles", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{ApproxEq, Rect};
    use crate::sim::{Block, Color};
    use glam::DVec2;

    fn block(id: u32, x: f64, y: f64) -> Rc<Block> {
        Rc::new(Block::new(
            ObstacleId(id),
            Rect::from_coords(x, y, 50.0, 20.0),
            Color::BLUE,
        ))
    }

    #[test]
    fn test_empty_registry() {
        let registry = CollisionRegistry::new();
        let trajectory = Segment::from_coords(0.0, 0.0, 100.0, 100.0);
        assert!(registry.closest_collision(&trajectory).is_none());
    }

    #[test]
    fn test_miss() {
        let registry = CollisionRegistry::new();
        registry.add(block(1, 100.0, 100.0));
        let trajectory = Segment::from_coords(0.0, 0.0, 50.0, 300.0);
        assert!(registry.closest_collision(&trajectory).is_none());
    }

    #[test]
    fn test_closest_of_two() {
        let registry = CollisionRegistry::new();
        registry.add(block(2, 100.0, 200.0));
        registry.add(block(1, 100.0, 100.0));
        let trajectory = Segment::from_coords(125.0, 50.0, 125.0, 300.0);

        let info = registry.closest_collision(&trajectory).expect("hits both");
        assert_eq!(info.obstacle_id(), ObstacleId(1));
        assert!(info.point.approx_eq(&DVec2::new(125.0, 100.0)));
    }

    #[test]
    fn test_tie_goes_to_first_registered() {
        let registry = CollisionRegistry::new();
        // Two blocks sharing the top edge y = 100, meeting at x = 150
        registry.add(block(7, 150.0, 100.0));
        registry.add(block(3, 100.0, 100.0));
        let trajectory = Segment::from_coords(150.0, 90.0, 150.0, 110.0);

        let info = registry.closest_collision(&trajectory).expect("hits the seam");
        assert_eq!(info.obstacle_id(), ObstacleId(7));
    }

    #[test]
    fn test_clearance_grows_rects() {
        let registry = CollisionRegistry::new();
        registry.add(block(1, 100.0, 100.0));
        let trajectory = Segment::from_coords(125.0, 90.0, 125.0, 97.0);
        assert!(registry.closest_collision(&trajectory).is_none());

        let info = registry
            .closest_collision_with_clearance(&trajectory, 5.0)
            .expect("reaches grown rect");
        assert!(info.point.approx_eq(&DVec2::new(125.0, 95.0)));
    }

    #[test]
    fn test_start_on_surface_moving_away() {
        let registry = CollisionRegistry::new();
        registry.add(block(1, 100.0, 100.0));

        let away = Segment::from_coords(125.0, 95.0, 125.0, 90.0);
        assert!(registry.closest_collision_with_clearance(&away, 5.0).is_none());

        let along = Segment::from_coords(125.0, 95.0, 130.0, 95.0);
        assert!(registry.closest_collision_with_clearance(&along, 5.0).is_none());

        let into = Segment::from_coords(125.0, 95.0, 125.0, 100.0);
        let info = registry
            .closest_collision_with_clearance(&into, 5.0)
            .expect("enters the grown rect");
        assert!(info.point.approx_eq(&DVec2::new(125.0, 95.0)));
    }

    #[test]
    fn test_add_remove() {
        let registry = CollisionRegistry::new();
        registry.add(block(1, 0.0, 0.0));
        registry.add(block(2, 60.0, 0.0));
        assert_eq!(registry.len(), 2);
        assert!(registry.remove(ObstacleId(1)).is_some());
        assert!(registry.remove(ObstacleId(1)).is_none());
        assert!(!registry.contains(ObstacleId(1)));
        assert!(registry.contains(ObstacleId(2)));
    }

    #[test]
    fn test_snapshot_survives_removal() {
        let registry = CollisionRegistry::new();
        registry.add(block(1, 0.0, 0.0));
        let snapshot = registry.snapshot();
        registry.remove(ObstacleId(1));
        assert_eq!(snapshot.len(), 1);
        assert!(registry.is_empty());
    }
}
