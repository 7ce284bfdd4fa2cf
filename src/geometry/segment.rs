//! Directed line segments
//!
//! A segment is the unit of every collision query: ball trajectories and
//! rectangle edges are both segments, and a hit is the intersection of the
//! two. The start point matters, since "closest" always means closest to
//! the start.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::point::ApproxEq;
use super::rect::Rect;
use crate::consts::{EPSILON, PARALLEL_EPSILON};

/// A directed segment from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: DVec2,
    pub end: DVec2,
}

impl Segment {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(DVec2::new(x1, y1), DVec2::new(x2, y2))
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    #[inline]
    pub fn middle(&self) -> DVec2 {
        (self.start + self.end) / 2.0
    }

    /// Same endpoints, in either direction
    pub fn approx_eq(&self, other: &Segment) -> bool {
        (self.start.approx_eq(&other.start) && self.end.approx_eq(&other.end))
            || (self.start.approx_eq(&other.end) && self.end.approx_eq(&other.start))
    }

    /// Whether `p` lies on the segment (within tolerance)
    pub fn contains(&self, p: DVec2) -> bool {
        (p.distance(self.start) + p.distance(self.end) - self.length()).abs() <= EPSILON
    }

    pub fn is_intersecting(&self, other: &Segment) -> bool {
        self.intersection_with(other).is_some()
    }

    /// Intersection point of two segments, if any
    ///
    /// Solves `start + t * (end - start) = other.start + u * (other.end - other.start)`
    /// and accepts the hit when both `t` and `u` lie in `[-EPSILON, 1 + EPSILON]`.
    ///
    /// Parallel segments only intersect when they share an endpoint; a
    /// collinear overlap without a shared endpoint reports no intersection.
    /// Identical segments never intersect.
    pub fn intersection_with(&self, other: &Segment) -> Option<DVec2> {
        if self.approx_eq(other) {
            return None;
        }

        let d1 = self.end - self.start;
        let d2 = other.end - other.start;
        let denominator = d2.y * d1.x - d2.x * d1.y;

        if denominator.abs() <= PARALLEL_EPSILON {
            return self.shared_endpoint(other);
        }

        let offset = self.start - other.start;
        let t = (d2.x * offset.y - d2.y * offset.x) / denominator;
        let u = (d1.x * offset.y - d1.y * offset.x) / denominator;

        let in_range = |v: f64| (-EPSILON..=1.0 + EPSILON).contains(&v);
        if in_range(t) && in_range(u) {
            Some(self.start + d1 * t)
        } else {
            None
        }
    }

    /// Endpoint shared by two parallel segments (start/start, end/end, start/end, end/start)
    fn shared_endpoint(&self, other: &Segment) -> Option<DVec2> {
        if self.start.approx_eq(&other.start) || self.start.approx_eq(&other.end) {
            Some(self.start)
        } else if self.end.approx_eq(&other.end) || self.end.approx_eq(&other.start) {
            Some(self.end)
        } else {
            None
        }
    }

    /// Euclidean distance from `p` to the closest point of the segment
    pub fn distance_to_point(&self, p: DVec2) -> f64 {
        let line = self.end - self.start;
        let length_sq = line.length_squared();
        if length_sq == 0.0 {
            return p.distance(self.start);
        }

        let t = ((p - self.start).dot(line) / length_sq).clamp(0.0, 1.0);
        p.distance(self.start + line * t)
    }

    /// Intersection with `rect` closest to this segment's start
    pub fn closest_intersection_to_start(&self, rect: &Rect) -> Option<DVec2> {
        rect.edges()
            .iter()
            .filter_map(|edge| self.intersection_with(edge))
            .min_by(|a, b| self.start.distance(*a).total_cmp(&self.start.distance(*b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: DVec2, b: DVec2) -> bool {
        a.approx_eq(&b)
    }

    #[test]
    fn test_crossing_segments() {
        let a = Segment::from_coords(0.0, 0.0, 10.0, 10.0);
        let b = Segment::from_coords(0.0, 10.0, 10.0, 0.0);
        let p = a.intersection_with(&b).expect("segments cross");
        assert!(close(p, DVec2::new(5.0, 5.0)));
        assert!(a.is_intersecting(&b));
    }

    #[test]
    fn test_disjoint_segments() {
        let a = Segment::from_coords(0.0, 0.0, 1.0, 1.0);
        let b = Segment::from_coords(5.0, 0.0, 6.0, -3.0);
        assert!(a.intersection_with(&b).is_none());
    }

    #[test]
    fn test_touching_at_end_within_tolerance() {
        // Trajectory ends exactly on the edge
        let trajectory = Segment::from_coords(125.0, 95.0, 125.0, 100.0);
        let edge = Segment::from_coords(100.0, 100.0, 150.0, 100.0);
        let p = trajectory.intersection_with(&edge).expect("end touches edge");
        assert!(close(p, DVec2::new(125.0, 100.0)));
    }

    #[test]
    fn test_parallel_shared_endpoint() {
        let a = Segment::from_coords(0.0, 0.0, 5.0, 0.0);
        let b = Segment::from_coords(5.0, 0.0, 9.0, 0.0);
        let p = a.intersection_with(&b).expect("shared endpoint");
        assert!(close(p, DVec2::new(5.0, 0.0)));
    }

    #[test]
    fn test_collinear_overlap_without_shared_endpoint() {
        let a = Segment::from_coords(0.0, 0.0, 6.0, 0.0);
        let b = Segment::from_coords(3.0, 0.0, 9.0, 0.0);
        assert!(a.intersection_with(&b).is_none());
    }

    #[test]
    fn test_parallel_apart() {
        let a = Segment::from_coords(0.0, 0.0, 6.0, 0.0);
        let b = Segment::from_coords(0.0, 1.0, 6.0, 1.0);
        assert!(a.intersection_with(&b).is_none());
    }

    #[test]
    fn test_identical_segments_do_not_intersect() {
        let a = Segment::from_coords(0.0, 0.0, 6.0, 2.0);
        assert!(a.intersection_with(&a).is_none());
        let reversed = Segment::new(a.end, a.start);
        assert!(a.intersection_with(&reversed).is_none());
    }

    #[test]
    fn test_distance_to_point() {
        let s = Segment::from_coords(0.0, 0.0, 10.0, 0.0);
        assert!((s.distance_to_point(DVec2::new(5.0, 3.0)) - 3.0).abs() < 1e-9);
        // Beyond the end clamps to the end point
        assert!((s.distance_to_point(DVec2::new(13.0, 4.0)) - 5.0).abs() < 1e-9);
        // Before the start clamps to the start point
        assert!((s.distance_to_point(DVec2::new(-3.0, 0.0)) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_distance_zero_length_segment() {
        let s = Segment::from_coords(2.0, 2.0, 2.0, 2.0);
        assert!((s.distance_to_point(DVec2::new(5.0, 6.0)) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_closest_intersection_to_start() {
        let rect = Rect::new(DVec2::new(10.0, 10.0), 20.0, 10.0);
        // Horizontal pass through both vertical edges, from the left
        let s = Segment::from_coords(0.0, 15.0, 40.0, 15.0);
        let p = s.closest_intersection_to_start(&rect).expect("crosses rect");
        assert!(close(p, DVec2::new(10.0, 15.0)));

        // Same line, other direction
        let s = Segment::from_coords(40.0, 15.0, 0.0, 15.0);
        let p = s.closest_intersection_to_start(&rect).expect("crosses rect");
        assert!(close(p, DVec2::new(30.0, 15.0)));

        let miss = Segment::from_coords(0.0, 0.0, 40.0, 0.0);
        assert!(miss.closest_intersection_to_start(&rect).is_none());
    }

    #[test]
    fn test_contains_and_middle() {
        let s = Segment::from_coords(0.0, 0.0, 4.0, 4.0);
        assert!(s.contains(DVec2::new(1.0, 1.0)));
        assert!(!s.contains(DVec2::new(1.0, 2.0)));
        assert!(close(s.middle(), DVec2::new(2.0, 2.0)));
        assert!((s.length() - 32.0_f64.sqrt()).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_distance_non_negative(
            x1 in -500.0f64..500.0, y1 in -500.0f64..500.0,
            x2 in -500.0f64..500.0, y2 in -500.0f64..500.0,
            px in -500.0f64..500.0, py in -500.0f64..500.0,
        ) {
            let s = Segment::from_coords(x1, y1, x2, y2);
            let p = DVec2::new(px, py);
            let d = s.distance_to_point(p);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= p.distance(s.start) + 1e-9);
            prop_assert!(d <= p.distance(s.end) + 1e-9);
        }

        #[test]
        fn prop_intersection_lies_on_both(
            x in 1.0f64..99.0, y in 1.0f64..99.0,
            dx in 1.0f64..50.0, dy in 1.0f64..50.0,
        ) {
            // Two segments crossing at (x, y) by construction
            let a = Segment::from_coords(x - dx, y, x + dx, y);
            let b = Segment::from_coords(x, y - dy, x, y + dy);
            let p = a.intersection_with(&b).expect("constructed to cross");
            prop_assert!(a.distance_to_point(p) < 1e-6);
            prop_assert!(b.distance_to_point(p) < 1e-6);
        }
    }
}
