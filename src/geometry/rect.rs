//! Axis-aligned rectangles
//!
//! Defined by the upper-left corner plus width and height (y grows downward,
//! so "upper" is the smaller y). Corners and edges are derived on demand.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::segment::Segment;
use crate::approx_eq;
use crate::consts::EPSILON;

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Upper-left corner
    pub origin: DVec2,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(origin: DVec2, width: f64, height: f64) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0, "rect with negative size");
        Self {
            origin,
            width,
            height,
        }
    }

    pub fn from_coords(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(DVec2::new(x, y), width, height)
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.origin.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.origin.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.origin.y
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.origin.y + self.height
    }

    #[inline]
    pub fn upper_left(&self) -> DVec2 {
        self.origin
    }

    #[inline]
    pub fn upper_right(&self) -> DVec2 {
        DVec2::new(self.right(), self.top())
    }

    #[inline]
    pub fn lower_left(&self) -> DVec2 {
        DVec2::new(self.left(), self.bottom())
    }

    #[inline]
    pub fn lower_right(&self) -> DVec2 {
        DVec2::new(self.right(), self.bottom())
    }

    pub fn top_edge(&self) -> Segment {
        Segment::new(self.upper_left(), self.upper_right())
    }

    pub fn left_edge(&self) -> Segment {
        Segment::new(self.upper_left(), self.lower_left())
    }

    pub fn right_edge(&self) -> Segment {
        Segment::new(self.upper_right(), self.lower_right())
    }

    pub fn bottom_edge(&self) -> Segment {
        Segment::new(self.lower_right(), self.lower_left())
    }

    /// Edges in scan order: top, left, right, bottom
    pub fn edges(&self) -> [Segment; 4] {
        [
            self.top_edge(),
            self.left_edge(),
            self.right_edge(),
            self.bottom_edge(),
        ]
    }

    /// Every point where `segment` crosses an edge
    ///
    /// Each edge is tested on its own, so a segment through a corner reports
    /// that corner once per edge. Callers must tolerate duplicates.
    pub fn intersection_points(&self, segment: &Segment) -> Vec<DVec2> {
        self.edges()
            .iter()
            .filter_map(|edge| edge.intersection_with(segment))
            .collect()
    }

    /// The rectangle grown by `margin` on every side
    pub fn expand(&self, margin: f64) -> Rect {
        Rect::new(
            self.origin - DVec2::splat(margin),
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }

    pub fn contains_point(&self, p: DVec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// Whether `p` lies on one of the four edges
    pub fn on_boundary(&self, p: DVec2) -> bool {
        self.edges()
            .iter()
            .any(|edge| edge.distance_to_point(p) <= EPSILON)
    }

    /// Whether moving from boundary point `p` along `direction` goes into the rectangle
    ///
    /// Sliding along a face or moving away does not count. At a corner the
    /// direction must point inward across both faces.
    pub fn is_entering(&self, p: DVec2, direction: DVec2) -> bool {
        let inward_x = if approx_eq(p.x, self.left()) {
            direction.x > 0.0
        } else if approx_eq(p.x, self.right()) {
            direction.x < 0.0
        } else {
            true
        };
        let inward_y = if approx_eq(p.y, self.top()) {
            direction.y > 0.0
        } else if approx_eq(p.y, self.bottom()) {
            direction.y < 0.0
        } else {
            true
        };
        inward_x && inward_y
    }

    pub fn center(&self) -> DVec2 {
        self.origin + DVec2::new(self.width, self.height) / 2.0
    }

    /// Same size, moved so the upper-left corner is at `x` (y unchanged)
    pub fn with_left(&self, x: f64) -> Rect {
        Rect::new(DVec2::new(x, self.origin.y), self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ApproxEq;

    fn brick() -> Rect {
        Rect::from_coords(100.0, 100.0, 50.0, 20.0)
    }

    #[test]
    fn test_corners() {
        let r = brick();
        assert_eq!(r.upper_left(), DVec2::new(100.0, 100.0));
        assert_eq!(r.upper_right(), DVec2::new(150.0, 100.0));
        assert_eq!(r.lower_left(), DVec2::new(100.0, 120.0));
        assert_eq!(r.lower_right(), DVec2::new(150.0, 120.0));
    }

    #[test]
    fn test_single_edge_crossing() {
        let r = brick();
        // Enters through the top, ends inside
        let s = Segment::from_coords(125.0, 90.0, 125.0, 110.0);
        let points = r.intersection_points(&s);
        assert_eq!(points.len(), 1);
        assert!(points[0].approx_eq(&DVec2::new(125.0, 100.0)));
        assert!(s.contains(points[0]));
        assert!(r.top_edge().contains(points[0]));
    }

    #[test]
    fn test_through_crossing() {
        let r = brick();
        let s = Segment::from_coords(90.0, 110.0, 160.0, 110.0);
        let points = r.intersection_points(&s);
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn test_corner_reports_duplicates() {
        let r = brick();
        // Diagonal ending exactly at the upper-left corner
        let s = Segment::from_coords(90.0, 90.0, 100.0, 100.0);
        let points = r.intersection_points(&s);
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|p| p.approx_eq(&r.upper_left())));
    }

    #[test]
    fn test_miss() {
        let r = brick();
        let s = Segment::from_coords(0.0, 0.0, 50.0, 50.0);
        assert!(r.intersection_points(&s).is_empty());
    }

    #[test]
    fn test_expand_and_boundary() {
        let r = brick().expand(5.0);
        assert_eq!(r.upper_left(), DVec2::new(95.0, 95.0));
        assert_eq!(r.lower_right(), DVec2::new(155.0, 125.0));
        assert!(r.on_boundary(DVec2::new(125.0, 95.0)));
        assert!(!r.on_boundary(DVec2::new(125.0, 100.0)));
        assert!(r.contains_point(DVec2::new(125.0, 100.0)));
        assert_eq!(r.center(), DVec2::new(125.0, 110.0));
    }

    #[test]
    fn test_is_entering() {
        let r = brick();
        let top = DVec2::new(125.0, 100.0);
        assert!(r.is_entering(top, DVec2::new(1.0, 5.0)));
        assert!(!r.is_entering(top, DVec2::new(1.0, -5.0)));
        // Sliding along the face
        assert!(!r.is_entering(top, DVec2::new(5.0, 0.0)));

        let left = DVec2::new(100.0, 110.0);
        assert!(r.is_entering(left, DVec2::new(3.0, 0.0)));
        assert!(!r.is_entering(left, DVec2::new(-3.0, 2.0)));

        // Corner: inward across both faces
        let corner = r.upper_left();
        assert!(r.is_entering(corner, DVec2::new(1.0, 1.0)));
        assert!(!r.is_entering(corner, DVec2::new(1.0, -1.0)));
    }
}
