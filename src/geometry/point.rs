//! Tolerant point equality
//!
//! Points are plain `DVec2` values. Exact float comparison is never used for
//! geometry; two points are the same when both coordinates agree within
//! [`EPSILON`].

use glam::DVec2;

use crate::consts::EPSILON;

/// Equality with the engine tolerance
pub trait ApproxEq {
    fn approx_eq(&self, other: &Self) -> bool;
}

impl ApproxEq for DVec2 {
    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(*other, EPSILON)
    }
}
