//! 2D line segment type.
//!
//! Partition boundaries are reported as segments; every divider produced by
//! the trees in this crate is either horizontal or vertical.

use super::Point2;
use num_traits::Float;

/// A 2D line segment defined by two endpoints.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Creates the horizontal segment at height `y` from `x_min` to `x_max`.
    #[inline]
    pub fn horizontal(y: F, x_min: F, x_max: F) -> Self {
        Self::from_coords(x_min, y, x_max, y)
    }

    /// Creates the vertical segment at `x` from `y_min` to `y_max`.
    #[inline]
    pub fn vertical(x: F, y_min: F, y_max: F) -> Self {
        Self::from_coords(x, y_min, x, y_max)
    }
}
