//! Axis-aligned bounding box.

use crate::error::PartitionError;
use crate::primitives::{Axis, Point2};
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// Defined by minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a new AABB from min and max corners.
    ///
    /// Does not validate that min <= max; see [`Aabb2::validate`].
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Splits the box at `value` along `axis`.
    ///
    /// Returns `(low, high)`: the part below the split and the part above it.
    /// The split value is not clamped, so a value outside the box yields one
    /// inverted half.
    #[inline]
    pub fn split_at(self, axis: Axis, value: F) -> (Self, Self) {
        match axis {
            Axis::X => (
                Self::new(self.min, Point2::new(value, self.max.y)),
                Self::new(Point2::new(value, self.min.y), self.max),
            ),
            Axis::Y => (
                Self::new(self.min, Point2::new(self.max.x, value)),
                Self::new(Point2::new(self.min.x, value), self.max),
            ),
        }
    }

    /// Checks that both corners are finite and `min <= max` on each axis.
    pub fn validate(self) -> Result<(), PartitionError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(PartitionError::InvalidDomain {
                reason: "bounding box has a non-finite corner",
            });
        }
        if self.min.x > self.max.x || self.min.y > self.max.y {
            return Err(PartitionError::InvalidDomain {
                reason: "bounding box min corner exceeds max corner",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_at_x() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(100.0, 100.0));
        let (low, high) = aabb.split_at(Axis::X, 30.0);
        assert_eq!(low, Aabb2::new(Point2::new(0.0, 0.0), Point2::new(30.0, 100.0)));
        assert_eq!(high, Aabb2::new(Point2::new(30.0, 0.0), Point2::new(100.0, 100.0)));
    }

    #[test]
    fn test_split_at_y() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(30.0, 100.0));
        let (low, high) = aabb.split_at(Axis::Y, 20.0);
        assert_eq!(low, Aabb2::new(Point2::new(0.0, 0.0), Point2::new(30.0, 20.0)));
        assert_eq!(high, Aabb2::new(Point2::new(0.0, 20.0), Point2::new(30.0, 100.0)));
    }

    #[test]
    fn test_nested_splits_shrink_towards_cell() {
        let root: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(100.0, 100.0));
        let (_, right) = root.split_at(Axis::X, 40.0);
        let (bottom, top) = right.split_at(Axis::Y, 40.0);
        assert_eq!(bottom, Aabb2::new(Point2::new(40.0, 0.0), Point2::new(100.0, 40.0)));
        assert_eq!(top, Aabb2::new(Point2::new(40.0, 40.0), Point2::new(100.0, 100.0)));
    }

    #[test]
    fn test_validate() {
        let ok: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0));
        assert!(ok.validate().is_ok());

        // Zero extent is allowed
        let flat: Aabb2<f64> = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(0.0, 1.0));
        assert!(flat.validate().is_ok());

        let inverted: Aabb2<f64> = Aabb2::new(Point2::new(2.0, 0.0), Point2::new(1.0, 1.0));
        assert!(matches!(
            inverted.validate(),
            Err(PartitionError::InvalidDomain { .. })
        ));

        let nan: Aabb2<f64> = Aabb2::new(Point2::new(f64::NAN, 0.0), Point2::new(1.0, 1.0));
        assert!(nan.validate().is_err());
    }
}
