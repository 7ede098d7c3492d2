//! Coordinate axis selector.

use super::Point2;
use num_traits::Float;

/// One of the two coordinate axes of the plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The x axis. Splitting on it produces a vertical divider.
    X,
    /// The y axis. Splitting on it produces a horizontal divider.
    Y,
}

impl Axis {
    /// Returns the axis used at a given recursion depth: even depths split on
    /// x, odd depths on y.
    #[inline]
    pub fn for_depth(depth: usize) -> Self {
        if depth % 2 == 0 {
            Axis::X
        } else {
            Axis::Y
        }
    }

    /// Returns the other axis.
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Returns the coordinate of `p` along this axis.
    #[inline]
    pub fn coord<F: Float>(self, p: Point2<F>) -> F {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_depth_alternates() {
        assert_eq!(Axis::for_depth(0), Axis::X);
        assert_eq!(Axis::for_depth(1), Axis::Y);
        assert_eq!(Axis::for_depth(2), Axis::X);
        assert_eq!(Axis::for_depth(7), Axis::Y);
    }

    #[test]
    fn test_coord_and_other() {
        let p: Point2<f64> = Point2::new(3.0, 8.0);
        assert_eq!(Axis::X.coord(p), 3.0);
        assert_eq!(Axis::Y.coord(p), 8.0);
        assert_eq!(Axis::X.other(), Axis::Y);
        assert_eq!(Axis::Y.other(), Axis::X);
    }
}
