//! Axis-aligned square cells with half-open containment.

use super::Aabb2;
use crate::error::PartitionError;
use crate::primitives::Point2;
use num_traits::Float;

/// Side length of the conventional working domain.
pub const WORKING_DOMAIN_SIZE: f64 = 100.0;

/// An axis-aligned square given by its centre and side length.
///
/// Containment is half-open, `[low, high)` on each axis, so the four
/// [`quadrants`](Square2::quadrants) of a square tile it exactly: a point on a
/// shared edge belongs to exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square2<F> {
    /// Centre of the square.
    pub centre: Point2<F>,
    /// Full side length.
    pub size: F,
}

impl<F: Float> Square2<F> {
    /// Creates a square from its centre and side length.
    #[inline]
    pub fn new(centre: Point2<F>, size: F) -> Self {
        Self { centre, size }
    }

    /// Returns the conventional `[0, 100) x [0, 100)` working domain.
    pub fn working_domain() -> Self {
        let size = F::from(WORKING_DOMAIN_SIZE).unwrap();
        let half = size / (F::one() + F::one());
        Self::new(Point2::new(half, half), size)
    }

    /// Returns half the side length.
    #[inline]
    pub fn half_size(self) -> F {
        self.size / (F::one() + F::one())
    }

    /// Smallest x coordinate inside the square.
    #[inline]
    pub fn left(self) -> F {
        self.centre.x - self.half_size()
    }

    /// Exclusive upper x bound.
    #[inline]
    pub fn right(self) -> F {
        self.centre.x + self.half_size()
    }

    /// Smallest y coordinate inside the square.
    #[inline]
    pub fn bottom(self) -> F {
        self.centre.y - self.half_size()
    }

    /// Exclusive upper y bound.
    #[inline]
    pub fn top(self) -> F {
        self.centre.y + self.half_size()
    }

    /// Returns `true` if `p` lies in `[left, right) x [bottom, top)`.
    #[inline]
    pub fn contains_half_open(self, p: Point2<F>) -> bool {
        let half = self.half_size();
        p.x >= self.centre.x - half
            && p.x < self.centre.x + half
            && p.y >= self.centre.y - half
            && p.y < self.centre.y + half
    }

    /// Returns the four child squares in fixed order:
    /// (-x, -y), (-x, +y), (+x, -y), (+x, +y).
    ///
    /// Each child is centred `size / 4` away from this centre on both axes
    /// and has side `size / 2`.
    pub fn quadrants(self) -> [Self; 4] {
        let two = F::one() + F::one();
        let quarter = self.size / (two * two);
        let child_size = self.size / two;
        let at = |dx: F, dy: F| Self::new(self.centre.offset(dx, dy), child_size);
        [
            at(-quarter, -quarter),
            at(-quarter, quarter),
            at(quarter, -quarter),
            at(quarter, quarter),
        ]
    }

    /// Returns the closed bounding box with the same extent.
    #[inline]
    pub fn to_aabb(self) -> Aabb2<F> {
        Aabb2::new(
            Point2::new(self.left(), self.bottom()),
            Point2::new(self.right(), self.top()),
        )
    }

    /// Checks that the centre is finite and the size finite and positive.
    pub fn validate(self) -> Result<(), PartitionError> {
        if !self.centre.is_finite() || !self.size.is_finite() {
            return Err(PartitionError::InvalidDomain {
                reason: "square has a non-finite centre or size",
            });
        }
        if self.size <= F::zero() {
            return Err(PartitionError::InvalidDomain {
                reason: "square size must be positive",
            });
        }
        Ok(())
    }
}

/// Returns the conventional working domain, the square `[0, 100)²`.
///
/// Builders never fall back to this on their own; hosts that work in this
/// domain pass it explicitly.
pub fn working_domain<F: Float>() -> Square2<F> {
    Square2::working_domain()
}
