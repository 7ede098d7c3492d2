//! Build parameters shared by both tree kinds.

use crate::error::PartitionError;
use crate::primitives::Point2;
use num_traits::Float;

/// Number of points a leaf holds before it is subdivided.
pub const DEFAULT_LEAF_CAPACITY: usize = 2;

/// Largest `max_depth` a build accepts.
///
/// Recursion depth equals `max_depth` at most, so this bounds stack use for
/// untrusted callers. A quadtree cell at this depth is 2^-32 of the domain.
pub const MAX_DEPTH_LIMIT: usize = 32;

/// Parameters controlling how deep and how finely a tree subdivides.
///
/// ```
/// use subdivide2d::spatial::BuildOptions;
///
/// let opts = BuildOptions::new(4).with_leaf_capacity(3);
/// assert_eq!(opts.max_depth, 4);
/// assert_eq!(opts.leaf_capacity, 3);
///
/// // Hosts holding a signed depth get negatives clamped to zero.
/// assert_eq!(BuildOptions::from_signed_depth(-2).max_depth, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuildOptions {
    /// Depth at which nodes become leaves regardless of point count.
    pub max_depth: usize,
    /// Nodes with at most this many points become leaves.
    pub leaf_capacity: usize,
}

impl BuildOptions {
    /// Options with the given depth and the default leaf capacity.
    #[inline]
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            leaf_capacity: DEFAULT_LEAF_CAPACITY,
        }
    }

    /// Options from a signed depth. Negative depths are treated as 0.
    pub fn from_signed_depth(max_depth: i64) -> Self {
        Self::new(usize::try_from(max_depth.max(0)).unwrap_or(usize::MAX))
    }

    /// Returns these options with a different leaf capacity.
    #[inline]
    pub fn with_leaf_capacity(self, leaf_capacity: usize) -> Self {
        Self {
            leaf_capacity,
            ..self
        }
    }

    /// Returns `true` if a node holding `count` points at `depth` is a leaf.
    #[inline]
    pub fn is_leaf(&self, count: usize, depth: usize) -> bool {
        count <= self.leaf_capacity || depth >= self.max_depth
    }

    /// Checks the depth limit and leaf capacity.
    pub fn validate(&self) -> Result<(), PartitionError> {
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(PartitionError::DepthLimitExceeded {
                requested: self.max_depth,
                limit: MAX_DEPTH_LIMIT,
            });
        }
        if self.leaf_capacity == 0 {
            return Err(PartitionError::InvalidLeafCapacity);
        }
        Ok(())
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Rejects the first point with a NaN or infinite coordinate.
pub(crate) fn validate_points<F: Float>(points: &[Point2<F>]) -> Result<(), PartitionError> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(PartitionError::NonFiniteCoordinate { index }),
        None => Ok(()),
    }
}
