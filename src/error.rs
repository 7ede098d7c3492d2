//! Error types for spatial subdivision.

use thiserror::Error;

/// Errors that can occur while building a spatial partition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PartitionError {
    /// An input point has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the offending point in the input slice.
        index: usize,
    },

    /// The working domain is non-finite, inverted, or has no extent.
    #[error("invalid domain: {reason}")]
    InvalidDomain {
        /// What is wrong with the domain.
        reason: &'static str,
    },

    /// The requested depth is above the hard recursion limit.
    #[error("max depth {requested} exceeds the limit of {limit}")]
    DepthLimitExceeded {
        /// Depth requested by the caller.
        requested: usize,
        /// Largest depth accepted.
        limit: usize,
    },

    /// Leaves must be allowed to hold at least one point.
    #[error("leaf capacity must be at least 1")]
    InvalidLeafCapacity,

    /// An algorithm key that names neither tree kind.
    #[error("unknown algorithm `{0}` (expected `kdtree` or `quadtree`)")]
    UnknownAlgorithm(String),
}
