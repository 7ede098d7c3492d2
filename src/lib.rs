//! subdivide2d - Kd-tree and quadtree subdivision of 2D point sets
//!
//! Builds a hierarchical partition of a point set to a fixed maximum depth and
//! reports the divider lines implied by its boundaries, its leaf count and the
//! depth of its deepest leaf. Trees are immutable once built.
//!
//! ```
//! use subdivide2d::bounds::working_domain;
//! use subdivide2d::spatial::{Algorithm, BuildOptions, SpatialPartition};
//! use subdivide2d::Point2;
//!
//! let points = vec![
//!     Point2::new(10.0, 10.0),
//!     Point2::new(30.0, 90.0),
//!     Point2::new(70.0, 20.0),
//!     Point2::new(90.0, 70.0),
//! ];
//!
//! let algorithm: Algorithm = "quadtree".parse().unwrap();
//! let tree = algorithm
//!     .build(&points, &BuildOptions::new(1), working_domain())
//!     .unwrap();
//!
//! assert_eq!(tree.num_leaves(), 4);
//! assert_eq!(tree.max_leaf_depth(), 1);
//! ```

pub mod bounds;
pub mod error;
pub mod primitives;
pub mod spatial;

pub use error::PartitionError;
pub use primitives::{Axis, Point2, Segment2};
pub use spatial::{Algorithm, BuildOptions, KdTree, Partition, QuadTree, SpatialPartition};
