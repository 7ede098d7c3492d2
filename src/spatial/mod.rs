//! Spatial subdivision trees.
//!
//! This module provides two interchangeable ways of partitioning a point set:
//!
//! - [`KdTree`] - binary median splits on alternating axes
//! - [`QuadTree`] - four-way splits into equal square quadrants
//!
//! Both implement [`SpatialPartition`]. [`Algorithm`] selects one at
//! construction time and yields a [`Partition`].

mod kdtree;
mod options;
mod partition;
mod quadtree;

pub use kdtree::{KdNode, KdTree};
pub use options::{BuildOptions, DEFAULT_LEAF_CAPACITY, MAX_DEPTH_LIMIT};
pub use partition::{Algorithm, Partition, SpatialPartition};
pub use quadtree::{QuadNode, QuadTree};
