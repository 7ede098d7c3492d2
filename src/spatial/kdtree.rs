//! KD-tree subdivision of a 2D point set.
//!
//! The tree splits its points at the median along an axis that alternates
//! with depth (x at even depths, y at odd depths) until a node holds no more
//! than the leaf capacity or the maximum depth is reached. Every input point
//! ends up in exactly one leaf.
//!
//! # Example
//!
//! ```
//! use subdivide2d::bounds::Aabb2;
//! use subdivide2d::spatial::{KdTree, SpatialPartition};
//! use subdivide2d::{Point2, Segment2};
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(10.0, 10.0),
//!     Point2::new(30.0, 90.0),
//!     Point2::new(70.0, 20.0),
//!     Point2::new(90.0, 70.0),
//! ];
//! let domain = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(100.0, 100.0));
//!
//! let tree = KdTree::build(&points, 1, domain).unwrap();
//!
//! assert_eq!(tree.lines(), vec![Segment2::from_coords(30.0, 0.0, 30.0, 100.0)]);
//! assert_eq!(tree.num_leaves(), 2);
//! assert_eq!(tree.max_leaf_depth(), 1);
//! ```

use super::options::validate_points;
use super::{BuildOptions, SpatialPartition};
use crate::bounds::Aabb2;
use crate::error::PartitionError;
use crate::primitives::{Axis, Point2, Segment2};
use num_traits::Float;
use std::cmp::Ordering;

/// A node in the KD-tree.
#[derive(Debug, Clone, PartialEq)]
pub enum KdNode<F> {
    /// A terminal node owning the points assigned to it.
    Leaf {
        /// Points in this leaf.
        points: Vec<Point2<F>>,
    },
    /// A node split in two along an axis.
    Internal {
        /// The axis compared at this node.
        axis: Axis,
        /// Axis coordinate of the last point in the low half.
        split: F,
        /// The lower half of the sorted points (left or bottom side).
        low: Box<KdNode<F>>,
        /// The upper half of the sorted points (right or top side).
        high: Box<KdNode<F>>,
    },
}

impl<F: Float> KdNode<F> {
    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, KdNode::Leaf { .. })
    }

    fn num_leaves(&self) -> usize {
        match self {
            KdNode::Leaf { .. } => 1,
            KdNode::Internal { low, high, .. } => low.num_leaves() + high.num_leaves(),
        }
    }

    fn max_leaf_depth(&self) -> usize {
        match self {
            KdNode::Leaf { .. } => 0,
            KdNode::Internal { low, high, .. } => {
                1 + low.max_leaf_depth().max(high.max_leaf_depth())
            }
        }
    }
}

/// A 2D KD-tree built to a bounded depth.
///
/// # Ordering of equal coordinates
///
/// Points are sorted by the split-axis coordinate, then by the other
/// coordinate. Points equal in both keep their input order. A point whose
/// axis value equals `split` can therefore sit on either side of the divider
/// line; the line does not visually separate such points.
///
/// # Complexity
///
/// - Construction: O(n log n), dominated by the per-level sort
/// - Lines, leaf count, leaf depth: O(nodes)
#[derive(Debug, Clone, PartialEq)]
pub struct KdTree<F> {
    root: KdNode<F>,
    domain: Aabb2<F>,
    options: BuildOptions,
    size: usize,
}

impl<F: Float> KdTree<F> {
    /// Builds a KD-tree with the default leaf capacity.
    ///
    /// `domain` is the rectangle that [`lines`](SpatialPartition::lines)
    /// clips the root divider to. Points outside it are still partitioned.
    pub fn build(
        points: &[Point2<F>],
        max_depth: usize,
        domain: Aabb2<F>,
    ) -> Result<Self, PartitionError> {
        Self::build_with(points, &BuildOptions::new(max_depth), domain)
    }

    /// Builds a KD-tree with explicit options.
    ///
    /// All input is validated before any subdivision happens.
    pub fn build_with(
        points: &[Point2<F>],
        options: &BuildOptions,
        domain: Aabb2<F>,
    ) -> Result<Self, PartitionError> {
        options.validate()?;
        domain.validate()?;
        validate_points(points)?;

        let root = Self::build_recursive(points.to_vec(), options, 0);

        Ok(KdTree {
            root,
            domain,
            options: *options,
            size: points.len(),
        })
    }

    /// Recursively builds the tree, taking ownership of this node's points.
    fn build_recursive(
        mut points: Vec<Point2<F>>,
        options: &BuildOptions,
        depth: usize,
    ) -> KdNode<F> {
        if options.is_leaf(points.len(), depth) {
            return KdNode::Leaf { points };
        }

        let axis = Axis::for_depth(depth);
        points.sort_by(|a, b| Self::compare_on(axis, *a, *b));

        let halfway = points.len() / 2;
        let split = axis.coord(points[halfway - 1]);
        let high_points = points.split_off(halfway);

        let low = Self::build_recursive(points, options, depth + 1);
        let high = Self::build_recursive(high_points, options, depth + 1);

        KdNode::Internal {
            axis,
            split,
            low: Box::new(low),
            high: Box::new(high),
        }
    }

    /// Orders by the axis coordinate, then by the other one.
    fn compare_on(axis: Axis, a: Point2<F>, b: Point2<F>) -> Ordering {
        let primary = axis.coord(a).partial_cmp(&axis.coord(b));
        let secondary = axis.other().coord(a).partial_cmp(&axis.other().coord(b));
        primary
            .unwrap_or(Ordering::Equal)
            .then(secondary.unwrap_or(Ordering::Equal))
    }

    /// Returns the divider lines clipped to `bounds` instead of the build domain.
    ///
    /// Each internal node contributes one segment spanning its current
    /// rectangle, followed by the lines of its low child and then its high
    /// child, each within its side of the split.
    pub fn lines_within(&self, bounds: Aabb2<F>) -> Vec<Segment2<F>> {
        let mut lines = Vec::new();
        Self::lines_recursive(&self.root, bounds, &mut lines);
        lines
    }

    fn lines_recursive(node: &KdNode<F>, bounds: Aabb2<F>, lines: &mut Vec<Segment2<F>>) {
        if let KdNode::Internal {
            axis,
            split,
            low,
            high,
        } = node
        {
            let line = match axis {
                Axis::X => Segment2::vertical(*split, bounds.min.y, bounds.max.y),
                Axis::Y => Segment2::horizontal(*split, bounds.min.x, bounds.max.x),
            };
            lines.push(line);

            let (low_bounds, high_bounds) = bounds.split_at(*axis, *split);
            Self::lines_recursive(low, low_bounds, lines);
            Self::lines_recursive(high, high_bounds, lines);
        }
    }

    /// Returns the point sets of all leaves, low side before high side.
    pub fn leaves(&self) -> Vec<&[Point2<F>]> {
        let mut leaves = Vec::new();
        Self::leaves_recursive(&self.root, &mut leaves);
        leaves
    }

    fn leaves_recursive<'a>(node: &'a KdNode<F>, leaves: &mut Vec<&'a [Point2<F>]>) {
        match node {
            KdNode::Leaf { points } => leaves.push(points.as_slice()),
            KdNode::Internal { low, high, .. } => {
                Self::leaves_recursive(low, leaves);
                Self::leaves_recursive(high, leaves);
            }
        }
    }

    /// Returns the root node.
    pub fn root(&self) -> &KdNode<F> {
        &self.root
    }

    /// Returns the rectangle used by [`lines`](SpatialPartition::lines).
    pub fn domain(&self) -> Aabb2<F> {
        self.domain
    }

    /// Returns the options the tree was built with.
    pub fn options(&self) -> BuildOptions {
        self.options
    }

    /// Returns the depth limit the tree was built with.
    pub fn max_depth(&self) -> usize {
        self.options.max_depth
    }

    /// Returns the number of points in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl<F: Float> SpatialPartition<F> for KdTree<F> {
    fn lines(&self) -> Vec<Segment2<F>> {
        self.lines_within(self.domain)
    }

    fn num_leaves(&self) -> usize {
        self.root.num_leaves()
    }

    fn max_leaf_depth(&self) -> usize {
        self.root.max_leaf_depth()
    }
}
