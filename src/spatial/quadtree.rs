//! Quadtree subdivision of a 2D point set.
//!
//! Each node covers a square cell. A cell holding more points than the leaf
//! capacity is split into four equal quadrants until the maximum depth is
//! reached. Cells are half-open (`[low, high)` on both axes), so every point
//! inside the root square lands in exactly one leaf.
//!
//! Points outside the root square are not an error: they are excluded from
//! every leaf and counted by [`QuadTree::num_excluded`].
//!
//! # Example
//!
//! ```
//! use subdivide2d::bounds::working_domain;
//! use subdivide2d::spatial::{QuadTree, SpatialPartition};
//! use subdivide2d::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(10.0, 10.0),
//!     Point2::new(30.0, 90.0),
//!     Point2::new(70.0, 20.0),
//!     Point2::new(90.0, 70.0),
//! ];
//!
//! let tree = QuadTree::build(&points, 1, working_domain()).unwrap();
//!
//! assert_eq!(tree.lines().len(), 2);
//! assert_eq!(tree.num_leaves(), 4);
//! assert_eq!(tree.max_leaf_depth(), 1);
//! ```

use super::options::validate_points;
use super::{BuildOptions, SpatialPartition};
use crate::bounds::Square2;
use crate::error::PartitionError;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;

/// A node in the quadtree.
#[derive(Debug, Clone, PartialEq)]
pub enum QuadNode<F> {
    /// A terminal cell owning the points inside it.
    Leaf {
        /// Points in this cell.
        points: Vec<Point2<F>>,
    },
    /// A cell split into four quadrants.
    Internal {
        /// The cell covered by this node.
        square: Square2<F>,
        /// Children in the order of [`Square2::quadrants`]:
        /// (-x, -y), (-x, +y), (+x, -y), (+x, +y).
        children: Box<[QuadNode<F>; 4]>,
    },
}

impl<F: Float> QuadNode<F> {
    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, QuadNode::Leaf { .. })
    }

    fn num_leaves(&self) -> usize {
        match self {
            QuadNode::Leaf { .. } => 1,
            QuadNode::Internal { children, .. } => children.iter().map(Self::num_leaves).sum(),
        }
    }

    fn max_leaf_depth(&self) -> usize {
        match self {
            QuadNode::Leaf { .. } => 0,
            QuadNode::Internal { children, .. } => {
                1 + children.iter().map(Self::max_leaf_depth).max().unwrap_or(0)
            }
        }
    }
}

/// A 2D quadtree built to a bounded depth over a square domain.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadTree<F> {
    root: QuadNode<F>,
    domain: Square2<F>,
    options: BuildOptions,
    size: usize,
    excluded: usize,
}

impl<F: Float> QuadTree<F> {
    /// Builds a quadtree with the default leaf capacity.
    pub fn build(
        points: &[Point2<F>],
        max_depth: usize,
        domain: Square2<F>,
    ) -> Result<Self, PartitionError> {
        Self::build_with(points, &BuildOptions::new(max_depth), domain)
    }

    /// Builds a quadtree with explicit options.
    ///
    /// All input is validated before any subdivision happens, including
    /// points that fall outside `domain`.
    pub fn build_with(
        points: &[Point2<F>],
        options: &BuildOptions,
        domain: Square2<F>,
    ) -> Result<Self, PartitionError> {
        options.validate()?;
        domain.validate()?;
        validate_points(points)?;

        let inside: Vec<Point2<F>> = points
            .iter()
            .copied()
            .filter(|p| domain.contains_half_open(*p))
            .collect();
        let size = inside.len();
        let root = Self::build_recursive(inside, options, 0, domain);

        Ok(QuadTree {
            root,
            domain,
            options: *options,
            size,
            excluded: points.len() - size,
        })
    }

    /// Recursively builds the tree. `points` all lie inside `square`.
    fn build_recursive(
        points: Vec<Point2<F>>,
        options: &BuildOptions,
        depth: usize,
        square: Square2<F>,
    ) -> QuadNode<F> {
        if options.is_leaf(points.len(), depth) {
            return QuadNode::Leaf { points };
        }

        let mut buckets: [Vec<Point2<F>>; 4] = Default::default();
        for p in points {
            buckets[Self::quadrant_index(square.centre, p)].push(p);
        }

        let quadrants = square.quadrants();
        let children = std::array::from_fn(|i| {
            Self::build_recursive(
                std::mem::take(&mut buckets[i]),
                options,
                depth + 1,
                quadrants[i],
            )
        });

        QuadNode::Internal {
            square,
            children: Box::new(children),
        }
    }

    /// Index into [`Square2::quadrants`] of the quadrant holding `p`.
    ///
    /// A coordinate equal to the centre belongs to the upper half, matching
    /// the half-open cells.
    #[inline]
    fn quadrant_index(centre: Point2<F>, p: Point2<F>) -> usize {
        let east = usize::from(p.x >= centre.x);
        let north = usize::from(p.y >= centre.y);
        east * 2 + north
    }

    fn lines_recursive(node: &QuadNode<F>, lines: &mut Vec<Segment2<F>>) {
        if let QuadNode::Internal { square, children } = node {
            let c = square.centre;
            lines.push(Segment2::horizontal(c.y, square.left(), square.right()));
            lines.push(Segment2::vertical(c.x, square.bottom(), square.top()));
            for child in children.iter() {
                Self::lines_recursive(child, lines);
            }
        }
    }

    /// Returns the point sets of all leaves in child order.
    pub fn leaves(&self) -> Vec<&[Point2<F>]> {
        let mut leaves = Vec::new();
        Self::leaves_recursive(&self.root, &mut leaves);
        leaves
    }

    fn leaves_recursive<'a>(node: &'a QuadNode<F>, leaves: &mut Vec<&'a [Point2<F>]>) {
        match node {
            QuadNode::Leaf { points } => leaves.push(points.as_slice()),
            QuadNode::Internal { children, .. } => {
                for child in children.iter() {
                    Self::leaves_recursive(child, leaves);
                }
            }
        }
    }

    /// Returns the root node.
    pub fn root(&self) -> &QuadNode<F> {
        &self.root
    }

    /// Returns the root square.
    pub fn domain(&self) -> Square2<F> {
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

    /// Returns the number of points inside the domain.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if no point fell inside the domain.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns how many input points lay outside the domain.
    pub fn num_excluded(&self) -> usize {
        self.excluded
    }
}

impl<F: Float> SpatialPartition<F> for QuadTree<F> {
    /// Each internal node contributes its horizontal then its vertical
    /// centre line, followed by the lines of its four children in order.
    fn lines(&self) -> Vec<Segment2<F>> {
        let mut lines = Vec::new();
        Self::lines_recursive(&self.root, &mut lines);
        lines
    }

    fn num_leaves(&self) -> usize {
        self.root.num_leaves()
    }

    fn max_leaf_depth(&self) -> usize {
        self.root.max_leaf_depth()
    }
}
