//! The capability shared by both tree kinds and construction-time selection
//! between them.

use super::{BuildOptions, KdTree, QuadTree};
use crate::bounds::Square2;
use crate::error::PartitionError;
use crate::primitives::{Point2, Segment2};
use num_traits::Float;
use std::fmt;
use std::str::FromStr;

/// Read-only view of a built spatial partition.
///
/// Results are computed from the immutable tree on every call, so repeated
/// calls return identical values.
pub trait SpatialPartition<F: Float> {
    /// Returns the divider segments implied by the partition boundaries.
    fn lines(&self) -> Vec<Segment2<F>>;

    /// Returns the number of leaves (at least 1).
    fn num_leaves(&self) -> usize;

    /// Returns the depth of the deepest leaf (the root is depth 0).
    fn max_leaf_depth(&self) -> usize;
}

/// The two kinds of subdivision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Binary split at the median, alternating axes.
    KdTree,
    /// Four-way split into equal quadrants.
    QuadTree,
}

impl Algorithm {
    /// Both algorithms, in display order.
    pub const ALL: [Algorithm; 2] = [Algorithm::KdTree, Algorithm::QuadTree];

    /// Returns the key hosts use to name this algorithm.
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::KdTree => "kdtree",
            Algorithm::QuadTree => "quadtree",
        }
    }

    /// Builds a partition of this kind over `domain`.
    ///
    /// The kd-tree uses the square's closed extent as its line bounds; the
    /// quadtree drops points outside the half-open square.
    pub fn build<F: Float>(
        self,
        points: &[Point2<F>],
        options: &BuildOptions,
        domain: Square2<F>,
    ) -> Result<Partition<F>, PartitionError> {
        match self {
            Algorithm::KdTree => {
                KdTree::build_with(points, options, domain.to_aabb()).map(Partition::Kd)
            }
            Algorithm::QuadTree => {
                QuadTree::build_with(points, options, domain).map(Partition::Quad)
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Algorithm {
    type Err = PartitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kdtree" => Ok(Algorithm::KdTree),
            "quadtree" => Ok(Algorithm::QuadTree),
            _ => Err(PartitionError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// A built tree of either kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Partition<F> {
    /// Built by [`Algorithm::KdTree`].
    Kd(KdTree<F>),
    /// Built by [`Algorithm::QuadTree`].
    Quad(QuadTree<F>),
}

impl<F: Float> Partition<F> {
    /// Returns which algorithm built this partition.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Partition::Kd(_) => Algorithm::KdTree,
            Partition::Quad(_) => Algorithm::QuadTree,
        }
    }

    /// Returns the point sets of all leaves in traversal order.
    pub fn leaves(&self) -> Vec<&[Point2<F>]> {
        match self {
            Partition::Kd(tree) => tree.leaves(),
            Partition::Quad(tree) => tree.leaves(),
        }
    }

    /// Returns the number of points held across all leaves.
    pub fn len(&self) -> usize {
        match self {
            Partition::Kd(tree) => tree.len(),
            Partition::Quad(tree) => tree.len(),
        }
    }

    /// Returns `true` if no leaf holds a point.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the depth limit the tree was built with.
    pub fn max_depth(&self) -> usize {
        match self {
            Partition::Kd(tree) => tree.max_depth(),
            Partition::Quad(tree) => tree.max_depth(),
        }
    }
}

impl<F: Float> SpatialPartition<F> for Partition<F> {
    fn lines(&self) -> Vec<Segment2<F>> {
        match self {
            Partition::Kd(tree) => tree.lines(),
            Partition::Quad(tree) => tree.lines(),
        }
    }

    fn num_leaves(&self) -> usize {
        match self {
            Partition::Kd(tree) => tree.num_leaves(),
            Partition::Quad(tree) => tree.num_leaves(),
        }
    }

    fn max_leaf_depth(&self) -> usize {
        match self {
            Partition::Kd(tree) => tree.max_leaf_depth(),
            Partition::Quad(tree) => tree.max_leaf_depth(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::working_domain;

    fn scenario_points() -> Vec<Point2<f64>> {
        vec![
            Point2::new(10.0, 10.0),
            Point2::new(30.0, 90.0),
            Point2::new(70.0, 20.0),
            Point2::new(90.0, 70.0),
        ]
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!("kdtree".parse::<Algorithm>(), Ok(Algorithm::KdTree));
        assert_eq!("quadtree".parse::<Algorithm>(), Ok(Algorithm::QuadTree));
        assert_eq!(" QuadTree ".parse::<Algorithm>(), Ok(Algorithm::QuadTree));
        assert_eq!(
            "octree".parse::<Algorithm>(),
            Err(PartitionError::UnknownAlgorithm("octree".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_key() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_build_kd_scenario() {
        let partition = Algorithm::KdTree
            .build(&scenario_points(), &BuildOptions::new(1), working_domain())
            .unwrap();

        assert_eq!(partition.algorithm(), Algorithm::KdTree);
        assert_eq!(
            partition.lines(),
            vec![Segment2::from_coords(30.0, 0.0, 30.0, 100.0)]
        );
        assert_eq!(partition.num_leaves(), 2);
        assert_eq!(partition.max_leaf_depth(), 1);
        assert_eq!(partition.len(), 4);
    }

    #[test]
    fn test_build_quad_scenario() {
        let partition = Algorithm::QuadTree
            .build(&scenario_points(), &BuildOptions::new(1), working_domain())
            .unwrap();

        assert_eq!(partition.algorithm(), Algorithm::QuadTree);
        assert_eq!(
            partition.lines(),
            vec![
                Segment2::from_coords(0.0, 50.0, 100.0, 50.0),
                Segment2::from_coords(50.0, 0.0, 50.0, 100.0),
            ]
        );
        assert_eq!(partition.num_leaves(), 4);
        assert_eq!(partition.max_leaf_depth(), 1);
        assert!(partition.leaves().iter().all(|leaf| leaf.len() == 1));
    }

    #[test]
    fn test_interchangeable_through_trait() {
        fn summary<F: Float, P: SpatialPartition<F>>(p: &P) -> (usize, usize, usize) {
            (p.lines().len(), p.num_leaves(), p.max_leaf_depth())
        }

        let points = scenario_points();
        let results: Vec<_> = Algorithm::ALL
            .iter()
            .map(|a| {
                let p = a.build(&points, &BuildOptions::new(1), working_domain()).unwrap();
                summary(&p)
            })
            .collect();

        assert_eq!(results, vec![(1, 2, 1), (2, 4, 1)]);
    }

    #[test]
    fn test_zero_depth_single_leaf_for_both() {
        let points = scenario_points();
        for algorithm in Algorithm::ALL {
            let p = algorithm
                .build(&points, &BuildOptions::from_signed_depth(-3), working_domain())
                .unwrap();
            assert_eq!(p.num_leaves(), 1);
            assert_eq!(p.max_leaf_depth(), 0);
            assert!(p.lines().is_empty());
            assert_eq!(p.len(), 4);
        }
    }

    #[test]
    fn test_max_depth_reports_effective_limit() {
        let points = scenario_points();
        for algorithm in Algorithm::ALL {
            let p = algorithm
                .build(&points, &BuildOptions::new(4), working_domain())
                .unwrap();
            assert_eq!(p.max_depth(), 4);
            assert!(p.max_leaf_depth() <= p.max_depth());

            let clamped = algorithm
                .build(&points, &BuildOptions::from_signed_depth(-2), working_domain())
                .unwrap();
            assert_eq!(clamped.max_depth(), 0);
        }
    }

    #[test]
    fn test_errors_propagate_for_both() {
        let points = vec![Point2::new(1.0, 1.0), Point2::new(f64::NAN, 2.0)];
        for algorithm in Algorithm::ALL {
            assert_eq!(
                algorithm
                    .build(&points, &BuildOptions::new(2), working_domain())
                    .unwrap_err(),
                PartitionError::NonFiniteCoordinate { index: 1 }
            );
        }
    }

    #[test]
    fn test_empty_input() {
        let points: Vec<Point2<f64>> = vec![];
        for algorithm in Algorithm::ALL {
            let p = algorithm
                .build(&points, &BuildOptions::new(5), working_domain())
                .unwrap();
            assert!(p.is_empty());
            assert_eq!(p.num_leaves(), 1);
            assert_eq!(p.leaves(), vec![&[] as &[Point2<f64>]]);
        }
    }
}
