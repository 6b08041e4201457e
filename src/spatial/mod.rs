mod point;

use geo::Coord;
use rstar::RTree;

use crate::graph::Node;
use point::IndexedPoint;

/// Nearest-neighbor lookup over node centroids.
///
/// Distances are planar over (lon, lat) degrees, so results are approximate
/// near the poles and across the antimeridian.
#[derive(Debug, Default)]
pub struct SpatialIndex {
    rtree: RTree<IndexedPoint>,
}

impl SpatialIndex {
    /// Bulk-load an R-tree over the centroids of `nodes`, keyed by node index.
    pub fn build(nodes: &[Node]) -> Self {
        Self {
            rtree: RTree::bulk_load(
                nodes.iter().enumerate()
                    .map(|(i, node)| IndexedPoint::new(i, node.centroid))
                    .collect()
            ),
        }
    }

    /// Get the number of indexed points.
    #[inline] pub fn len(&self) -> usize { self.rtree.size() }

    /// Check if there are no indexed points.
    #[inline] pub fn is_empty(&self) -> bool { self.rtree.size() == 0 }

    /// Index of the node whose centroid is closest to `point` (lon, lat).
    /// Equidistant candidates resolve to the lowest node index.
    pub fn nearest(&self, point: Coord<f64>) -> Option<usize> {
        let mut candidates = self.rtree.nearest_neighbor_iter_with_distance_2(&[point.x, point.y]);
        let (first, best) = candidates.next()?;
        Some(candidates
            .take_while(|&(_, distance_2)| distance_2 == best)
            .fold(first.idx(), |idx, (candidate, _)| idx.min(candidate.idx())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexgrid::GridCell;

    fn node(i: u64, x: f64, y: f64) -> Node {
        Node { cell: GridCell::new(i), centroid: Coord { x, y }, measured: Coord { x, y } }
    }

    #[test]
    fn empty_index_has_no_nearest() {
        let index = SpatialIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.nearest(Coord { x: 0.0, y: 0.0 }), None);
    }

    #[test]
    fn finds_closest_centroid() {
        let index = SpatialIndex::build(&[node(1, 0.0, 0.0), node(2, 1.0, 1.0), node(3, 5.0, 5.0)]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.nearest(Coord { x: 0.9, y: 1.2 }), Some(1));
        assert_eq!(index.nearest(Coord { x: 4.0, y: 4.0 }), Some(2));
        assert_eq!(index.nearest(Coord { x: -3.0, y: 0.1 }), Some(0));
    }

    #[test]
    fn ties_resolve_to_lowest_index() {
        let nodes = [node(1, 1.0, 0.0), node(2, -1.0, 0.0), node(3, 0.0, 1.0), node(4, 0.0, 3.0)];
        let index = SpatialIndex::build(&nodes);
        for _ in 0..10 {
            assert_eq!(index.nearest(Coord { x: 0.0, y: 0.0 }), Some(0));
        }

        // Same answer regardless of insertion order.
        let reversed = nodes.iter().rev().cloned().collect::<Vec<_>>();
        let index = SpatialIndex::build(&reversed);
        assert_eq!(index.nearest(Coord { x: 0.0, y: 0.0 }), Some(1)); // cell 3 at (0, 1)
    }
}
