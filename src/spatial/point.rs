use geo::Coord;
use rstar::{PointDistance, RTreeObject, AABB};

/// A node centroid in an R-tree, associated with its node by index.
#[derive(Debug, Clone, Copy)]
pub(super) struct IndexedPoint {
    idx: usize, // Index of the corresponding node
    position: [f64; 2], // (lon, lat)
}

impl IndexedPoint {
    pub(super) fn new(idx: usize, position: Coord<f64>) -> Self {
        Self { idx, position: [position.x, position.y] }
    }

    /// Get the index of the corresponding node.
    pub(super) fn idx(&self) -> usize { self.idx }
}

impl RTreeObject for IndexedPoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.position)
    }
}

impl PointDistance for IndexedPoint {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.position[0] - point[0];
        let dy = self.position[1] - point[1];
        dx * dx + dy * dy
    }
}
