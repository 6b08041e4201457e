use geo::Coord;

use crate::GridCell;

/// Errors raised by grid coordinate math.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Latitude/longitude pair that cannot be placed on the grid.
    #[error("invalid coordinate (lat={lat}, lon={lon})")]
    InvalidCoordinate { lat: f64, lon: f64 },

    /// Raw id that is not a valid cell of this grid.
    #[error("invalid grid cell {0:#x}")]
    InvalidCell(u64),

    /// Resolution outside the range supported by the grid.
    #[error("invalid grid resolution {0}")]
    InvalidResolution(u8),
}

/// Cell coordinate math required by the imputation engine.
///
/// Coordinates are returned as `Coord { x: lon, y: lat }` in degrees.
pub trait GridIndex: Send + Sync + std::fmt::Debug {
    /// Geometric center of `cell`.
    fn centroid_of(&self, cell: GridCell) -> Result<Coord<f64>, GridError>;

    /// Minimum number of adjacent-cell hops between `a` and `b`.
    /// `Ok(None)` when the distance is undefined (different resolutions,
    /// cells too far apart for the local coordinate system, etc).
    fn grid_distance(&self, a: GridCell, b: GridCell) -> Result<Option<u32>, GridError>;

    /// Cell containing (`lat`, `lon`) at `resolution`.
    fn cell_at(&self, lat: f64, lon: f64, resolution: u8) -> Result<GridCell, GridError>;

    /// Resolution of `cell`.
    fn resolution_of(&self, cell: GridCell) -> Result<u8, GridError>;
}
