use geo::Coord;
use h3o::{CellIndex, LatLng, Resolution};

use crate::{GridCell, GridError, GridIndex};

/// `GridIndex` backed by the H3 hexagonal tessellation (via `h3o`).
#[derive(Debug, Clone, Copy, Default)]
pub struct H3Grid;

impl H3Grid {
    /// Validate a raw cell id as an H3 cell.
    #[inline]
    fn index(cell: GridCell) -> Result<CellIndex, GridError> {
        CellIndex::try_from(cell.raw()).map_err(|_| GridError::InvalidCell(cell.raw()))
    }
}

impl GridIndex for H3Grid {
    fn centroid_of(&self, cell: GridCell) -> Result<Coord<f64>, GridError> {
        let center = LatLng::from(Self::index(cell)?);
        Ok(Coord { x: center.lng(), y: center.lat() })
    }

    fn grid_distance(&self, a: GridCell, b: GridCell) -> Result<Option<u32>, GridError> {
        let (a, b) = (Self::index(a)?, Self::index(b)?);
        Ok(a.grid_distance(b).ok().and_then(|d| u32::try_from(d).ok()))
    }

    fn cell_at(&self, lat: f64, lon: f64, resolution: u8) -> Result<GridCell, GridError> {
        let resolution = Resolution::try_from(resolution)
            .map_err(|_| GridError::InvalidResolution(resolution))?;
        let point = LatLng::new(lat, lon)
            .map_err(|_| GridError::InvalidCoordinate { lat, lon })?;
        Ok(point.to_cell(resolution).into())
    }

    fn resolution_of(&self, cell: GridCell) -> Result<u8, GridError> {
        Ok(u8::from(Self::index(cell)?.resolution()))
    }
}
