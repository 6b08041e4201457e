//! Deterministic one-dimensional grid used by unit tests.

use std::{io, sync::Arc};

use geo::Coord;
use hexgrid::{GridCell, GridError, GridIndex};
use parking_lot::Mutex;

use crate::aggregate::TransitionRow;

/// Marks raw ids produced by `LineGrid`.
const TAG: u64 = 1 << 62;
/// Shifts signed positions into the unsigned id space.
const BIAS: i64 = 1 << 32;

/// Grid whose cell `i` covers longitudes `[i - 0.5, i + 0.5)` at every latitude.
/// Its centroid is `(i, 0)` and the grid distance between cells is `|i - j|`.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct LineGrid;

impl LineGrid {
    /// Cell at position `i`.
    pub(crate) fn cell(i: i64) -> GridCell { GridCell::new(TAG | (i + BIAS) as u64) }

    fn position(cell: GridCell) -> Result<i64, GridError> {
        if cell.raw() & TAG == 0 { return Err(GridError::InvalidCell(cell.raw())) }
        Ok((cell.raw() & !TAG) as i64 - BIAS)
    }
}

impl GridIndex for LineGrid {
    fn centroid_of(&self, cell: GridCell) -> Result<Coord<f64>, GridError> {
        Ok(Coord { x: Self::position(cell)? as f64, y: 0.0 })
    }

    fn grid_distance(&self, a: GridCell, b: GridCell) -> Result<Option<u32>, GridError> {
        Ok(Some(Self::position(a)?.abs_diff(Self::position(b)?) as u32))
    }

    fn cell_at(&self, lat: f64, lon: f64, _resolution: u8) -> Result<GridCell, GridError> {
        if !lat.is_finite() || !lon.is_finite() { return Err(GridError::InvalidCoordinate { lat, lon }) }
        Ok(Self::cell((lon + 0.5).floor() as i64))
    }

    fn resolution_of(&self, cell: GridCell) -> Result<u8, GridError> {
        Self::position(cell).map(|_| 0)
    }
}

/// A complete transition row between `LineGrid` cells, with its median at the current cell's centroid.
pub(crate) fn row(predecessor: i64, cell: i64, trips: u64, grid_distance: Option<u32>) -> TransitionRow {
    TransitionRow {
        predecessor: Some(LineGrid::cell(predecessor)),
        cell: Some(LineGrid::cell(cell)),
        observations: trips,
        objects: 1,
        median_speed: Some(10.0),
        median_course: Some(90.0),
        trips,
        median_lat: 0.0,
        median_lon: cell as f64,
        grid_distance,
    }
}

/// Shared sink for formatted log lines.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

/// Run `f` under a debug-level subscriber and return everything it logged.
pub(crate) fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let logs = buffer.0.lock();
    String::from_utf8_lossy(&logs).into_owned()
}
