use geo::{Coord, LineString};
use hexgrid::{GridCell, GridIndex};

use crate::{error::{ImputeError, Result}, graph::CellGraph};

/// Where a cell is placed when a cell path becomes a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionMode {
    /// Fixed geometric center of the cell.
    #[default]
    Centroid,
    /// Median observed position within the cell, or its centroid if never observed.
    Measured,
}

/// Convert a cell sequence into a (lon, lat) line.
///
/// Cells that are not graph nodes (stitched query endpoints) are placed at
/// their centroid in either mode. A single cell yields a two-point line with
/// both vertices equal.
pub(crate) fn to_line(cells: &[GridCell], mode: PositionMode, graph: &CellGraph, grid: &dyn GridIndex) -> Result<LineString<f64>> {
    if cells.is_empty() { return Err(ImputeError::InvalidSequence) }

    let mut coords = cells.iter()
        .map(|&cell| position(cell, mode, graph, grid))
        .collect::<Result<Vec<_>>>()?;
    if coords.len() == 1 { coords.push(coords[0]) }

    Ok(LineString::new(coords))
}

/// Position of a single cell under `mode`.
fn position(cell: GridCell, mode: PositionMode, graph: &CellGraph, grid: &dyn GridIndex) -> Result<Coord<f64>> {
    match (graph.get(cell), mode) {
        (Some(node), PositionMode::Centroid) => Ok(node.centroid),
        (Some(node), PositionMode::Measured) => Ok(node.measured),
        (None, _) => Ok(grid.centroid_of(cell)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{row, LineGrid};

    fn graph() -> CellGraph {
        let mut first = row(0, 1, 50, Some(1));
        first.median_lat = 0.3;
        first.median_lon = 1.2;
        CellGraph::build(&[first, row(1, 2, 50, Some(1))], &LineGrid, 25).unwrap()
    }

    #[test]
    fn empty_sequence_is_invalid() {
        assert!(matches!(to_line(&[], PositionMode::Centroid, &graph(), &LineGrid), Err(ImputeError::InvalidSequence)));
    }

    #[test]
    fn single_cell_is_duplicated() {
        let line = to_line(&[LineGrid::cell(1)], PositionMode::Centroid, &graph(), &LineGrid).unwrap();
        assert_eq!(line.0, vec![Coord { x: 1.0, y: 0.0 }, Coord { x: 1.0, y: 0.0 }]);

        let line = to_line(&[LineGrid::cell(1)], PositionMode::Measured, &graph(), &LineGrid).unwrap();
        assert_eq!(line.0, vec![Coord { x: 1.2, y: 0.3 }, Coord { x: 1.2, y: 0.3 }]);
    }

    #[test]
    fn modes_differ_only_for_measured_cells() {
        let cells = [0, 1, 2].map(LineGrid::cell);
        let centroids = to_line(&cells, PositionMode::Centroid, &graph(), &LineGrid).unwrap();
        let measured = to_line(&cells, PositionMode::Measured, &graph(), &LineGrid).unwrap();

        assert_eq!(centroids.0, vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 0.0 }, Coord { x: 2.0, y: 0.0 }]);
        // Cell 0 is only a predecessor, so it keeps its centroid; cell 2 uses the row median (lon 2.0).
        assert_eq!(measured.0, vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 1.2, y: 0.3 }, Coord { x: 2.0, y: 0.0 }]);
    }

    #[test]
    fn cells_outside_the_graph_use_their_centroid() {
        let line = to_line(&[LineGrid::cell(7), LineGrid::cell(2)], PositionMode::Measured, &graph(), &LineGrid).unwrap();
        assert_eq!(line.0[0], Coord { x: 7.0, y: 0.0 });
    }
}
