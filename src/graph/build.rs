use std::collections::hash_map::Entry;

use ahash::AHashMap;
use geo::Coord;
use hexgrid::{GridCell, GridError, GridIndex};
use tracing::{debug, info};

use crate::{
    aggregate::TransitionRow,
    graph::{CellGraph, Edge, Graph, Node},
};

/// Number of distinct trips at which an edge becomes free to traverse.
const SATURATION: u64 = 100;

/// Traversal cost of an edge observed in `transitions` distinct trips:
/// `(100 - min(transitions, 100)) / 100`, so busier transitions are cheaper.
#[inline]
pub fn edge_weight(transitions: u64) -> f64 {
    (SATURATION - transitions.min(SATURATION)) as f64 / SATURATION as f64
}

impl CellGraph {
    /// Build the cell graph from aggregated transition rows in a single pass.
    ///
    /// Rows missing an endpoint or a course are ignored entirely. Every cell on
    /// either side of the remaining rows becomes a node, while only rows with a
    /// grid distance below `max_gap` become edges. A node's measured position
    /// comes from the first row ending in it; nodes never seen as a row's
    /// current cell use their centroid. When a pair of cells appears in both
    /// directions, the later row defines the edge.
    pub fn build(rows: &[TransitionRow], grid: &dyn GridIndex, max_gap: u32) -> Result<Self, GridError> {
        let rows = rows.iter()
            .filter_map(|row| match (row.predecessor, row.cell, row.median_course) {
                (Some(predecessor), Some(cell), Some(course)) => Some((predecessor, cell, course, row)),
                _ => None,
            })
            .collect::<Vec<_>>();

        // Assign contiguous indices in first-appearance order.
        let mut index = AHashMap::<GridCell, u32>::new();
        let mut cells = Vec::<GridCell>::new();
        for &(predecessor, cell, ..) in &rows {
            for cell in [predecessor, cell] {
                index.entry(cell).or_insert_with(|| {
                    cells.push(cell);
                    (cells.len() - 1) as u32
                });
            }
        }

        // First row ending in each cell provides its measured position.
        let mut measured = vec![None; cells.len()];
        for &(_, cell, _, row) in &rows {
            measured[index[&cell] as usize]
                .get_or_insert(Coord { x: row.median_lon, y: row.median_lat });
        }

        let nodes = cells.iter().zip(measured)
            .map(|(&cell, measured)| {
                let centroid = grid.centroid_of(cell)?;
                Ok(Node { cell, centroid, measured: measured.unwrap_or(centroid) })
            })
            .collect::<Result<Vec<_>, GridError>>()?;

        // One undirected edge per unordered pair, keyed by sorted node indices.
        let mut pairs = AHashMap::<(u32, u32), usize>::new();
        let mut edges = Vec::<Edge>::new();
        for &(predecessor, cell, course, row) in &rows {
            if !row.grid_distance.is_some_and(|d| d < max_gap) { continue }

            let (u, v) = (index[&predecessor], index[&cell]);
            let edge = Edge {
                a: predecessor,
                b: cell,
                transitions: row.trips,
                course,
                weight: edge_weight(row.trips),
            };
            match pairs.entry((u.min(v), u.max(v))) {
                Entry::Occupied(entry) => edges[*entry.get()] = edge,
                Entry::Vacant(entry) => {
                    entry.insert(edges.len());
                    edges.push(edge);
                }
            }
        }

        // Adjacency lists in edge order, mirrored for the reverse direction.
        let mut adjacent = vec![Vec::new(); nodes.len()];
        let mut weights = vec![Vec::new(); nodes.len()];
        for edge in &edges {
            let (u, v) = (index[&edge.a], index[&edge.b]);
            adjacent[u as usize].push(v);
            weights[u as usize].push(edge.weight);
            if u != v {
                adjacent[v as usize].push(u);
                weights[v as usize].push(edge.weight);
            }
        }

        let adjacency = Graph::new(nodes.len(), &adjacent, &weights);
        debug!("[graph] {} adjacency entries", adjacency.edge_count());
        info!(
            "[graph] built {} nodes and {} edges from {} rows (max_gap={max_gap})",
            nodes.len(), edges.len(), rows.len()
        );

        Ok(Self {
            adjacency,
            nodes,
            index,
            edges,
        })
    }
}
