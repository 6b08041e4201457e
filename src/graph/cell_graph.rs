use ahash::AHashMap;
use geo::Coord;
use hexgrid::GridCell;

use crate::graph::Graph;

/// A grid cell seen in the aggregated transitions.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub cell: GridCell,
    pub centroid: Coord<f64>, // Grid centroid (lon, lat)
    pub measured: Coord<f64>, // Median observed position (lon, lat), or the centroid
}

/// An undirected transition between two cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub a: GridCell,
    pub b: GridCell,
    pub transitions: u64, // Distinct trips observed between `a` and `b`
    pub course: f64,      // Median course over ground
    pub weight: f64,      // Traversal cost in [0, 1]
}

/// Undirected, weighted graph over grid cells. Immutable once built.
#[derive(Debug, Default)]
pub struct CellGraph {
    pub(super) nodes: Vec<Node>,
    pub(super) index: AHashMap<GridCell, u32>, // Map between cells and contiguous node indices.
    pub(super) edges: Vec<Edge>,
    pub(super) adjacency: Graph,
}

impl CellGraph {
    /// Get the number of nodes.
    #[inline] pub fn node_count(&self) -> usize { self.nodes.len() }

    /// Get the number of undirected edges.
    #[inline] pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Check if the graph has no nodes.
    #[inline] pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    /// Get all nodes, in first-appearance order.
    #[inline] pub fn nodes(&self) -> &[Node] { &self.nodes }

    /// Get all edges, in first-appearance order.
    #[inline] pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Get the node at a given index.
    #[inline] pub fn node(&self, idx: usize) -> &Node { &self.nodes[idx] }

    /// Get the node index of a cell, if it is in the graph.
    #[inline]
    pub fn index_of(&self, cell: GridCell) -> Option<usize> {
        self.index.get(&cell).map(|&i| i as usize)
    }

    /// Get the node for a cell, if it is in the graph.
    #[inline]
    pub fn get(&self, cell: GridCell) -> Option<&Node> {
        self.index_of(cell).map(|i| &self.nodes[i])
    }

    /// Check if a cell is a node of the graph.
    #[inline] pub fn contains(&self, cell: GridCell) -> bool { self.index.contains_key(&cell) }

    /// Get the number of edges incident to a node (a self-loop counts once).
    #[inline] pub fn degree(&self, idx: usize) -> usize { self.adjacency.degree(idx) }

    /// Get an iterator over the cells adjacent to a node.
    #[inline]
    pub fn neighbors(&self, idx: usize) -> impl Iterator<Item = GridCell> + '_ {
        self.adjacency.edges(idx).map(|v| self.nodes[v].cell)
    }

    /// Least-cost path between two node indices, as cells. `None` if they are disconnected.
    pub fn shortest_path(&self, source: usize, target: usize) -> Option<Vec<GridCell>> {
        self.adjacency.shortest_path(source, target)
            .map(|(_, path)| path.into_iter().map(|i| self.nodes[i].cell).collect())
    }
}
