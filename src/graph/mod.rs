mod build;
mod cell_graph;
mod graph;
mod path;

pub use build::edge_weight;
pub use cell_graph::{CellGraph, Edge, Node};
pub(crate) use graph::Graph;
