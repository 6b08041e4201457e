//! CSV writing operations.

use std::{fs::File, io::BufWriter, path::Path};

use anyhow::{Context, Result};
use hexgrid::GridCell;
use polars::{df, prelude::{CsvWriter, SerWriter}};

/// Write an edge list as CSV with columns `node_a,node_b,weight,course` (cells in hex).
pub fn write_edge_list(path: &Path, edges: &[(GridCell, GridCell, f64, f64)]) -> Result<()> {
    let mut df = df!(
        "node_a" => edges.iter().map(|(a, ..)| a.to_string()).collect::<Vec<_>>(),
        "node_b" => edges.iter().map(|(_, b, ..)| b.to_string()).collect::<Vec<_>>(),
        "weight" => edges.iter().map(|&(_, _, weight, _)| weight).collect::<Vec<_>>(),
        "course" => edges.iter().map(|&(.., course)| course).collect::<Vec<_>>(),
    ).context("[io::csv::write] Failed to build edge table")?;

    let file = File::create(path)
        .with_context(|| format!("[io::csv::write] Failed to create file: {}", path.display()))?;
    CsvWriter::new(BufWriter::new(file))
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("[io::csv::write] Failed to write edge list to {}", path.display()))
}
