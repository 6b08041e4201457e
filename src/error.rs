use hexgrid::{GridCell, GridError};
use polars::prelude::PolarsError;

/// Errors raised while turning raw observations into transition rows.
#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    #[error("failed to read observations: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse observations: {0}")]
    Polars(#[from] PolarsError),

    #[error("required column '{0}' not found")]
    MissingColumn(String),

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Errors surfaced by dataset loading and gap queries.
#[derive(Debug, thiserror::Error)]
pub enum ImputeError {
    #[error("graph is empty: no dataset loaded or the dataset produced no cells")]
    EmptyGraph,

    #[error("no path between cells {from} and {to}")]
    NoPath { from: GridCell, to: GridCell },

    #[error("cannot build a line from an empty cell sequence")]
    InvalidSequence,

    #[error("aggregation failed: {0}")]
    Aggregation(#[from] AggregationError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ImputeError>;
