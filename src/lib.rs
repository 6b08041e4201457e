#![doc = "HABIT public API: H3 aggregation-based imputation of trajectory gaps"]
mod aggregate;
mod config;
mod dataset;
mod error;
mod geometry;
mod graph;
mod imputer;
pub mod io;
mod spatial;
#[cfg(test)]
mod testing;

#[doc(inline)]
pub use aggregate::{aggregate, read_observations, Observation, TransitionRow};

#[doc(inline)]
pub use config::{ImputerConfig, Schema};

#[doc(inline)]
pub use dataset::LoadedDataset;

#[doc(inline)]
pub use error::{AggregationError, ImputeError, Result};

#[doc(inline)]
pub use geometry::PositionMode;

#[doc(inline)]
pub use graph::{edge_weight, CellGraph, Edge, Node};

#[doc(inline)]
pub use imputer::Imputer;

#[doc(inline)]
pub use spatial::SpatialIndex;

#[doc(inline)]
pub use hexgrid::{GridCell, GridError, GridIndex, H3Grid};
