use std::{path::Path, sync::Arc};

use geo::LineString;
use hexgrid::{GridCell, GridIndex};
use tracing::{debug, info};

use crate::{
    aggregate::{aggregate, read_observations, TransitionRow},
    config::ImputerConfig,
    error::{ImputeError, Result},
    geometry::{to_line, PositionMode},
    graph::CellGraph,
    io::csv::read_observations_csv,
    spatial::SpatialIndex,
};

/// A loaded dataset: the cell graph, its spatial index, and the settings it was built with.
///
/// Immutable after construction, so any number of threads may query it at once.
/// Reloading means building a new `LoadedDataset`.
#[derive(Debug)]
pub struct LoadedDataset {
    config: ImputerConfig,
    grid: Arc<dyn GridIndex>,
    graph: CellGraph,
    spatial: SpatialIndex,
    resolution: Option<u8>, // None when the graph is empty
}

impl LoadedDataset {
    /// Read raw observations from a CSV file, aggregate them and build the graph.
    pub fn load(path: &Path, config: ImputerConfig, grid: Arc<dyn GridIndex>) -> Result<Self> {
        config.validate()?;
        info!("[load] reading observations from {}", path.display());

        let table = read_observations_csv(path)?;
        let observations = read_observations(&table, &config.schema, &config.excluded)?;
        let rows = aggregate(observations, grid.as_ref(), config.resolution)?;
        Self::from_rows(&rows, config, grid)
    }

    /// Build from transition rows produced by any aggregator.
    pub fn from_rows(rows: &[TransitionRow], config: ImputerConfig, grid: Arc<dyn GridIndex>) -> Result<Self> {
        config.validate()?;

        let graph = CellGraph::build(rows, grid.as_ref(), config.max_gap)?;
        let spatial = SpatialIndex::build(graph.nodes());
        let resolution = graph.nodes().first()
            .map(|node| grid.resolution_of(node.cell))
            .transpose()?;

        info!(
            "[load] {} rows -> {} nodes, {} edges (resolution={resolution:?})",
            rows.len(), graph.node_count(), graph.edge_count()
        );
        Ok(Self { config, grid, graph, spatial, resolution })
    }

    /// Get the configuration used to build this dataset.
    #[inline] pub fn config(&self) -> &ImputerConfig { &self.config }

    /// Get the cell graph.
    #[inline] pub fn graph(&self) -> &CellGraph { &self.graph }

    /// Get the spatial index over node centroids.
    #[inline] pub fn spatial_index(&self) -> &SpatialIndex { &self.spatial }

    /// Get the grid resolution inferred from the graph's cells, if any.
    #[inline] pub fn resolution(&self) -> Option<u8> { self.resolution }

    /// Get every edge as `(node_a, node_b, weight, course)`.
    pub fn edge_list(&self) -> Vec<(GridCell, GridCell, f64, f64)> {
        self.graph.edges().iter()
            .map(|edge| (edge.a, edge.b, edge.weight, edge.course))
            .collect()
    }

    /// Resolve the cell sequence bridging a gap between two positions.
    ///
    /// Each endpoint's cell is used directly when it is a graph node and is
    /// otherwise snapped to the node nearest its centroid. The least-cost path
    /// between the two graph nodes is returned, with each snapped endpoint's own
    /// cell stitched onto its end (such cells need not be adjacent to the path).
    pub fn cell_path(&self, origin_lon: f64, origin_lat: f64, destination_lon: f64, destination_lat: f64) -> Result<Vec<GridCell>> {
        let resolution = self.resolution.ok_or(ImputeError::EmptyGraph)?;
        let origin = self.grid.cell_at(origin_lat, origin_lon, resolution)?;
        let destination = self.grid.cell_at(destination_lat, destination_lon, resolution)?;

        let source = self.snap(origin)?;
        let target = self.snap(destination)?;
        let (source_cell, target_cell) = (self.graph.node(source).cell, self.graph.node(target).cell);

        let searched = self.graph.shortest_path(source, target)
            .ok_or(ImputeError::NoPath { from: source_cell, to: target_cell })?;
        debug!("[resolve] {source_cell} -> {target_cell}: {} cells", searched.len());

        let mut cells = Vec::with_capacity(searched.len() + 2);
        if source_cell != origin { cells.push(origin) }
        cells.extend(searched);
        if target_cell != destination { cells.push(destination) }
        Ok(cells)
    }

    /// Node index for a cell: the cell itself if present, otherwise the node nearest its centroid.
    fn snap(&self, cell: GridCell) -> Result<usize> {
        if let Some(idx) = self.graph.index_of(cell) { return Ok(idx) }

        let centroid = self.grid.centroid_of(cell)?;
        let idx = self.spatial.nearest(centroid).ok_or(ImputeError::EmptyGraph)?;
        debug!("[resolve] snapped {cell} to {}", self.graph.node(idx).cell);
        Ok(idx)
    }

    /// Convert a cell sequence to a line under the given placement mode.
    pub fn to_line(&self, cells: &[GridCell], mode: PositionMode) -> Result<LineString<f64>> {
        to_line(cells, mode, &self.graph, self.grid.as_ref())
    }

    /// Impute the gap between two positions as a line through cell centroids.
    pub fn fill_gap(&self, origin_lon: f64, origin_lat: f64, destination_lon: f64, destination_lat: f64) -> Result<LineString<f64>> {
        let cells = self.cell_path(origin_lon, origin_lat, destination_lon, destination_lat)?;
        self.to_line(&cells, PositionMode::Centroid)
    }

    /// Impute the gap between two positions as a line through measured cell positions.
    pub fn fill_gap_weighted(&self, origin_lon: f64, origin_lat: f64, destination_lon: f64, destination_lat: f64) -> Result<LineString<f64>> {
        let cells = self.cell_path(origin_lon, origin_lat, destination_lon, destination_lat)?;
        self.to_line(&cells, PositionMode::Measured)
    }
}
