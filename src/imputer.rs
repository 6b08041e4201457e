use std::{path::Path, sync::Arc};

use geo::LineString;
use hexgrid::{GridCell, GridIndex, H3Grid};
use parking_lot::RwLock;

use crate::{
    aggregate::TransitionRow,
    config::ImputerConfig,
    dataset::LoadedDataset,
    error::{ImputeError, Result},
};

/// Long-lived owner of the current dataset.
///
/// Loads build a fresh `LoadedDataset` without holding the lock and swap it in
/// on success, so in-flight queries keep the dataset they started with and a
/// failed load leaves the previous one in place.
#[derive(Debug)]
pub struct Imputer {
    config: ImputerConfig,
    grid: Arc<dyn GridIndex>,
    dataset: RwLock<Option<Arc<LoadedDataset>>>,
}

impl Imputer {
    /// Create an imputer over the H3 grid.
    pub fn new(config: ImputerConfig) -> Self {
        Self::with_grid(config, Arc::new(H3Grid))
    }

    /// Create an imputer over a custom grid.
    pub fn with_grid(config: ImputerConfig, grid: Arc<dyn GridIndex>) -> Self {
        Self { config, grid, dataset: RwLock::new(None) }
    }

    /// Get the configuration applied to every load.
    #[inline] pub fn config(&self) -> &ImputerConfig { &self.config }

    /// Load raw observations from a CSV file and make them the current dataset.
    pub fn load(&self, path: &Path) -> Result<Arc<LoadedDataset>> {
        let dataset = LoadedDataset::load(path, self.config.clone(), Arc::clone(&self.grid))?;
        Ok(self.replace(dataset))
    }

    /// Build from pre-aggregated rows and make them the current dataset.
    pub fn load_rows(&self, rows: &[TransitionRow]) -> Result<Arc<LoadedDataset>> {
        let dataset = LoadedDataset::from_rows(rows, self.config.clone(), Arc::clone(&self.grid))?;
        Ok(self.replace(dataset))
    }

    fn replace(&self, dataset: LoadedDataset) -> Arc<LoadedDataset> {
        let dataset = Arc::new(dataset);
        *self.dataset.write() = Some(Arc::clone(&dataset));
        dataset
    }

    /// Get the current dataset, or `EmptyGraph` if nothing has been loaded.
    pub fn dataset(&self) -> Result<Arc<LoadedDataset>> {
        self.dataset.read().clone().ok_or(ImputeError::EmptyGraph)
    }

    /// See [`LoadedDataset::cell_path`].
    pub fn cell_path(&self, origin_lon: f64, origin_lat: f64, destination_lon: f64, destination_lat: f64) -> Result<Vec<GridCell>> {
        self.dataset()?.cell_path(origin_lon, origin_lat, destination_lon, destination_lat)
    }

    /// See [`LoadedDataset::fill_gap`].
    pub fn fill_gap(&self, origin_lon: f64, origin_lat: f64, destination_lon: f64, destination_lat: f64) -> Result<LineString<f64>> {
        self.dataset()?.fill_gap(origin_lon, origin_lat, destination_lon, destination_lat)
    }

    /// See [`LoadedDataset::fill_gap_weighted`].
    pub fn fill_gap_weighted(&self, origin_lon: f64, origin_lat: f64, destination_lon: f64, destination_lat: f64) -> Result<LineString<f64>> {
        self.dataset()?.fill_gap_weighted(origin_lon, origin_lat, destination_lon, destination_lat)
    }

    /// See [`LoadedDataset::edge_list`].
    pub fn edge_list(&self) -> Result<Vec<(GridCell, GridCell, f64, f64)>> {
        Ok(self.dataset()?.edge_list())
    }
}
