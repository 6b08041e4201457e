//! File input and output around the imputation core.

pub mod csv;
pub mod geojson;
