//! CSV reading operations.

use std::{fs::File, path::Path};

use polars::{frame::DataFrame, io::SerReader, prelude::CsvReadOptions};

use crate::error::AggregationError;

/// Reads a CSV file of raw observations (with a header row) into a Polars DataFrame.
/// Column types are inferred from the whole file.
pub fn read_observations_csv(path: &Path) -> Result<DataFrame, AggregationError> {
    let file = File::open(path)?;
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .into_reader_with_file_handle(file)
        .finish()?;
    Ok(df)
}
