//! GeoJSON output of imputed lines.

use std::{fs::File, io::BufWriter, path::Path};

use anyhow::{Context, Result};
use geo::LineString;
use serde_json::{json, Map, Value};

/// Wrap a (lon, lat) line as a GeoJSON Feature with the given properties.
pub fn line_feature(line: &LineString<f64>, properties: Map<String, Value>) -> Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "LineString",
            "coordinates": line.coords().map(|c| [c.x, c.y]).collect::<Vec<_>>(),
        },
        "properties": properties,
    })
}

/// Write a JSON value to `path`, pretty-printed.
pub fn write_json(path: &Path, value: &Value) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[io::geojson] Failed to create file: {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)
        .with_context(|| format!("[io::geojson] Failed to write JSON to {}", path.display()))
}
