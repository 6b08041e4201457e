use anyhow::{Context, Result};
use habit::{
    io::geojson::{line_feature, write_json},
    Imputer, PositionMode,
};
use serde_json::{json, Map};
use tracing::info;

use crate::cli::{Cli, ImputeArgs};
use crate::commands::load_config;

pub fn run(cli: &Cli, args: &ImputeArgs) -> Result<()> {
    let imputer = Imputer::new(load_config(cli)?);
    let dataset = imputer.load(&args.data)
        .with_context(|| format!("[impute] Failed to load {}", args.data.display()))?;

    let ((origin_lon, origin_lat), (destination_lon, destination_lat)) = (args.origin, args.destination);
    let cells = dataset.cell_path(origin_lon, origin_lat, destination_lon, destination_lat)
        .context("[impute] Failed to resolve a path")?;

    let mode = if args.weighted { PositionMode::Measured } else { PositionMode::Centroid };
    let line = dataset.to_line(&cells, mode)?;
    info!("[impute] {} cells between {:?} and {:?}", cells.len(), args.origin, args.destination);

    let mut properties = Map::new();
    properties.insert("mode".into(), json!(if args.weighted { "measured" } else { "centroid" }));
    properties.insert("resolution".into(), json!(dataset.resolution()));
    properties.insert("cells".into(), json!(cells.iter().map(ToString::to_string).collect::<Vec<_>>()));
    let feature = line_feature(&line, properties);

    match &args.output {
        Some(path) => write_json(path, &feature)?,
        None => println!("{}", serde_json::to_string_pretty(&feature)?),
    }
    Ok(())
}
