use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

/// Trajectory gap imputation over an H3 transition graph
#[derive(Parser, Debug)]
#[command(name = "habit", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// TOML configuration file (resolution, max_gap, excluded, schema)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Grid resolution, overriding the configuration file
    #[arg(long, global = true)]
    pub resolution: Option<u8>,

    /// Maximum trusted grid distance between consecutive cells, overriding the configuration file
    #[arg(long, global = true)]
    pub max_gap: Option<u32>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Impute the path between two positions and write it as GeoJSON
    Impute(ImputeArgs),

    /// Write the transition graph's edge list as CSV
    Edges(EdgesArgs),
}

#[derive(Args, Debug)]
pub struct ImputeArgs {
    /// Input CSV of raw observations
    #[arg(value_hint = ValueHint::FilePath)]
    pub data: PathBuf,

    /// Last known position before the gap, as LON,LAT
    #[arg(long, value_parser = parse_lon_lat, allow_hyphen_values = true)]
    pub origin: (f64, f64),

    /// First known position after the gap, as LON,LAT
    #[arg(long, value_parser = parse_lon_lat, allow_hyphen_values = true)]
    pub destination: (f64, f64),

    /// Place vertices at median observed positions instead of cell centroids
    #[arg(long)]
    pub weighted: bool,

    /// Output GeoJSON file (stdout if omitted)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct EdgesArgs {
    /// Input CSV of raw observations
    #[arg(value_hint = ValueHint::FilePath)]
    pub data: PathBuf,

    /// Output CSV file
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: PathBuf,
}

/// Parse a `LON,LAT` pair in degrees.
fn parse_lon_lat(s: &str) -> Result<(f64, f64), String> {
    let (lon, lat) = s.split_once(',')
        .ok_or_else(|| format!("expected LON,LAT, got '{s}'"))?;
    let lon = lon.trim().parse::<f64>().map_err(|e| format!("invalid longitude '{lon}': {e}"))?;
    let lat = lat.trim().parse::<f64>().map_err(|e| format!("invalid latitude '{lat}': {e}"))?;
    Ok((lon, lat))
}
