use anyhow::{Context, Result};
use habit::{io::csv::write_edge_list, Imputer};
use tracing::info;

use crate::cli::{Cli, EdgesArgs};
use crate::commands::load_config;

pub fn run(cli: &Cli, args: &EdgesArgs) -> Result<()> {
    let imputer = Imputer::new(load_config(cli)?);
    let dataset = imputer.load(&args.data)
        .with_context(|| format!("[edges] Failed to load {}", args.data.display()))?;

    let edges = dataset.edge_list();
    write_edge_list(&args.output, &edges)?;
    info!("[edges] wrote {} edges to {}", edges.len(), args.output.display());
    Ok(())
}
