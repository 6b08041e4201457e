pub mod edges;
pub mod impute;

use anyhow::{Context, Result};
use habit::ImputerConfig;

use crate::cli::Cli;

/// Resolve the effective configuration: file (or defaults), then command-line overrides.
pub(crate) fn load_config(cli: &Cli) -> Result<ImputerConfig> {
    let mut config = match &cli.config {
        Some(path) => ImputerConfig::load(path)
            .with_context(|| format!("[config] Failed to load {}", path.display()))?,
        None => ImputerConfig::default(),
    };
    if let Some(resolution) = cli.resolution { config.resolution = resolution }
    if let Some(max_gap) = cli.max_gap { config.max_gap = max_gap }
    config.validate().context("[config] Invalid settings")?;
    Ok(config)
}
