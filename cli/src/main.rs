mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::{edges, impute};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise -v enables debug and -vv trace. Logs go to stderr.
    let default_level = match cli.verbose { 0 => "info", 1 => "debug", _ => "trace" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Impute(args) => impute::run(&cli, args),
        Commands::Edges(args) => edges::run(&cli, args),
    }
}
