use clap::Parser;
use std::path::PathBuf;

/// Runs xpas_algs with every algorithm variant on every dataset under `time -v`.
#[derive(Parser)]
#[command()]
pub struct Args {
    /// TOML file overriding the built-in datasets and tool paths
    pub config_file: Option<PathBuf>,

    /// Print the commands without running them
    #[arg(long)]
    pub dry_run: bool,
}
