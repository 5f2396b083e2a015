mod algorithms;
mod cli;
mod config;
mod error;
mod runner;

use anyhow::Result;
use clap::Parser;
use config::BenchmarkSuiteConfig;
use runner::{RunMode, Runner};

fn main() -> Result<()> {
    env_logger::init();

    let args = cli::Args::parse();

    let suite_config = match &args.config_file {
        Some(config_file) => BenchmarkSuiteConfig::from_file(config_file)?,
        None => BenchmarkSuiteConfig::default(),
    };

    let mode = if args.dry_run {
        RunMode::DryRun
    } else {
        RunMode::Execute
    };

    Runner::new(&suite_config, mode).run()?;

    Ok(())
}
