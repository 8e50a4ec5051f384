//! js2x — turn annotated JavaScript sources into documentation.
//!
//! Every job in the configuration file produces one document:
//!
//! - **README**: full reference with navigation links, headings and fenced examples
//! - **LIBRARY**: condensed listing of doc comments and function bodies
//! - **QUICK-START**: the listing plus unfenced usage examples
//!
//! Each input line is classified, rendered for the job's target and logged
//! to a CSV summary shared by the whole run.

mod audit;
mod classify;
mod config;
mod error;
mod logging;
mod model;
mod render;
mod runner;
mod slug;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "js2x",
    about = "Generate README, library and quick-start documents from annotated JavaScript"
)]
struct Cli {
    /// Configuration file (JSON with `summary` and `processes`)
    #[arg(short = 'c', long, default_value = config::DEFAULT_CONFIG)]
    config: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config_path: PathBuf = config::expand_path(&cli.config);
    tracing::debug!(config = %config_path.display(), "loading configuration");

    let cfg = config::Config::load(&config_path)?;
    let jobs = cfg.jobs()?;
    runner::run(jobs, &cfg.summary_path())?;
    Ok(())
}
