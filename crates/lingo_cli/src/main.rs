//! Lingo CLI
//!
//! Resolve messages from a translation file the same way a host would, and
//! report locale coverage.

mod check;
mod cli;
mod config;
mod render;
mod resolve;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use lingo_i18n::TranslationStore;
use tracing_subscriber::EnvFilter;

use crate::check::CoverageReport;
use crate::cli::{Cli, Command};
use crate::config::LingoConfig;

/// Environment variable holding a tracing filter, e.g. `LINGO_LOG=lingo_i18n=debug`.
const LOG_ENV: &str = "LINGO_LOG";

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let config = LingoConfig::load(cli.config.as_deref(), &cwd)?;
    let path = config.translation_file(cli.file.as_deref(), cli.data_dir.as_deref())?;

    let store = TranslationStore::global();
    let table = store
        .load_path(&path)
        .with_context(|| format!("Failed to load translations from {}", path.display()))?;

    match cli.command {
        Command::Resolve(args) => {
            let format = args.format.unwrap_or(config.output.format);
            println!("{}", resolve::run(&args, &table, format));
            Ok(ExitCode::SUCCESS)
        }
        Command::Check(args) => {
            let report = CoverageReport::from_table(&table);
            print!("{}", report.render());
            if args.strict && !report.is_clean() {
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
