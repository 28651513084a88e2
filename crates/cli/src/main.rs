//! Stockroom CLI — console menu for the in-memory inventory tracker.
//!
//! Two modes:
//! - **Interactive**: `stockroom` on a terminal — line editing via rustyline
//! - **Pipe mode**: `stockroom < script.txt` — menu answers read line by line
//!
//! `stockroom init-config [PATH]` writes a commented default configuration.

mod commands;
mod format;
mod menu;
mod parse;
mod repl;
mod state;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::ArgMatches;
use stockroom_executor::{OutputFormat, StockroomConfig, CONFIG_FILE_NAME};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use state::SessionState;

fn main() -> ExitCode {
    init_tracing();

    let matches = build_cli().get_matches();
    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(target: "stockroom::cli", error = %e, "Fatal error");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so they never interleave with the menu on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    if let Some(("init-config", sub)) = matches.subcommand() {
        let path = sub
            .get_one::<String>("path")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
        return init_config(&path);
    }

    let config = load_config(matches)?;
    let mode = resolve_mode(matches, config.output);
    info!(target: "stockroom::cli", ?mode, "Starting session");

    let mut state = SessionState::from_config(&config, mode);
    if std::io::stdin().is_terminal() {
        repl::run_interactive(&mut state)
    } else {
        repl::run_pipe(&mut state)
    }
}

fn init_config(path: &Path) -> anyhow::Result<()> {
    if StockroomConfig::write_default_if_missing(path)? {
        println!("Wrote default configuration to {}", path.display());
    } else {
        println!("{} already exists, leaving it unchanged", path.display());
    }
    Ok(())
}

/// An explicit `--config` must exist; the default file is optional.
fn load_config(matches: &ArgMatches) -> anyhow::Result<StockroomConfig> {
    match matches.get_one::<String>("config") {
        Some(path) => StockroomConfig::from_file(Path::new(path))
            .with_context(|| format!("cannot use --config {}", path)),
        None => Ok(StockroomConfig::load_or_default(Path::new(CONFIG_FILE_NAME))?),
    }
}

/// Command-line flags win over the config file.
fn resolve_mode(matches: &ArgMatches, configured: OutputFormat) -> OutputFormat {
    if matches.get_flag("json") {
        OutputFormat::Json
    } else if matches.get_flag("human") {
        OutputFormat::Human
    } else {
        configured
    }
}
