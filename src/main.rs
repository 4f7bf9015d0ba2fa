use clap::Parser;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;
mod commands;
mod config;
mod hook;
mod observability;

use cli::{Cli, Commands};

fn setup_logging() -> Result<()> {
    // Log to a file, not stderr: stderr is reserved for hook diagnostics
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gg-hooks")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("gg-hooks.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG env var takes precedence over the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging is best-effort: hook dispatch must still run without it
    if let Err(err) = setup_logging() {
        eprintln!("gg-hooks: logging disabled: {err:#}");
    }

    match cli.command {
        Commands::Hook { action } => commands::hook::run(action),
        Commands::Doctor => commands::doctor::run(),
        Commands::Completions { shell } => commands::completions::run(shell),
    }
}
