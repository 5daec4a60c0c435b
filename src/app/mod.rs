pub mod commands;
pub mod io;
pub mod logging_system;

pub use logging_system::{LogDirective, LoggingError, LoggingSystem, setup_logging};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::config::Config;

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Runs one batch step described by `config`.
pub fn run(config: &Config) -> anyhow::Result<()> {
    if let Err(e) = setup_logging(config.log_level, config.log_format, &config.log_directives) {
        eprintln!("Warning: {e}, continuing without structured logs");
    }

    info!(
        version = %get_version(),
        command = config.command.name(),
        data_dir = %config.data_dir.display(),
        "starting showcase-curator"
    );

    let settings = config
        .settings()
        .context("failed to load curator settings")?;
    commands::execute(config, &settings)
        .with_context(|| format!("{} step failed", config.command.name()))?;

    info!(command = config.command.name(), "done");
    Ok(())
}

/// Parses the process arguments and runs. Help and version output exit here.
pub fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    run(&config)
}
