//! Tracing subscriber setup.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::cli::Command;
use super::config::TuiConfig;

fn env_filter(config: &TuiConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs to the configured file so output does not land on the alternate screen.
fn init_file_logging(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    // Don't fail if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Logs to stderr, leaving stdout for command output.
fn init_stderr_logging(config: &TuiConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Installs the subscriber `command` needs, then records the loaded config.
///
/// The TUI logs to the configured file; `replay` logs to stderr.
pub fn init_logging(command: &Command, config: &TuiConfig) -> Result<()> {
    match command {
        Command::Play => init_file_logging(config)?,
        Command::Replay { .. } => init_stderr_logging(config),
    }
    info!(
        log_file = %config.log_file().display(),
        log_filter = %config.log_filter(),
        show_help = *config.show_help(),
        "Configuration loaded"
    );
    Ok(())
}
