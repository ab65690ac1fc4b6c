//! File logging. The terminal belongs to the TUI, so nothing is written to stdout.

use std::fs;

use color_eyre::eyre::WrapErr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

pub const LOG_FILE: &str = "penny.log";

/// Installs the global subscriber. Keep the guard alive until exit so
/// buffered lines are flushed.
pub fn init(config: &Config) -> color_eyre::Result<WorkerGuard> {
    let dir = config.log_dir();
    fs::create_dir_all(&dir).wrap_err_with(|| format!("creating log dir {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("installing log subscriber: {e}"))?;

    tracing::info!(dir = %dir.display(), "logging initialised");
    Ok(guard)
}
