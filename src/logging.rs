//! Logging infrastructure.
//!
//! Structured logging via `tracing`, written to the console and to a daily
//! rolling file under the platform data directory. Initialize once at
//! startup:
//!
//! ```no_run
//! adstat::logging::init().expect("Failed to initialize logging");
//! tracing::info!("started");
//! ```

use anyhow::{Context as _, Result};
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

/// Gets the log directory path based on platform conventions.
///
/// Linux: `~/.local/share/adstat/logs`, macOS:
/// `~/Library/Application Support/adstat/logs`, Windows:
/// `%APPDATA%/adstat/logs`.
pub fn get_log_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_dir().context("Failed to determine data directory")?;
    let log_dir = base_dir.join("adstat").join("logs");

    if !log_dir.exists() {
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;
    }

    Ok(log_dir)
}

/// Initializes the console and file logging layers.
///
/// The filter defaults to `info` and honours `RUST_LOG`. The file appender
/// rotates daily and keeps the last 10 files. Log lines go to stderr so
/// report output on stdout stays clean for piping.
///
/// # Errors
///
/// Returns error if the log directory cannot be created or the file
/// appender fails to build.
pub fn init() -> Result<()> {
    let log_dir = get_log_dir()?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(10)
        .filename_prefix("adstat")
        .filename_suffix("log")
        .build(&log_dir)
        .context("Failed to create log file appender")?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .context("Failed to create env filter")?;

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    let file_layer = fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .with_writer(file_appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    tracing::debug!("Logging initialized, log directory: {:?}", log_dir);

    Ok(())
}
