//! Logging configuration using the tracing ecosystem.
//!
//! Logs go to a daily-rotated file so that stdout carries only command
//! output. The level is taken from `RUST_LOG`.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Default log level if RUST_LOG is not set.
const DEFAULT_LOG_FILTER: &str = "coolover=info,warn";

/// Initialize the logging system.
///
/// Log files live in the platform-specific local data directory:
/// - Linux: `~/.local/share/coolover/logs/`
/// - macOS: `~/Library/Application Support/coolover/logs/`
/// - Windows: `C:\Users\<User>\AppData\Local\coolover\logs\`
///
/// The returned guard flushes buffered records when dropped; keep it alive
/// until the process exits.
///
/// # Errors
///
/// Returns an error if the log directory cannot be determined or created,
/// or if a global subscriber is already set.
pub fn init() -> anyhow::Result<WorkerGuard> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "coolover.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter);

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "coolover starting");
    tracing::debug!(log_dir = %log_dir.display(), "Log directory");

    Ok(guard)
}

/// Get the log directory path.
fn get_log_directory() -> anyhow::Result<PathBuf> {
    let base_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(base_dir.join("coolover").join("logs"))
}
