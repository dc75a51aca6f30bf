//! Logging configuration using tracing
//!
//! Everything goes to a daily rolling file so the terminal UI is never
//! written over.

use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "MEDIASHELF_LOG";

const LOG_FILE: &str = "mediashelf.log";
const DEFAULT_FILTER: &str = "mediashelf=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/mediashelf/logs/`.
/// Log level is controlled by the `MEDIASHELF_LOG` environment variable.
///
/// # Examples
/// ```bash
/// MEDIASHELF_LOG=debug mediashelf
/// MEDIASHELF_LOG=mediashelf::store=trace mediashelf films
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()?;

    tracing::info!("mediashelf {} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Default to mediashelf=info, allow override via MEDIASHELF_LOG
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Directory the rolling log files live in
pub fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("mediashelf").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory() {
        let dir = log_directory();
        assert!(dir.ends_with("mediashelf/logs"));
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(DEFAULT_FILTER.parse::<EnvFilter>().is_ok());
    }
}
