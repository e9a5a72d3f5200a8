//! Tracing subscriber setup.
//!
//! While the visualizer owns the terminal, logs go to a file through a
//! non-blocking writer. Headless commands log to stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::LogLevel;

/// Environment variable holding a log filter.
pub const LOG_ENV: &str = "SORTSCOPE_LOG";

/// Log file name inside the data directory.
pub const LOG_FILE: &str = "sortscope.log";

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to a file.
    File(PathBuf),
    /// Write to stderr.
    Stderr,
}

/// Keeps the non-blocking writer alive. Dropping it flushes pending lines.
pub struct LogGuard {
    _guard: Option<WorkerGuard>,
}

/// Picks the filter directive: the flag, then `SORTSCOPE_LOG`, then `RUST_LOG`,
/// then `default`.
pub fn filter_directive(
    level: Option<LogLevel>,
    sortscope_log: Option<String>,
    rust_log: Option<String>,
    default: LogLevel,
) -> String {
    if let Some(level) = level {
        return level.as_filter_str().to_string();
    }
    sortscope_log
        .into_iter()
        .chain(rust_log)
        .find(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| default.as_filter_str().to_string())
}

/// Builds the filter, falling back to `default` on a malformed directive.
pub fn build_filter(directive: &str, default: LogLevel) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("Ignoring invalid log filter '{directive}': {e}");
        EnvFilter::new(default.as_filter_str())
    })
}

/// Default log file: `<data dir>/sortscope/sortscope.log`.
pub fn default_log_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("sortscope")
        .join(LOG_FILE)
}

/// Installs the global subscriber.
pub fn init(target: &LogTarget, filter: EnvFilter) -> Result<LogGuard> {
    match target {
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file);

            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_names(true);

            tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .try_init()
                .context("failed to install log subscriber")?;

            Ok(LogGuard {
                _guard: Some(guard),
            })
        }
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init()
                .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

            Ok(LogGuard { _guard: None })
        }
    }
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
