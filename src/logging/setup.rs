// Tracing subscriber setup.
// Writes to a rolling file because the terminal belongs to the UI.

use std::fs;

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::error::{PostieError, Result};

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "POSTIE_LOG";

/// Rotated log files kept on disk.
const MAX_LOG_FILES: usize = 4;

/// Initialize the global subscriber. Keep the returned guard alive until exit
/// so buffered lines get flushed.
pub fn init_logging(config: &Config) -> Result<WorkerGuard> {
    let dir = config.resolved_log_dir();
    fs::create_dir_all(&dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("postie")
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(&dir)
        .map_err(|e| {
            PostieError::Config(format!("cannot open log dir {}: {}", dir.display(), e))
        })?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => level_filter(&config.log_level)?,
    };

    let file = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    Registry::default()
        .with(filter)
        .with(file)
        .try_init()
        .map_err(|e| PostieError::Other(e.to_string()))?;

    info!(dir = %dir.display(), "logging initialized");
    Ok(guard)
}

/// Build a filter from a config level string such as `info` or `postie=debug`.
pub fn level_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level)
        .map_err(|e| PostieError::Config(format!("invalid log level {:?}: {}", level, e)))
}
