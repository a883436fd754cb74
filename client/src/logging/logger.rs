//! File-based logging initialization

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use super::config::{LogConfig, DEFAULT_LOG_LEVEL};
use crate::core::error::{AppError, Result};

/// Initialize the logging system
///
/// Sets up:
/// - Daily log rotation under `config.log_dir`
/// - Non-blocking writes so logging never stalls a request
/// - An optional human-readable stderr layer
///
/// Keep the returned guard alive for the lifetime of the program; dropping it
/// flushes and stops the background writer.
///
/// # Errors
///
/// Fails if the log directory cannot be created or a global subscriber is
/// already installed.
pub fn init(config: &LogConfig) -> Result<WorkerGuard> {
    fs::create_dir_all(&config.log_dir).map_err(|e| {
        AppError::Config(format!(
            "Failed to create log directory {}: {}",
            config.log_dir.display(),
            e
        ))
    })?;

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, &config.file_prefix);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI codes in log files

    let stderr_layer = config.log_to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .boxed()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| AppError::Config(format!("Failed to install log subscriber: {}", e)))?;

    tracing::info!(
        log_file = %config.log_file().display(),
        log_level = %config.log_level,
        stderr = config.log_to_stderr,
        "Logging initialized"
    );

    Ok(guard)
}
