//! Logging configuration from environment variables

use std::path::PathBuf;

use lib_utils::envs::{get_env_flag, get_env_or};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "restaurant_client=info,warn";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// File name prefix of the rolling log
    pub file_prefix: String,
    /// Log level filter (e.g., "restaurant_client=debug,info")
    pub log_level: String,
    /// Mirror log output to stderr
    pub log_to_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            file_prefix: "restaurant-client.log".to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_to_stderr: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_dir: PathBuf::from(get_env_or("RESTAURANT_LOG_DIR", "logs")),
            file_prefix: defaults.file_prefix,
            log_level: get_env_or("RUST_LOG", DEFAULT_LOG_LEVEL),
            log_to_stderr: get_env_flag("RESTAURANT_LOG_STDERR", false),
        }
    }

    /// Full path of today's log file prefix (the appender adds the date suffix)
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(&self.file_prefix)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
