//! # Client Configuration
//!
//! Configuration for the HTTP Client Core, loaded from environment variables
//! once at process start and validated so a misconfigured client fails fast.
//!
//! ## Global Config Access
//!
//! ```rust,no_run
//! use restaurant_client::config::{client_config, init_config};
//!
//! init_config()?;
//! let api_url = &client_config()?.api_url;
//! # Ok::<(), restaurant_client::AppError>(())
//! ```

use std::sync::OnceLock;
use std::time::Duration;

use lib_utils::envs::get_env;

use crate::core::error::{AppError, Result};

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "RESTAURANT_API_URL";

/// Fixed timeout applied to every request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base endpoint of the REST API, without trailing slash
    /// (e.g. `https://api.example.com/api`).
    pub api_url: String,

    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Configuration for `api_url` with the default timeout.
    pub fn new(api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        Self {
            api_url: api_url.trim().trim_end_matches('/').to_string(),
            request_timeout: REQUEST_TIMEOUT,
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_url = get_env(API_URL_ENV)?;
        Ok(Self::new(api_url))
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        let rest = self
            .api_url
            .strip_prefix("https://")
            .or_else(|| self.api_url.strip_prefix("http://"))
            .ok_or_else(|| {
                AppError::Config(format!(
                    "{API_URL_ENV} must start with http:// or https://, got '{}'",
                    self.api_url
                ))
            })?;

        if rest.is_empty() || rest.starts_with('/') {
            return Err(AppError::Config(format!("{API_URL_ENV} has no host")));
        }

        if self.request_timeout.is_zero() {
            return Err(AppError::Config("Request timeout must be non-zero".to_string()));
        }

        Ok(())
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Initialize the global configuration from the environment.
///
/// # Errors
///
/// Returns an error if the environment is missing or invalid, or if the
/// config has already been initialized.
pub fn init_config() -> Result<&'static ClientConfig> {
    let config = ClientConfig::from_env()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))?;
    client_config()
}

/// Get a reference to the global configuration.
///
/// # Errors
///
/// Returns [`AppError::Config`] if [`init_config()`] has not been called yet.
pub fn client_config() -> Result<&'static ClientConfig> {
    CONFIG
        .get()
        .ok_or_else(|| AppError::Config("Config must be initialized with init_config() before use".to_string()))
}
