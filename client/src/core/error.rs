//! # Common Error Types
//!
//! Consolidated error handling for the restaurant API client.
//!
//! This module provides a centralized error type [`AppError`] that covers every
//! failure a caller of the API layer can observe.
//!
//! ## Error Categories
//!
//! - **Network**: transport-level failure, no response received (connection
//!   refused, DNS failure, timeout)
//! - **Http**: a non-2xx response the interceptor does not recover from
//! - **Api**: a 2xx response whose envelope reports `success: false`
//! - **Auth**: the token refresh failed, or the retried request was still 401
//! - **Decode**: a 2xx body that is not a valid envelope for the expected type
//! - **Validation**: wrapper input rejected before any request is sent
//! - **Config**: missing or invalid configuration
//!
//! ## Propagation
//!
//! `Network` and `Http` errors reach the caller unchanged. 401 responses never
//! surface as `Http`: they are either resolved by a refresh-and-retry cycle
//! (the caller sees success) or converted into `Auth`. Nothing else is
//! retried.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use restaurant_client::core::error::{AppError, AuthError};
//!
//! fn describe(err: &AppError) -> &'static str {
//!     match err {
//!         AppError::Auth(AuthError::RetryUnauthorized) => "still unauthorized",
//!         AppError::Auth(_) => "session expired",
//!         AppError::Network(_) => "offline",
//!         _ => "request failed",
//!     }
//! }
//! ```

use thiserror::Error;

/// Authentication failures that end the refresh-and-retry cycle.
///
/// `Clone` so a single refresh outcome can be handed to every request that
/// waited on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The refresh endpoint rejected the refresh token (usually 401 or 403).
    #[error("refresh token rejected (HTTP {status})")]
    RefreshRejected { status: u16 },

    /// The refresh endpoint was unreachable or answered with something unusable.
    #[error("token refresh failed: {0}")]
    RefreshFailed(String),

    /// A 401 arrived but there is no refresh token to recover with.
    #[error("no refresh token available")]
    MissingRefreshToken,

    /// The request was retried once with a fresh token and got 401 again.
    #[error("request still unauthorized after token refresh")]
    RetryUnauthorized,
}

/// Error type for every operation of the API client.
#[derive(Debug, Error)]
pub enum AppError {
    /// No response was received.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response not handled by the auth interceptor.
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// The envelope reported `success: false`.
    #[error("API error {status_code}: {message}")]
    Api { status_code: u16, message: String },

    /// Unrecoverable authentication failure. Stored tokens have been handled
    /// according to [`AuthError`]'s variant.
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// The response body could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Input rejected before sending.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// HTTP-ish status associated with the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            AppError::Api { status_code, .. } => Some(*status_code),
            AppError::Auth(AuthError::RefreshRejected { status }) => Some(*status),
            AppError::Auth(_) => Some(401),
            AppError::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the caller should treat the session as gone.
    pub fn is_auth(&self) -> bool {
        matches!(self, AppError::Auth(_))
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
