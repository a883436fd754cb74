//! # Core Abstractions
//!
//! - **[`error`]**: Client error types (`AppError`, `AuthError`, `Result<T>`)
//! - **[`service`]**: `ApiService` trait for dependency injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use restaurant_client::config::ClientConfig;
//! use restaurant_client::core::ApiService;
//! use restaurant_client::services::api::ApiClient;
//!
//! let api: Arc<dyn ApiService> =
//!     Arc::new(ApiClient::new(ClientConfig::new("https://api.example.com"))?);
//! # Ok::<(), restaurant_client::AppError>(())
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, AuthError, Result};
pub use service::ApiService;
