//! # Restaurant Ordering API Client - Library Root
//!
//! Client-side API layer for the restaurant ordering application: a shared
//! HTTP client with an auth interceptor, plus thin typed wrappers for every
//! REST resource the app uses (auth, categories, dishes, cart, user, payment,
//! promo, contact, orders).
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  services::api::{auth, cart, dishes, orders, ...}        │  thin wrappers
//! ├──────────────────────────────────────────────────────────┤
//! │  ApiClient (auth interceptor)                            │
//! │    request phase:  attach Bearer token from TokenStore   │
//! │    response phase: unwrap envelope, 401 → refresh → retry│
//! │      └─ RefreshCoordinator (one refresh in flight)       │
//! ├──────────────────────────────────────────────────────────┤
//! │  HttpClient (base URL, 15s timeout, JSON headers)        │  reqwest
//! └──────────────────────────────────────────────────────────┘
//!          │ HTTP                          │ ClientEvent
//!          ▼                               ▼
//!   ┌─────────────┐                 ┌──────────────┐
//!   │ REST backend│                 │  UI layer    │
//!   └─────────────┘                 └──────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **config**: Base endpoint and timeout, loaded from the environment
//! - **core**: Error types and the `ApiService` trait
//! - **events**: Session lifecycle events for the UI
//! - **logging**: `tracing` subscriber setup
//! - **services**: The API client and resource wrappers
//!
//! ## Usage
//!
//! ```rust,no_run
//! use restaurant_client::config::ClientConfig;
//! use restaurant_client::events::event_channel;
//! use restaurant_client::services::api::{self, ApiClient};
//!
//! # async fn demo() -> restaurant_client::Result<()> {
//! let (events_tx, _events_rx) = event_channel();
//! let client = ApiClient::builder(ClientConfig::new("https://api.example.com"))
//!     .events(events_tx)
//!     .build()?;
//!
//! api::auth::login(&client, "guest@example.com".into(), "secret123".into()).await?;
//! let cart = api::cart::get_cart(&client, 42).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p restaurant-client
//! ```
//!
//! Integration tests in `tests/` run the client against `wiremock` servers.

pub mod config;
pub mod core;
pub mod events;
pub mod logging;
pub mod services;

// Re-export commonly used types for convenience
pub use config::ClientConfig;
pub use crate::core::{ApiService, AppError, AuthError, Result};
pub use events::ClientEvent;
pub use services::api::ApiClient;
