//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the restaurant ordering client
//! and the REST backend. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::envelope`]**: The `{ success, statusCode, data }` wrapper every response uses
//!   - **[`dto::auth`]**: Login, registration and token refresh DTOs
//!   - **[`dto::menu`]**: Categories and dishes
//!   - **[`dto::cart`]**, **[`dto::order`]**, **[`dto::payment`]**, **[`dto::promo`]**
//!   - **[`dto::user`]**, **[`dto::contact`]**
//! - **[`utils`]**: Shared formatting helpers
//!
//! ## Wire Format
//!
//! The backend speaks camelCase JSON, so every DTO carries
//! `#[serde(rename_all = "camelCase")]`:
//!
//! ```rust
//! use shared::dto::auth::LoginRequest;
//!
//! let request = LoginRequest {
//!     email: "alice@example.com".to_string(),
//!     password: "secret".to_string(),
//! };
//! let json = serde_json::to_string(&request).unwrap();
//! assert_eq!(json, r#"{"email":"alice@example.com","password":"secret"}"#);
//! ```
//!
//! Optional fields are omitted from JSON when `None`.

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where everything is public API
pub use dto::*;
pub use utils::*;
