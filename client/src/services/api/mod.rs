//! # Backend API Client Module
//!
//! HTTP client for the restaurant ordering backend: the auth interceptor,
//! its collaborators, and one module of thin wrappers per REST resource.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs          - Module exports and documentation
//! ├── http.rs         - HTTP Client Core (base URL, timeout, default headers)
//! ├── client.rs       - ApiClient: request/response interceptor
//! ├── refresh.rs      - Coalescing refresh coordinator
//! ├── response.rs     - Envelope unwrapping
//! ├── token_store.rs  - Injectable token storage
//! ├── auth.rs         - Login, registration, logout
//! ├── categories.rs   - Menu categories
//! ├── dishes.rs       - Dishes
//! ├── cart.rs         - Cart
//! ├── user.rs         - Profile and password
//! ├── payment.rs      - Payment intents
//! ├── promo.rs        - Promo codes
//! ├── contact.rs      - Contact form
//! └── orders.rs       - Orders
//! ```

pub mod auth;
pub mod cart;
pub mod categories;
pub mod client;
pub mod contact;
pub mod dishes;
pub mod http;
pub mod orders;
pub mod payment;
pub mod promo;
pub mod refresh;
pub mod response;
pub mod token_store;
pub mod user;

pub use client::{ApiClient, ApiClientBuilder};
pub use http::{HttpClient, PendingRequest, RawResponse};
pub use token_store::{MemoryTokenStore, TokenPair, TokenStore};
