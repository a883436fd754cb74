//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the restaurant backend.
//!
//! ## Module Organization
//!
//! - [`envelope`] - Response wrapper shared by every endpoint
//! - [`auth`] - Login, registration, refresh
//! - [`menu`] - Categories and dishes
//! - [`cart`] - Cart items
//! - [`user`] - Profile management
//! - [`payment`] - Payment intents and confirmation
//! - [`promo`] - Promo code validation
//! - [`contact`] - Contact form
//! - [`order`] - Orders and order status
//!
//! ## Example JSON Communication
//!
//! ```text
//! GET /cart?userId=42
//! Authorization: Bearer eyJhbGciOi...
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "success": true,
//!   "statusCode": 200,
//!   "data": [
//!     { "id": 1, "dishId": 7, "name": "Margherita", "quantity": 2, "price": 9.5 }
//!   ]
//! }
//! ```

pub mod auth;
pub mod cart;
pub mod contact;
pub mod envelope;
pub mod menu;
pub mod order;
pub mod payment;
pub mod promo;
pub mod user;

pub use auth::*;
pub use cart::*;
pub use contact::*;
pub use envelope::*;
pub use menu::*;
pub use order::*;
pub use payment::*;
pub use promo::*;
pub use user::*;
