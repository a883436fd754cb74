//! # External Services
//!
//! - [`api`]: REST client for the restaurant backend

pub mod api;
