//! # Logging
//!
//! `tracing` setup for the client: a daily-rolling file log plus an optional
//! stderr layer, both filtered through `RUST_LOG`.

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init;
