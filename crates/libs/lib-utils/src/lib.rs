//! # Utilities Library
//!
//! Shared utility functions for environment variables and input validation.

pub mod envs;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_flag, get_env_or, get_env_parse};
pub use validation::{validate_email, validate_min_length, validate_not_empty, validate_positive};
