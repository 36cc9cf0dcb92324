//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (default path, header text, rule decoration)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{
    Config, ConfigValidationError, HeaderSchema, LogFormat, LogLevel, TimestampFormat,
};
