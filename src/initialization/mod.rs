//! Application initialization.
//!
//! Logger setup lives here so the binary and integration tests configure
//! logging the same way.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
