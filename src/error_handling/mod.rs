//! Error handling and line statistics.
//!
//! This module provides:
//! - Error type definitions (read, write, malformed domain, initialization)
//! - Per-run line classification counters
//!
//! Read and write failures abort the run before the blocklist is replaced.
//! Malformed domains are counted and skipped.

mod stats;
mod types;

// Re-export public API
pub use stats::LineStats;
pub use types::{BlocklistError, InitializationError, LineKind, MalformedReason};
