//! Error type definitions.
//!
//! This module defines the error types and line classifications used throughout
//! the application.

use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Why a rule line could not yield a group key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// Nothing is left once the `||` and `^` decoration is removed.
    Empty,
    /// Nothing but dots.
    OnlyDots,
    /// The label the group key is read from is empty, as in `a..com`.
    EmptyLabel,
}

impl MalformedReason {
    /// Human-readable description used in log messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            MalformedReason::Empty => "empty after removing rule decoration",
            MalformedReason::OnlyDots => "contains only dots",
            MalformedReason::EmptyLabel => "second-level label is empty",
        }
    }
}

/// Errors raised while reading, classifying or rewriting a blocklist.
#[derive(Error, Debug)]
pub enum BlocklistError {
    /// The source file is missing, unreadable, or a line could not be decoded.
    #[error("Failed to read blocklist {}: {source}", .path.display())]
    ReadFailure {
        /// Blocklist being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The destination could not be fully written or replaced.
    #[error("Failed to write blocklist {}: {source}", .path.display())]
    WriteFailure {
        /// Blocklist being replaced
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A rule line whose domain has no character to group by.
    #[error("Malformed domain {domain:?}: {}", .reason.as_str())]
    MalformedDomain {
        /// The normalized domain that was rejected
        domain: String,
        /// Why no key could be derived
        reason: MalformedReason,
    },
}

/// Classification of a single source line.
///
/// Every line read from the blocklist lands in exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum LineKind {
    /// A rule whose domain was added to its group for the first time
    Rule,
    /// Empty or whitespace-only
    Blank,
    /// Starts with `#` or `!`
    Comment,
    /// A rule whose domain was already present
    Duplicate,
    /// A rule skipped because no group key could be derived
    Malformed,
}

impl LineKind {
    /// Label used when reporting line counts.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineKind::Rule => "Rules kept",
            LineKind::Blank => "Blank lines",
            LineKind::Comment => "Comment lines",
            LineKind::Duplicate => "Duplicate rules",
            LineKind::Malformed => "Malformed rules skipped",
        }
    }
}
