//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, TimeZone};
use clap::{Parser, ValueEnum};

use crate::config::constants::{
    BLOCKLIST_FILE_ENV, DEFAULT_BLOCKLIST_PATH, DEFAULT_DESCRIPTION, DEFAULT_HOMEPAGE,
    DEFAULT_TITLE, TIMESTAMP_COMPACT, TIMESTAMP_DOTTED,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Encoding of the `! Version:` header line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TimestampFormat {
    /// `yyyyMMddHHmm`, e.g. `202503062115`
    Compact,
    /// `yy.MM.dd.HHmm`, e.g. `25.03.06.2115`
    Dotted,
}

impl TimestampFormat {
    /// Returns the `chrono` format string for this encoding.
    pub fn pattern(self) -> &'static str {
        match self {
            TimestampFormat::Compact => TIMESTAMP_COMPACT,
            TimestampFormat::Dotted => TIMESTAMP_DOTTED,
        }
    }

    /// Formats `at` using this encoding.
    pub fn render<Tz>(self, at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        at.format(self.pattern()).to_string()
    }
}

/// Which optional fields the regenerated header carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum HeaderSchema {
    /// Emit a `! Blocked domains: <count>` line after the homepage
    WithCount,
    /// Title, description, version and homepage only
    WithoutCount,
}

impl HeaderSchema {
    /// True if the `! Blocked domains:` line is emitted.
    pub fn includes_count(self) -> bool {
        matches!(self, HeaderSchema::WithCount)
    }
}

/// Configuration for a sort run.
///
/// Parsed from the command line by the binary, or built programmatically with
/// `..Default::default()`.
///
/// # Examples
///
/// ```no_run
/// use blocklist_sort::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("lists/blocklist.txt"),
///     dry_run: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "blocklist_sort",
    version,
    about = "Normalize, deduplicate and re-sort an Adblock-style domain blocklist in place"
)]
pub struct Config {
    /// Blocklist file to read and rewrite
    #[arg(env = BLOCKLIST_FILE_ENV, default_value = DEFAULT_BLOCKLIST_PATH)]
    pub file: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Encoding of the generated `! Version:` timestamp
    #[arg(long, value_enum, default_value_t = TimestampFormat::Compact)]
    pub timestamp_format: TimestampFormat,

    /// Whether the header carries the blocked-domain count
    #[arg(long, value_enum, default_value_t = HeaderSchema::WithCount)]
    pub header_schema: HeaderSchema,

    /// Header title
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Header description
    #[arg(long, default_value = DEFAULT_DESCRIPTION)]
    pub description: String,

    /// Header homepage URL
    #[arg(long, default_value = DEFAULT_HOMEPAGE)]
    pub homepage: String,

    /// Print the regenerated document to stdout and leave the file untouched
    #[arg(long)]
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_BLOCKLIST_PATH),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timestamp_format: TimestampFormat::Compact,
            header_schema: HeaderSchema::WithCount,
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            homepage: DEFAULT_HOMEPAGE.to_string(),
            dry_run: false,
        }
    }
}

/// A configuration field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong with it
    pub message: String,
}

impl Config {
    /// Checks the configuration before any file is touched.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigValidationError` if the file path is empty or a header
    /// field contains a line break.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.file.as_os_str().is_empty() {
            return Err(ConfigValidationError {
                field: "file",
                message: "path must not be empty".to_string(),
            });
        }

        for (field, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("homepage", &self.homepage),
        ] {
            if value.contains(['\n', '\r']) {
                return Err(ConfigValidationError {
                    field,
                    message: "must be a single line".to_string(),
                });
            }
        }

        Ok(())
    }
}
