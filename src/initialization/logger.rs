//! Logger initialization.
//!
//! Plain output is meant for someone watching a sort run in a terminal; JSON
//! lines are meant for CI jobs that regenerate the blocklist and keep the log.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use log::{Level, LevelFilter};
use serde::Serialize;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

const CRATE_TARGET: &str = "blocklist_sort";

/// One JSON log line. Field order is the order emitted.
#[derive(Serialize)]
struct JsonRecord<'a> {
    ts: i64,
    level: &'a str,
    target: &'a str,
    msg: String,
}

/// Initializes the logger with the specified level and format.
///
/// `RUST_LOG` is read first; `level` then overrides it for this crate, so
/// `--log-level warn` quiets a run even when `RUST_LOG=debug` is exported.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Only skipped-line warnings and failures
/// blocklist_sort lists/blocklist.txt --log-level warn
///
/// # One JSON object per line, for CI logs
/// blocklist_sort lists/blocklist.txt --log-format json
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    builder.filter_module(CRATE_TARGET, level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let line = json_record(
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    &record.args().to_string(),
                )?;
                writeln!(buf, "{}", line)
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{} {} [{}] {}",
                    level_marker(record.level()),
                    short_target(record.target()).cyan(),
                    styled_level(record.level()),
                    record.args()
                )
            });
        }
    }

    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Renders one record as a JSON object with `ts`, `level`, `target`, `msg`.
fn json_record(ts: i64, level: Level, target: &str, msg: &str) -> io::Result<String> {
    let record = JsonRecord {
        ts,
        level: level.as_str(),
        target,
        msg: msg.to_string(),
    };
    serde_json::to_string(&record).map_err(io::Error::other)
}

fn level_marker(level: Level) -> &'static str {
    match level {
        Level::Error => "❌",
        Level::Warn => "⚠️",
        Level::Info => "✔️",
        Level::Debug => "🔍",
        Level::Trace => "🔬",
    }
}

fn styled_level(level: Level) -> ColoredString {
    let name = level.as_str();
    match level {
        Level::Error => name.red().bold(),
        Level::Warn => name.yellow(),
        Level::Info => name.green(),
        Level::Debug => name.blue(),
        Level::Trace => name.dimmed(),
    }
}

/// Drops the crate prefix so plain lines read `reader` instead of
/// `blocklist_sort::reader`. Targets from other crates are left alone.
fn short_target(target: &str) -> &str {
    match target.strip_prefix(CRATE_TARGET) {
        Some("") => CRATE_TARGET,
        Some(rest) => rest.strip_prefix("::").unwrap_or(target),
        None => target,
    }
}
