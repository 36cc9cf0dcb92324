//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `blocklist_sort` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output and the exit code
//!
//! Exit code 0 means the blocklist was rewritten (or rendered, for a dry run);
//! 1 means nothing was changed and a diagnostic went to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::process;

use blocklist_sort::initialization::init_logger_with;
use blocklist_sort::{run_sort, Config, LogFormat};

fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format.clone()).context("Failed to initialize logger")?;

    match run_sort(config) {
        Ok(report) => {
            if report.dry_run {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                report
                    .write_document_to(&mut out)
                    .and_then(|_| out.flush())
                    .context("Failed to write document to stdout")?;
            }

            let summary = match log_format {
                LogFormat::Json => {
                    serde_json::to_string(&report).context("Failed to serialize report")?
                }
                LogFormat::Plain => format!(
                    "✅ Sorted {} domain{} into {} group{} ({} duplicate{}, {} malformed) - {}",
                    report.unique_domains,
                    if report.unique_domains == 1 { "" } else { "s" },
                    report.groups,
                    if report.groups == 1 { "" } else { "s" },
                    report.duplicates,
                    if report.duplicates == 1 { "" } else { "s" },
                    report.malformed,
                    if report.dry_run {
                        "dry run, file unchanged".to_string()
                    } else {
                        format!("wrote {}", report.file.display())
                    }
                ),
            };

            // Keep stdout clean for the rendered document on dry runs
            if report.dry_run {
                eprintln!("{summary}");
            } else {
                println!("{summary}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("blocklist_sort error: {:#}", e);
            process::exit(1);
        }
    }
}
