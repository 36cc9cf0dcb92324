//! blocklist_sort library: canonical re-sorting of Adblock-style domain blocklists
//!
//! Reads a blocklist of `||domain^` rules, drops blank and comment lines,
//! deduplicates the domains, groups them by the first letter of their
//! registrable label, sorts each group (shorter first, then lexicographic) and
//! rewrites the file with a regenerated header.
//!
//! # Example
//!
//! ```no_run
//! use blocklist_sort::{run_sort, Config};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: PathBuf::from("blocklist.txt"),
//!     ..Default::default()
//! };
//!
//! let report = run_sort(config)?;
//! println!("{} domains in {} groups", report.unique_domains, report.groups);
//! # Ok(())
//! # }
//! ```
//!
//! The rewrite is all-or-nothing: a read failure aborts before anything is
//! written, and a write failure leaves the original file in place.

#![warn(missing_docs)]

mod app;
pub mod config;
pub mod error_handling;
pub mod grouping;
pub mod initialization;
pub mod reader;
pub mod rule;
pub mod writer;

// Re-export public API
pub use config::{Config, HeaderSchema, LogFormat, LogLevel, TimestampFormat};
pub use error_handling::{BlocklistError, LineKind, LineStats};
pub use grouping::{GroupedSet, Section};
pub use run::{run_sort, run_sort_at, SortReport};

// Internal run module (Reader -> Grouper/Sorter -> Writer)
mod run {
    use std::fmt;
    use std::io;
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use chrono::{DateTime, Local, TimeZone};
    use log::info;
    use serde::Serialize;

    use crate::app::print_line_statistics;
    use crate::config::Config;
    use crate::error_handling::LineKind;
    use crate::reader::read_blocklist;
    use crate::writer::{render_document, write_blocklist, Header};

    /// Results of a sort run.
    #[derive(Debug, Clone, Serialize)]
    pub struct SortReport {
        /// Blocklist that was read (and, unless a dry run, rewritten)
        pub file: PathBuf,
        /// Lines in the source file
        pub total_lines: usize,
        /// Unique domains written
        pub unique_domains: usize,
        /// Number of `# >> X <<` sections written
        pub groups: usize,
        /// Rules whose domain was already present
        pub duplicates: usize,
        /// Rules skipped because no group key could be derived
        pub malformed: usize,
        /// Blank and comment lines dropped
        pub skipped: usize,
        /// Value of the `! Version:` header line
        pub version: String,
        /// True if the file was left untouched
        pub dry_run: bool,
        /// The rendered document, kept only for dry runs
        #[serde(skip)]
        pub document: Option<String>,
    }

    /// Sorts the configured blocklist, stamping the header with the current
    /// local time.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The configuration fails validation
    /// - The blocklist cannot be read (the file is left untouched)
    /// - The replacement file cannot be written or renamed into place
    pub fn run_sort(config: Config) -> Result<SortReport> {
        run_sort_at(config, &Local::now())
    }

    /// Like `run_sort`, with the generation time supplied by the caller.
    pub fn run_sort_at<Tz>(config: Config, generated_at: &DateTime<Tz>) -> Result<SortReport>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        config.validate().context("Invalid configuration")?;

        let version = config.timestamp_format.render(generated_at);

        let outcome = read_blocklist(&config.file)
            .context("Aborting before any write; blocklist left unchanged")?;
        print_line_statistics(&outcome.stats);

        let groups = outcome.groups.group_count();
        let unique_domains = outcome.groups.domain_count();
        let sections = outcome.groups.into_sections();

        let header = Header {
            title: config.title.clone(),
            description: config.description.clone(),
            version: version.clone(),
            homepage: config.homepage.clone(),
            blocked_domains: config
                .header_schema
                .includes_count()
                .then_some(unique_domains),
        };

        let document = if config.dry_run {
            info!("Dry run: {} left unchanged", config.file.display());
            Some(render_document(&header, &sections))
        } else {
            write_blocklist(&config.file, &header, &sections).context("Blocklist left unchanged")?;
            info!(
                "Wrote {} domains in {} groups to {}",
                unique_domains,
                groups,
                config.file.display()
            );
            None
        };

        let stats = &outcome.stats;
        Ok(SortReport {
            file: config.file,
            total_lines: stats.total_lines(),
            unique_domains,
            groups,
            duplicates: stats.get(LineKind::Duplicate),
            malformed: stats.get(LineKind::Malformed),
            skipped: stats.get(LineKind::Blank) + stats.get(LineKind::Comment),
            version,
            dry_run: config.dry_run,
            document,
        })
    }

    impl SortReport {
        /// Writes the dry-run document, if any, to `out`.
        pub fn write_document_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
            match &self.document {
                Some(document) => out.write_all(document.as_bytes()),
                None => Ok(()),
            }
        }
    }
}
