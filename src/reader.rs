//! Blocklist reader.
//!
//! Streams the source file line by line, skipping blanks and comments,
//! normalizing each rule and bucketing it by group key.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use crate::config::{HEADER_COMMENT, SECTION_COMMENT};
use crate::error_handling::{BlocklistError, LineKind, LineStats};
use crate::grouping::GroupedSet;
use crate::rule::{group_key, normalize_rule};

/// Everything learned from one pass over the source.
#[derive(Debug, Clone, Default)]
pub struct ReadOutcome {
    /// Unique domains bucketed by group key
    pub groups: GroupedSet,
    /// How every line was classified
    pub stats: LineStats,
}

/// Reads and groups the blocklist at `path`.
///
/// # Errors
///
/// Returns `BlocklistError::ReadFailure` if the file cannot be opened or any
/// line cannot be read. Nothing accumulated before the failure is returned,
/// so callers never rewrite the file from a partial read.
pub fn read_blocklist(path: &Path) -> Result<ReadOutcome, BlocklistError> {
    info!("Reading blocklist from {}", path.display());

    let read_failure = |source| BlocklistError::ReadFailure {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_failure)?;
    let outcome = read_lines(BufReader::new(file)).map_err(read_failure)?;

    debug!(
        "Read {} lines: {} unique domains in {} groups",
        outcome.stats.total_lines(),
        outcome.groups.domain_count(),
        outcome.groups.group_count()
    );
    Ok(outcome)
}

/// Groups the lines of any buffered source.
///
/// Malformed rules are logged with their 1-based line number and skipped.
///
/// # Errors
///
/// Returns the first I/O error hit while reading (including invalid UTF-8).
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<ReadOutcome> {
    let mut outcome = ReadOutcome::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let kind = classify_line(&line, &mut outcome.groups).unwrap_or_else(|e| {
            warn!("Skipping line {}: {}", index + 1, e);
            LineKind::Malformed
        });
        outcome.stats.increment(kind);
    }

    Ok(outcome)
}

fn classify_line(line: &str, groups: &mut GroupedSet) -> Result<LineKind, BlocklistError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(LineKind::Blank);
    }
    if trimmed.starts_with([SECTION_COMMENT, HEADER_COMMENT]) {
        return Ok(LineKind::Comment);
    }

    let domain = normalize_rule(trimmed);
    let key = group_key(domain)?;
    if groups.insert(key, domain) {
        Ok(LineKind::Rule)
    } else {
        Ok(LineKind::Duplicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn read_str(input: &str) -> ReadOutcome {
        read_lines(Cursor::new(input)).expect("in-memory read should not fail")
    }

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let outcome = read_str("\n   \n# section\n! header\n\t\n  # indented\n");
        assert!(outcome.groups.is_empty());
        assert_eq!(outcome.stats.get(LineKind::Blank), 3);
        assert_eq!(outcome.stats.get(LineKind::Comment), 3);
    }

    #[test]
    fn test_groups_and_deduplicates() {
        let outcome = read_str("||ads.example.com^\n# comment\n||bad.co^\n||ads.example.com^\n");
        let groups = &outcome.groups;
        assert_eq!(groups.group_count(), 2);
        assert!(groups.get('E').unwrap().contains("ads.example.com"));
        assert!(groups.get('B').unwrap().contains("bad.co"));
        assert_eq!(outcome.stats.get(LineKind::Rule), 2);
        assert_eq!(outcome.stats.get(LineKind::Duplicate), 1);
        assert_eq!(outcome.stats.get(LineKind::Comment), 1);
    }

    #[test]
    fn test_differently_decorated_duplicates_collapse() {
        let outcome = read_str("||a.com^\na.com\n||a.com\na.com^\n");
        assert_eq!(outcome.groups.domain_count(), 1);
        assert_eq!(outcome.stats.get(LineKind::Duplicate), 3);
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let outcome = read_str("   ||tracker.example.com^  \r\n");
        assert!(outcome
            .groups
            .get('E')
            .unwrap()
            .contains("tracker.example.com"));
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let outcome = read_str("||^\n||a..com^\n||...^\n||good.com^\n");
        assert_eq!(outcome.stats.get(LineKind::Malformed), 3);
        assert_eq!(outcome.groups.domain_count(), 1);
        assert!(outcome.groups.get('G').unwrap().contains("good.com"));
    }

    #[test]
    fn test_dotted_edge_rules_are_kept() {
        let outcome = read_str("||example.com.^\n||.tracker.net^\n||a..b.com^\n");
        assert_eq!(outcome.stats.get(LineKind::Malformed), 0);
        assert!(outcome.groups.get('E').unwrap().contains("example.com."));
        assert!(outcome.groups.get('T').unwrap().contains(".tracker.net"));
        assert!(outcome.groups.get('B').unwrap().contains("a..b.com"));
    }

    #[test]
    fn test_invalid_utf8_is_a_read_error() {
        let bytes: &[u8] = b"||a.com^\n\xff\xfe\n";
        assert!(read_lines(Cursor::new(bytes)).is_err());
    }

    #[test]
    fn test_read_blocklist_from_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("blocklist.txt");
        std::fs::write(&path, "||localhost^\n||mail.example.com^\n").expect("write fixture");

        let outcome = read_blocklist(&path).expect("read should succeed");
        assert!(outcome.groups.get('L').unwrap().contains("localhost"));
        assert!(outcome.groups.get('E').unwrap().contains("mail.example.com"));
    }

    #[test]
    fn test_read_blocklist_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("missing.txt");

        match read_blocklist(&path) {
            Err(BlocklistError::ReadFailure { path: failed, source }) => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected read failure, got {:?}", other),
        }
    }
}
