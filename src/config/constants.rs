//! Configuration constants.
//!
//! Defaults for the blocklist location and the regenerated header block, plus
//! the fixed decoration strings of the rule syntax.

/// Blocklist read and rewritten when no path is given.
pub const DEFAULT_BLOCKLIST_PATH: &str = "./blocklist.txt";

/// Environment variable that can supply the blocklist path.
pub const BLOCKLIST_FILE_ENV: &str = "BLOCKLIST_FILE";

// Header defaults
/// Default `! Title:` value.
pub const DEFAULT_TITLE: &str = "Blocklist";
/// Default `! Description:` value.
pub const DEFAULT_DESCRIPTION: &str = "Just for personal using";
/// Default `! Homepage:` value.
pub const DEFAULT_HOMEPAGE: &str = "https://gitee.com/luancx/dnsfilter/raw/master/blocklist.txt";

/// Number of dashes in the `!---...` separator line of the header.
pub const HEADER_SEPARATOR_WIDTH: usize = 118;

// Rule decoration
/// Prefix stripped on read and re-added on write.
pub const RULE_PREFIX: &str = "||";
/// Suffix stripped on read and re-added on write.
pub const RULE_SUFFIX: &str = "^";

// Comment markers recognized on read. `!` is emitted for the header block,
// `#` for section headings.
/// Marker of header block lines.
pub const HEADER_COMMENT: char = '!';
/// Marker of section heading lines.
pub const SECTION_COMMENT: char = '#';

/// `chrono` format string for `TimestampFormat::Compact` (e.g. `202503062115`).
pub const TIMESTAMP_COMPACT: &str = "%Y%m%d%H%M";
/// `chrono` format string for `TimestampFormat::Dotted` (e.g. `25.03.06.2115`).
pub const TIMESTAMP_DOTTED: &str = "%y.%m.%d.%H%M";
