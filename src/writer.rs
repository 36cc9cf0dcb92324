//! Blocklist writer.
//!
//! Renders the regenerated header and the grouped body, and replaces the
//! blocklist on disk all-or-nothing: the document goes to a temporary file in
//! the destination directory, which is renamed over the original only after
//! every byte has been written and synced.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::config::{HEADER_COMMENT, HEADER_SEPARATOR_WIDTH, SECTION_COMMENT};
use crate::error_handling::BlocklistError;
use crate::grouping::Section;
use crate::rule::decorate;

/// Fields of the regenerated header block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// `! Title:` value.
    pub title: String,
    /// `! Description:` value.
    pub description: String,
    /// Pre-formatted generation timestamp.
    pub version: String,
    /// `! Homepage:` value.
    pub homepage: String,
    /// `Some` emits a `! Blocked domains:` line.
    pub blocked_domains: Option<usize>,
}

/// Writes the full document: header, then one section per group.
pub fn write_document<W: Write>(
    out: &mut W,
    header: &Header,
    sections: &[Section],
) -> io::Result<()> {
    write_header(out, header)?;
    for section in sections {
        writeln!(out, "{SECTION_COMMENT} >> {} <<", section.key)?;
        for domain in &section.domains {
            writeln!(out, "{}", decorate(domain))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_header<W: Write>(out: &mut W, header: &Header) -> io::Result<()> {
    writeln!(out, "{HEADER_COMMENT} Title: {}", header.title)?;
    writeln!(out, "{HEADER_COMMENT} Description: {}", header.description)?;
    writeln!(out, "{HEADER_COMMENT} Version: {}", header.version)?;
    writeln!(out, "{HEADER_COMMENT} Homepage: {}", header.homepage)?;
    if let Some(count) = header.blocked_domains {
        writeln!(out, "{HEADER_COMMENT} Blocked domains: {count}")?;
    }
    writeln!(out, "{HEADER_COMMENT}")?;
    writeln!(out, "{HEADER_COMMENT}{}", "-".repeat(HEADER_SEPARATOR_WIDTH))?;
    writeln!(out, "{HEADER_COMMENT}")?;
    Ok(())
}

/// Renders the document into a string.
pub fn render_document(header: &Header, sections: &[Section]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_document(&mut buf, header, sections);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Replaces the file at `path` with the rendered document.
///
/// A symlinked `path` is resolved first, so the file it points to is
/// replaced and the link stays in place. The existing file's permissions are
/// carried over to the replacement.
///
/// # Errors
///
/// Returns `BlocklistError::WriteFailure` if the temporary file cannot be
/// created, written, synced or renamed into place. The original file is left
/// unchanged in every failure case.
pub fn write_blocklist(
    path: &Path,
    header: &Header,
    sections: &[Section],
) -> Result<(), BlocklistError> {
    let write_failure = |source| BlocklistError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let target = match fs::canonicalize(path) {
        Ok(resolved) => resolved,
        Err(e) if e.kind() == io::ErrorKind::NotFound => path.to_path_buf(),
        Err(e) => return Err(write_failure(e)),
    };
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(write_failure)?;
    debug!("Writing blocklist to temporary file {}", temp.path().display());

    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        write_document(&mut writer, header, sections).map_err(write_failure)?;
        writer.flush().map_err(write_failure)?;
    }
    temp.as_file().sync_all().map_err(write_failure)?;

    if let Ok(metadata) = fs::metadata(&target) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(write_failure)?;
    }

    // A failed persist drops the temporary file along with the error
    temp.persist(&target).map_err(|e| write_failure(e.error))?;
    debug!("Replaced {}", target.display());
    Ok(())
}
