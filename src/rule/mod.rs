//! Rule normalization and group-key derivation.
//!
//! Key functions:
//! - `normalize_rule()` - Strips `||` / `^` decoration to get the bare domain
//! - `group_key()` - Derives the uppercase letter a domain is grouped under
//! - `decorate()` - Re-applies the decoration for output

use crate::config::{RULE_PREFIX, RULE_SUFFIX};
use crate::error_handling::{BlocklistError, MalformedReason};

/// Strips rule decoration from a trimmed, non-comment line.
///
/// A leading `||` is removed, then a trailing `^`. Nothing else changes: no
/// case folding, no punycode handling, no inner whitespace removal. The result
/// may be empty (e.g. for `||^`), which `group_key()` rejects.
pub fn normalize_rule(line: &str) -> &str {
    let domain = line.strip_prefix(RULE_PREFIX).unwrap_or(line);
    domain.strip_suffix(RULE_SUFFIX).unwrap_or(domain)
}

/// Derives the group key of a normalized domain.
///
/// The domain is split on `.` with trailing empty labels dropped, so the FQDN
/// form `example.com.` groups like `example.com`. Domains with at most two
/// labels (`example.com`, `localhost`) are keyed by their first character.
/// Longer domains are keyed by the first character of the second-to-last
/// label, so `mail.example.com` and `.mail.example.com` group under `E`.
///
/// # Errors
///
/// Returns `BlocklistError::MalformedDomain` if the domain is empty, consists
/// only of dots, or the label the key is read from is empty (`a..com`).
pub fn group_key(domain: &str) -> Result<char, BlocklistError> {
    let malformed = |reason| BlocklistError::MalformedDomain {
        domain: domain.to_string(),
        reason,
    };

    if domain.is_empty() {
        return Err(malformed(MalformedReason::Empty));
    }

    let mut labels: Vec<&str> = domain.split('.').collect();
    while labels.last().is_some_and(|label| label.is_empty()) {
        labels.pop();
    }
    if labels.is_empty() {
        return Err(malformed(MalformedReason::OnlyDots));
    }

    let keyed = if labels.len() <= 2 {
        domain
    } else {
        labels[labels.len() - 2]
    };

    keyed
        .chars()
        .next()
        .map(to_upper)
        .ok_or_else(|| malformed(MalformedReason::EmptyLabel))
}

/// Formats a normalized domain as a `||domain^` rule.
pub fn decorate(domain: &str) -> String {
    format!("{RULE_PREFIX}{domain}{RULE_SUFFIX}")
}

// Characters whose uppercase form is more than one char (e.g. 'ß') keep their
// original form so the key stays a single character.
fn to_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
