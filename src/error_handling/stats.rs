//! Line statistics tracking.
//!
//! Counts how each line of the source file was classified during a read.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::LineKind;

/// Per-run line counters.
///
/// All kinds are initialized to zero on creation, so lookups never miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineStats {
    counts: HashMap<LineKind, usize>,
}

impl LineStats {
    /// Creates counters with every kind at zero.
    pub fn new() -> Self {
        let mut counts = HashMap::new();
        for kind in LineKind::iter() {
            counts.insert(kind, 0);
        }
        LineStats { counts }
    }

    /// Records one line of the given kind.
    pub fn increment(&mut self, kind: LineKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    /// Returns the count for a kind.
    pub fn get(&self, kind: LineKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Total number of lines seen.
    pub fn total_lines(&self) -> usize {
        self.counts.values().sum()
    }

    /// Counts in declaration order of `LineKind`, for reporting.
    pub fn iter(&self) -> impl Iterator<Item = (LineKind, usize)> + '_ {
        LineKind::iter().map(move |kind| (kind, self.get(kind)))
    }
}

impl Default for LineStats {
    fn default() -> Self {
        Self::new()
    }
}
