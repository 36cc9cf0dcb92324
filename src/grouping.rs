//! Grouped domain sets and within-group ordering.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

/// Unique normalized domains bucketed by group key.
///
/// Buckets have set semantics: inserting a domain twice keeps one copy.
/// Keys iterate in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedSet {
    groups: BTreeMap<char, HashSet<String>>,
}

/// One output section: a group key and its members in canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Group key shown in the `# >> X <<` heading
    pub key: char,
    /// Members, shortest first
    pub domains: Vec<String>,
}

impl GroupedSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `domain` under `key`. Returns `false` if it was already present.
    pub fn insert(&mut self, key: char, domain: &str) -> bool {
        let bucket = self.groups.entry(key).or_default();
        if bucket.contains(domain) {
            return false;
        }
        bucket.insert(domain.to_string())
    }

    /// True if no domain has been inserted.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of distinct group keys.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of unique domains across all groups.
    pub fn domain_count(&self) -> usize {
        self.groups.values().map(HashSet::len).sum()
    }

    /// Members of one group, unordered.
    pub fn get(&self, key: char) -> Option<&HashSet<String>> {
        self.groups.get(&key)
    }

    /// Consumes the set into sections ordered by key, members sorted by
    /// `compare_domains`.
    pub fn into_sections(self) -> Vec<Section> {
        self.groups
            .into_iter()
            .map(|(key, bucket)| Section {
                key,
                domains: sort_domains(bucket),
            })
            .collect()
    }
}

/// Orders domains by length (in chars) ascending, then lexicographically.
pub fn compare_domains(a: &str, b: &str) -> Ordering {
    a.chars()
        .count()
        .cmp(&b.chars().count())
        .then_with(|| a.cmp(b))
}

/// Sorts one bucket into canonical order.
pub fn sort_domains<I>(domains: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut sorted: Vec<String> = domains.into_iter().collect();
    sorted.sort_by(|a, b| compare_domains(a, b));
    sorted
}
