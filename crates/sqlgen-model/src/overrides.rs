//! Exact-match replacement table for schema names.

use std::collections::BTreeMap;

/// User-supplied replacements for raw schema names.
///
/// Lookups are exact, case-sensitive string matches. The table is built once
/// from an ordered sequence of `(old, new)` pairs and is immutable
/// afterwards, so the naming engine can be shared freely across threads.
///
/// When the source sequence contains the same `old` key more than once, the
/// first pair in load order wins, matching the original renames-file
/// semantics.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    entries: BTreeMap<String, String>,
}

impl OverrideTable {
    /// An empty table; every lookup misses, disabling overrides entirely.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the table from an ordered sequence of `(old, new)` pairs.
    pub fn from_pairs<I, S, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let mut entries = BTreeMap::new();
        for (old, new) in pairs {
            // first pair in load order wins
            entries.entry(old.into()).or_insert_with(|| new.into());
        }
        Self { entries }
    }

    /// Exact-match lookup of a raw schema name.
    pub fn lookup(&self, raw: &str) -> Option<&str> {
        self.entries.get(raw).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let table = OverrideTable::from_pairs([("PRODUCT", "Merchandise")]);
        assert_eq!(table.lookup("PRODUCT"), Some("Merchandise"));
        assert_eq!(table.lookup("product"), None);
        assert_eq!(table.lookup("PRODUCTS"), None);
    }

    #[test]
    fn first_duplicate_key_wins() {
        let table = OverrideTable::from_pairs([("T", "First"), ("T", "Second")]);
        assert_eq!(table.lookup("T"), Some("First"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn empty_table_misses_everything() {
        let table = OverrideTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.lookup("anything"), None);
    }
}
