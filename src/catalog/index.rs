// Label catalog index — normalized title to curated entry.
//
// Built wholesale from the labels dataset and never updated in place.
// Iteration order is insertion order; the fuzzy matcher's tie-break depends
// on it, which is why this is an IndexMap and not a HashMap.

use indexmap::IndexMap;

use crate::catalog::normalize::normalize_title;
use crate::models::LabelEntry;

/// Lookup table from normalized title to curated label entry.
#[derive(Debug, Clone, Default)]
pub struct LabelIndex {
    entries: IndexMap<String, LabelEntry>,
}

impl LabelIndex {
    /// Build the index from curated entries.
    ///
    /// Entries whose normalized title is empty are skipped. When two entries
    /// share a normalized title the later one wins, keeping the earlier
    /// entry's position in iteration order.
    pub fn build(entries: Vec<LabelEntry>) -> Self {
        let mut map = IndexMap::with_capacity(entries.len());
        for entry in entries {
            let key = normalize_title(&entry.title);
            if key.is_empty() {
                continue;
            }
            map.insert(key, entry);
        }
        Self { entries: map }
    }

    /// Exact lookup by an already-normalized title.
    pub fn get(&self, normalized_title: &str) -> Option<&LabelEntry> {
        self.entries.get(normalized_title)
    }

    /// Iterate (normalized title, entry) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LabelEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
