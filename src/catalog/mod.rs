// Catalog state — the label index and paper list as one immutable snapshot.
//
// The dataset loader builds a whole new Catalog and swaps it in through the
// CatalogHandle; readers hold a cheap Arc and never observe a partial
// rebuild. Nothing in this crate mutates a catalog after construction.

pub mod index;
pub mod matcher;
pub mod normalize;

use std::sync::Arc;

use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};

use crate::models::Paper;
use index::LabelIndex;

/// One immutable load of the curated labels and the paper catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub index: LabelIndex,
    pub papers: Vec<Paper>,
    pub loaded_at: DateTime<Utc>,
}

impl Catalog {
    pub fn new(index: LabelIndex, papers: Vec<Paper>) -> Self {
        Self {
            index,
            papers,
            loaded_at: Utc::now(),
        }
    }

    /// What callers see before any dataset has been loaded.
    pub fn empty() -> Self {
        Self::new(LabelIndex::default(), Vec::new())
    }
}

/// Shared handle to the current catalog snapshot.
///
/// `snapshot()` is cheap enough to call per request; `replace()` swaps in a
/// freshly built catalog without blocking readers, who keep whatever
/// snapshot they already hold.
pub struct CatalogHandle {
    current: ArcSwap<Catalog>,
}

impl CatalogHandle {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: ArcSwap::from(Arc::new(catalog)),
        }
    }

    pub fn snapshot(&self) -> Arc<Catalog> {
        self.current.load_full()
    }

    pub fn replace(&self, catalog: Catalog) {
        self.current.store(Arc::new(catalog));
    }
}

impl Default for CatalogHandle {
    fn default() -> Self {
        Self::new(Catalog::empty())
    }
}
