// Fuzzy title matching against the curated index.
//
// Exact lookup first, then a linear scan over every key using substring
// containment in either direction. The scan is O(index size) per call —
// fine for curated datasets of a few hundred entries, and the known
// bottleneck past that.

use crate::catalog::index::LabelIndex;
use crate::catalog::normalize::normalize_title;
use crate::models::LabelEntry;

/// Find the curated entry that best matches `text`.
///
/// An exact normalized hit wins immediately. Otherwise a key qualifies when
/// it contains the needle or the needle contains it; the candidate covering
/// the most characters wins, and earlier entries win ties.
///
/// Only literally-empty input returns None. Whitespace-only input
/// normalizes to an empty needle, which every key contains, so the longest
/// key wins.
pub fn match_label<'a>(index: &'a LabelIndex, text: &str) -> Option<&'a LabelEntry> {
    if text.is_empty() {
        return None;
    }

    let needle = normalize_title(text);
    if let Some(entry) = index.get(&needle) {
        return Some(entry);
    }

    let needle_len = needle.chars().count();
    let mut best: Option<(usize, &LabelEntry)> = None;
    for (key, entry) in index.iter() {
        if !key.contains(&needle) && !needle.contains(key) {
            continue;
        }
        // Character count, not byte count — accented titles must not
        // out-rank longer plain ones.
        let score = key.chars().count().max(needle_len);
        // Strictly greater, so the first qualifying entry keeps ties.
        if best.map_or(true, |(top, _)| score > top) {
            best = Some((score, entry));
        }
    }

    best.map(|(_, entry)| entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Label, LabelEntry};

    fn entry(title: &str) -> LabelEntry {
        LabelEntry {
            title: title.to_string(),
            label: Some(Label::Human),
            confidence: Some(0.9),
            explanation: None,
        }
    }

    fn index(titles: &[&str]) -> LabelIndex {
        LabelIndex::build(titles.iter().map(|t| entry(t)).collect())
    }

    #[test]
    fn exact_hit_beats_longer_fuzzy_candidate() {
        let idx = index(&["deep learning", "deep learning survey methods"]);
        let hit = match_label(&idx, "Deep Learning").unwrap();
        // The longer key contains the needle and would out-score it, but the
        // exact lookup short-circuits first.
        assert_eq!(hit.title, "deep learning");
    }

    #[test]
    fn empty_text_never_matches() {
        let idx = index(&["anything"]);
        assert!(match_label(&idx, "").is_none());
    }

    #[test]
    fn no_containment_no_match() {
        let idx = index(&["graph neural networks"]);
        assert!(match_label(&idx, "quantum error correction").is_none());
    }

    #[test]
    fn needle_containing_key_matches() {
        let idx = index(&["transformers"]);
        let hit = match_label(&idx, "A gentle tour of transformers for biology");
        assert!(hit.is_some());
    }

    #[test]
    fn key_containing_needle_matches() {
        let idx = index(&["a complete history of convolutional networks"]);
        let hit = match_label(&idx, "convolutional networks");
        assert!(hit.is_some());
    }

    #[test]
    fn longest_candidate_wins() {
        let idx = index(&[
            "notes on neural scaling",
            "a broad survey of neural scaling laws across domains",
        ]);
        // Both keys contain the needle; the longer key covers more
        // characters and wins.
        let hit = match_label(&idx, "Neural Scaling").unwrap();
        assert_eq!(hit.title, "a broad survey of neural scaling laws across domains");
    }

    #[test]
    fn tie_keeps_first_inserted_entry() {
        let idx = index(&["alpha study", "gamma study"]);
        // Both 11-char keys contain "study"; scores tie at 11.
        let hit = match_label(&idx, "study").unwrap();
        assert_eq!(hit.title, "alpha study");
    }

    #[test]
    fn whitespace_only_matches_longest_key() {
        let idx = index(&["short", "a substantially longer curated title"]);
        let hit = match_label(&idx, "   ").unwrap();
        assert_eq!(hit.title, "a substantially longer curated title");
    }
}
