// Title normalization — the canonical key form for every catalog lookup.

/// Normalize a title for keying and matching: trim surrounding whitespace,
/// then lowercase. Never fails; interior whitespace is left alone.
pub fn normalize_title(text: &str) -> String {
    text.trim().to_lowercase()
}
