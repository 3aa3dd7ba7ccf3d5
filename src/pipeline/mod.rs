// Pipeline — the two flows the crate exists for: classifying one text
// against the curated catalog, and annotating/filtering/ranking the paper
// catalog for a topic query.

pub mod classify;
pub mod rank;
