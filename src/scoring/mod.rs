// Scoring — the rule-based authorship classifier and the topic relevance
// scorer. Both are pure functions over in-memory data.

pub mod heuristic;
pub mod relevance;
