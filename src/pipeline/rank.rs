// Ranking flow — annotate every paper, filter by allowed labels, sort,
// truncate. No step mutates its inputs; the response owns fresh copies.

use std::cmp::Reverse;

use tracing::debug;

use crate::catalog::index::LabelIndex;
use crate::catalog::matcher::match_label;
use crate::models::{Label, LabeledPaper, Paper, RankingResult};
use crate::scoring::heuristic::{classify, CueLexicon};
use crate::scoring::relevance::score_paper;

/// Result cap used when the caller's limit is missing or unparseable.
pub const DEFAULT_RANK_LIMIT: usize = 5;

/// Parameters for one ranking query.
#[derive(Debug, Clone)]
pub struct RankRequest {
    pub topic: String,
    pub limit: usize,
    pub include_mixed: bool,
}

impl RankRequest {
    pub fn new(topic: impl Into<String>, limit: usize, include_mixed: bool) -> Self {
        Self {
            topic: topic.into(),
            limit,
            include_mixed,
        }
    }

    /// Build a request from raw query parameters, absorbing malformed
    /// input: a limit that doesn't parse falls back to
    /// [`DEFAULT_RANK_LIMIT`], a negative limit clamps to zero, the topic
    /// is trimmed, and include_mixed is true only for the (case-insensitive)
    /// string "true".
    pub fn from_raw(
        topic: Option<&str>,
        limit: Option<&str>,
        include_mixed: Option<&str>,
    ) -> Self {
        let topic = topic.unwrap_or("").trim().to_string();
        let limit = match limit {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(n) => n.max(0) as usize,
                Err(_) => DEFAULT_RANK_LIMIT,
            },
            None => DEFAULT_RANK_LIMIT,
        };
        let include_mixed = include_mixed.is_some_and(|raw| raw.eq_ignore_ascii_case("true"));
        Self {
            topic,
            limit,
            include_mixed,
        }
    }
}

/// Rank the paper catalog for a topic query.
///
/// Every paper gets a resolved label first. Human papers always pass the
/// filter, mixed papers only when the request asks for them, and ai papers
/// never do. With a topic the survivors sort by relevance score descending;
/// without one, by year descending. Both sorts are stable, so equal keys
/// keep catalog order. `count` reports min(limit, survivors) — how many
/// results the truncated list actually holds.
pub fn rank_papers(
    papers: &[Paper],
    index: &LabelIndex,
    cues: &CueLexicon,
    request: &RankRequest,
) -> RankingResult {
    let mut filtered: Vec<LabeledPaper> = papers
        .iter()
        .filter_map(|paper| {
            let labeled = annotate(paper, index, cues);
            match labeled.label {
                Label::Human => Some(labeled),
                Label::Mixed if request.include_mixed => Some(labeled),
                _ => None,
            }
        })
        .collect();

    if request.topic.is_empty() {
        filtered.sort_by_key(|labeled| Reverse(labeled.paper.year));
    } else {
        // cached_key: the relevance score is recomputed text matching,
        // not a field read.
        filtered.sort_by_cached_key(|labeled| Reverse(score_paper(&labeled.paper, &request.topic)));
    }

    let count = request.limit.min(filtered.len());
    filtered.truncate(request.limit);

    debug!(
        topic = %request.topic,
        count,
        include_mixed = request.include_mixed,
        "ranked paper query"
    );

    RankingResult {
        topic: request.topic.clone(),
        count,
        results: filtered,
    }
}

/// Resolve one paper's label and explanation.
///
/// A curated match takes priority; the paper's own label/explanation only
/// fill fields the entry omits, and the label bottoms out at mixed. With no
/// match at all, the cue classifier runs on the title. The annotated copy
/// clears the inner label/explanation so the flattened output carries each
/// key exactly once.
fn annotate(paper: &Paper, index: &LabelIndex, cues: &CueLexicon) -> LabeledPaper {
    let (label, explanation) = match match_label(index, &paper.title) {
        Some(entry) => (
            entry.label.or(paper.label).unwrap_or(Label::Mixed),
            entry.explanation.clone().or_else(|| paper.explanation.clone()),
        ),
        None => {
            let heuristic = classify(&paper.title, cues);
            (heuristic.label, Some(heuristic.explanation))
        }
    };

    let mut copy = paper.clone();
    copy.label = None;
    copy.explanation = None;

    LabeledPaper {
        label,
        explanation,
        paper: copy,
    }
}
