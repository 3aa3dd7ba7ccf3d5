// Unit tests for topic relevance scoring.
//
// Pins the exact counting rules: per-token substring hits against title and
// summary, the reversed keyword-in-topic direction, and the degenerate
// inputs (empty topic, empty keywords, whitespace).

use byline::models::Paper;
use byline::scoring::relevance::score_paper;
use serde_json::Map;

fn paper(title: &str, summary: &str, keywords: &[&str]) -> Paper {
    Paper {
        title: title.to_string(),
        summary: summary.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        year: 2020,
        label: None,
        explanation: None,
        extra: Map::new(),
    }
}

// ============================================================
// Empty and degenerate topics
// ============================================================

#[test]
fn empty_topic_always_scores_zero() {
    let p = paper(
        "Neural ranking models",
        "Everything about ranking",
        &["ranking", "neural"],
    );
    assert_eq!(score_paper(&p, ""), 0);
}

#[test]
fn whitespace_topic_has_no_tokens() {
    // Not empty, so it isn't short-circuited — but it splits to nothing and
    // contains no keyword.
    let p = paper("Anything", "Anything", &["anything"]);
    assert_eq!(score_paper(&p, " \t "), 0);
}

#[test]
fn unrelated_topic_scores_zero() {
    let p = paper("Coral bleaching", "Reef surveys", &["coral"]);
    assert_eq!(score_paper(&p, "transformer pretraining"), 0);
}

// ============================================================
// Token hits against title and summary
// ============================================================

#[test]
fn token_scores_title_and_summary_separately() {
    let p = paper("Neural networks", "Deep neural methods", &[]);
    assert_eq!(score_paper(&p, "neural"), 2, "One hit per field expected");
}

#[test]
fn each_token_contributes_independently() {
    let p = paper("Neural retrieval systems", "Dense retrieval at scale", &[]);
    // title: "neural" + "retrieval"; summary: "retrieval"
    assert_eq!(score_paper(&p, "neural retrieval"), 3);
}

#[test]
fn repeated_tokens_count_every_occurrence() {
    let p = paper("ai planning", "", &[]);
    assert_eq!(score_paper(&p, "ai ai ai"), 3);
}

#[test]
fn substring_containment_not_word_match() {
    let p = paper("Internetworking protocols", "", &[]);
    // "net" is inside "Internetworking"
    assert_eq!(score_paper(&p, "net"), 1);
}

#[test]
fn matching_is_case_insensitive_both_sides() {
    let p = paper("NEURAL Architectures", "", &[]);
    assert_eq!(score_paper(&p, "neural"), 1);
    assert_eq!(score_paper(&p, "NEURAL"), 1);
}

// ============================================================
// Keyword direction — keyword inside topic, never the reverse
// ============================================================

#[test]
fn keyword_contained_in_topic_counts() {
    let p = paper("", "", &["llm", "education"]);
    assert_eq!(score_paper(&p, "llm use in education"), 2);
}

#[test]
fn topic_contained_in_keyword_does_not_count() {
    let p = paper("", "", &["large language models"]);
    assert_eq!(
        score_paper(&p, "language"),
        0,
        "A keyword broader than the topic must contribute nothing"
    );
}

#[test]
fn multiword_keyword_matches_as_phrase() {
    let p = paper("", "", &["graph neural networks"]);
    assert_eq!(score_paper(&p, "advances in graph neural networks"), 1);
    // Reordered topic words break the phrase containment.
    assert_eq!(score_paper(&p, "neural graph networks advances"), 0);
}

#[test]
fn empty_keyword_never_counts() {
    let p = paper("", "", &["", "real"]);
    assert_eq!(score_paper(&p, "a real topic"), 1);
}

#[test]
fn keyword_case_folded_before_containment() {
    let p = paper("", "", &["LLM"]);
    assert_eq!(score_paper(&p, "llm evaluation"), 1);
}

// ============================================================
// Combined counting
// ============================================================

#[test]
fn tokens_and_keywords_sum() {
    let p = paper(
        "Transformer attention survey",
        "Surveys attention mechanisms in transformers",
        &["attention", "survey methods"],
    );
    // tokens "transformer": title hit ("transformer") + summary hit
    //   (inside "transformers") = 2
    // token "attention": title + summary = 2
    // keyword "attention" inside topic = 1; "survey methods" not contained
    assert_eq!(score_paper(&p, "transformer attention"), 5);
}

#[test]
fn missing_fields_score_like_empty_text() {
    let p = paper("", "", &[]);
    assert_eq!(score_paper(&p, "anything"), 0);
}
