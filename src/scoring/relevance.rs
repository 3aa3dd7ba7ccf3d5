// Topic relevance scoring for ranked paper queries.
//
// Purely lexical: each whitespace token of the topic is matched as a
// substring of the title and of the summary, and each paper keyword is
// matched as a substring of the whole topic. The keyword direction is
// reversed on purpose — a broad query like "large language models in
// education" should pick up papers whose keywords ("llm", "education")
// appear inside it.

use crate::models::Paper;

/// Score a paper's relevance to a topic.
///
/// 0 for an empty topic. Otherwise +1 per topic token contained in the
/// title, +1 per topic token contained in the summary, and +1 per keyword
/// contained in the topic. Repeated tokens count every time; empty keywords
/// never count.
pub fn score_paper(paper: &Paper, topic: &str) -> u32 {
    if topic.is_empty() {
        return 0;
    }

    let topic_lower = topic.to_lowercase();
    let mut score = 0;

    for field in [&paper.title, &paper.summary] {
        let text = field.to_lowercase();
        for token in topic_lower.split_whitespace() {
            if text.contains(token) {
                score += 1;
            }
        }
    }

    for keyword in &paper.keywords {
        let keyword = keyword.to_lowercase();
        // Keyword inside the topic, not the topic inside the keyword. An
        // empty keyword would match every topic, so it is skipped.
        if !keyword.is_empty() && topic_lower.contains(&keyword) {
            score += 1;
        }
    }

    score
}
