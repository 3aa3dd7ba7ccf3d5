// Rule-based authorship classification.
//
// No model inference here — the text is lowercased once and checked against
// two ordered cue lists. Rule order is the contract: AI cues outrank mixed
// cues, and anything that hits neither list defaults to human.

use crate::models::{Classification, Label};

/// Cues typical of machine-generated or AI-focused text.
const AI_CUES: &[&str] = &[
    "gpt",
    "chatgpt",
    "llm",
    "ai-written",
    "prompt-engineering",
    "hallucination",
];

/// Cues typical of human/AI collaboration.
const MIXED_CUES: &[&str] = &["assisted", "ai-assisted", "co-authored with ai"];

pub const AI_EXPLANATION: &str =
    "Detected AI-related phrasing and cues typical of machine-generated text.";
pub const MIXED_EXPLANATION: &str =
    "Signals indicate collaboration between human authors and AI tools.";
pub const HUMAN_EXPLANATION: &str =
    "Defaulting to human based on writing style and lack of AI cues.";

/// Cue lists for the rule-based classifier.
///
/// Carried as data so callers can swap in their own lexicons without
/// touching the evaluation order.
#[derive(Debug, Clone)]
pub struct CueLexicon {
    pub ai: Vec<String>,
    pub mixed: Vec<String>,
}

impl Default for CueLexicon {
    fn default() -> Self {
        Self {
            ai: AI_CUES.iter().map(|cue| cue.to_string()).collect(),
            mixed: MIXED_CUES.iter().map(|cue| cue.to_string()).collect(),
        }
    }
}

/// Classify text by substring cue matching. Always succeeds; text hitting
/// no cue list comes back human with moderate confidence.
pub fn classify(text: &str, cues: &CueLexicon) -> Classification {
    let lowered = text.to_lowercase();

    let rules = [
        (cues.ai.as_slice(), Label::Ai, 0.65, AI_EXPLANATION),
        (cues.mixed.as_slice(), Label::Mixed, 0.6, MIXED_EXPLANATION),
    ];

    for (list, label, confidence, explanation) in rules {
        if list.iter().any(|cue| lowered.contains(cue.as_str())) {
            return Classification {
                label,
                confidence,
                explanation: explanation.to_string(),
            };
        }
    }

    Classification {
        label: Label::Human,
        confidence: 0.6,
        explanation: HUMAN_EXPLANATION.to_string(),
    }
}
