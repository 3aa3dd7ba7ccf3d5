// Classification flow — curated catalog lookup with a heuristic fallback.

use thiserror::Error;
use tracing::debug;

use crate::catalog::index::LabelIndex;
use crate::catalog::matcher::match_label;
use crate::models::{Classification, Label};
use crate::scoring::heuristic::{classify, CueLexicon};

/// Confidence reported for a curated entry that omits its own.
pub const CURATED_CONFIDENCE: f64 = 0.75;
/// Explanation reported for a curated entry that omits its own.
pub const CURATED_EXPLANATION: &str = "Label derived from curated dataset.";

#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The caller provided no text to classify. The one condition callers
    /// see as an error; everything else resolves to a classification.
    #[error("No text provided")]
    InvalidInput,
}

/// Classify a title or abstract.
///
/// A curated match wins over the heuristic, even a sparse one — omitted
/// entry fields take the curated defaults (mixed label, 0.75 confidence,
/// a fixed explanation) rather than falling through. Text matching no
/// curated entry goes to the cue-based classifier, which always answers.
pub fn classify_text(
    index: &LabelIndex,
    cues: &CueLexicon,
    text: &str,
) -> Result<Classification, ClassifyError> {
    if text.is_empty() {
        return Err(ClassifyError::InvalidInput);
    }

    if let Some(entry) = match_label(index, text) {
        debug!(title = %entry.title, "curated label hit");
        return Ok(Classification {
            label: entry.label.unwrap_or(Label::Mixed),
            confidence: entry.confidence.unwrap_or(CURATED_CONFIDENCE),
            explanation: entry
                .explanation
                .clone()
                .unwrap_or_else(|| CURATED_EXPLANATION.to_string()),
        });
    }

    debug!("no curated match, using heuristic");
    Ok(classify(text, cues))
}
