// Data models — the value types that flow through the classify-and-rank
// pipeline.
//
// These are separate from the pipeline logic so the dataset loader, the
// CLI, and the output modules can share them without depending on each
// other. Dataset records are deliberately lenient: any field except the
// title may be missing or null, and the pipeline substitutes defaults at
// the point of use.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Authorship label for a piece of academic text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Human,
    Ai,
    Mixed,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Human => "human",
            Label::Ai => "ai",
            Label::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A curated label record from the labels dataset.
///
/// Entries are externally curated and immutable. Omitted label, confidence,
/// or explanation fields get documented defaults when the entry is used to
/// answer a classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEntry {
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default)]
    pub label: Option<Label>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// A paper from the catalog dataset.
///
/// Only the fields the pipeline reads are typed. Anything else the dataset
/// carries lands in `extra` and passes through to the output unchanged.
/// The dataset's own `label`/`explanation` are fallbacks only — the ranking
/// pipeline resolves its own and clears these on the annotated copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    #[serde(default, deserialize_with = "null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "null_default")]
    pub keywords: Vec<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The result of classifying a piece of text.
///
/// Always carries all three fields: the label, a confidence in [0, 1], and
/// a non-empty explanation sentence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub label: Label,
    pub confidence: f64,
    pub explanation: String,
}

/// A paper annotated with its resolved authorship label.
///
/// Produced by the ranking pipeline; the source `Paper` is never mutated.
/// The inner paper's own label/explanation are cleared so the flattened
/// JSON form carries exactly one of each key.
#[derive(Debug, Clone, Serialize)]
pub struct LabeledPaper {
    pub label: Label,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(flatten)]
    pub paper: Paper,
}

/// The ranked, filtered response for a topic query.
#[derive(Debug, Clone, Serialize)]
pub struct RankingResult {
    pub topic: String,
    pub count: usize,
    pub results: Vec<LabeledPaper>,
}

/// Deserialize JSON null the same as a missing field.
///
/// Curated datasets routinely carry `"keywords": null` or `"year": null`;
/// both read as the type's default instead of failing the whole load.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    T: Default + Deserialize<'de>,
    D: Deserializer<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
