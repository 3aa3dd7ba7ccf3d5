// Dataset loading — curated labels and the paper catalog from JSON files.
//
// Both datasets are plain JSON arrays. They are read in full and turned
// into an immutable Catalog snapshot; nothing here writes back. Unreadable
// or malformed files are load-time errors, not pipeline failures.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::catalog::index::LabelIndex;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::models::{LabelEntry, Paper};

/// Load the curated label entries.
pub fn load_labels(path: &Path) -> Result<Vec<LabelEntry>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read labels dataset at {}", path.display()))?;
    let entries: Vec<LabelEntry> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse labels dataset at {}", path.display()))?;
    Ok(entries)
}

/// Load the paper catalog.
pub fn load_papers(path: &Path) -> Result<Vec<Paper>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read papers dataset at {}", path.display()))?;
    let papers: Vec<Paper> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse papers dataset at {}", path.display()))?;
    Ok(papers)
}

/// Load both datasets and build a fresh catalog snapshot.
pub fn load_catalog(config: &Config) -> Result<Catalog> {
    let entries = load_labels(&config.labels_path)?;
    let papers = load_papers(&config.papers_path)?;

    let entry_count = entries.len();
    let index = LabelIndex::build(entries);
    if index.len() < entry_count {
        warn!(
            skipped = entry_count - index.len(),
            "label entries without usable titles skipped"
        );
    }

    info!(
        labels = index.len(),
        papers = papers.len(),
        "datasets loaded"
    );

    Ok(Catalog::new(index, papers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_sparse_label_entries() {
        let file = write_temp(r#"[{"title": "Only A Title"}]"#);
        let entries = load_labels(file.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Only A Title");
        assert!(entries[0].label.is_none());
        assert!(entries[0].confidence.is_none());
    }

    #[test]
    fn missing_file_is_an_error_with_path() {
        let err = load_labels(Path::new("/nonexistent/labels.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/labels.json"));
    }

    #[test]
    fn malformed_json_is_an_error_with_path() {
        let file = write_temp("not json at all");
        let err = load_papers(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn null_fields_read_as_defaults() {
        let file = write_temp(
            r#"[{"title": "A Paper", "summary": null, "keywords": null, "year": null}]"#,
        );
        let papers = load_papers(file.path()).unwrap();
        assert_eq!(papers[0].summary, "");
        assert!(papers[0].keywords.is_empty());
        assert_eq!(papers[0].year, 0);
    }

    #[test]
    fn unknown_fields_pass_through() {
        let file = write_temp(r#"[{"title": "A Paper", "doi": "10.1000/x", "venue": "NeurIPS"}]"#);
        let papers = load_papers(file.path()).unwrap();
        assert_eq!(
            papers[0].extra.get("doi").and_then(|v| v.as_str()),
            Some("10.1000/x")
        );
        assert_eq!(
            papers[0].extra.get("venue").and_then(|v| v.as_str()),
            Some("NeurIPS")
        );
    }
}
