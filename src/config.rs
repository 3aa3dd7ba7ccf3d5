use std::env;
use std::path::PathBuf;

use anyhow::Result;

const DEFAULT_LABELS_PATH: &str = "data/labels.json";
const DEFAULT_PAPERS_PATH: &str = "data/papers.json";

/// Central configuration loaded from environment variables.
///
/// Both dataset paths have working-directory defaults. The .env file is
/// loaded automatically at startup via dotenvy.
pub struct Config {
    /// Curated labels dataset (BYLINE_LABELS_PATH)
    pub labels_path: PathBuf,
    /// Paper catalog dataset (BYLINE_PAPERS_PATH)
    pub papers_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Ok(Self {
            labels_path: env::var("BYLINE_LABELS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_LABELS_PATH)),
            papers_path: env::var("BYLINE_PAPERS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_PAPERS_PATH)),
        })
    }

    /// Check that the curated labels dataset exists.
    /// Call this before any operation that classifies text.
    pub fn require_labels(&self) -> Result<()> {
        if !self.labels_path.exists() {
            anyhow::bail!(
                "Labels dataset not found at {}.\n\
                 Set BYLINE_LABELS_PATH in your .env file, or place the file at the default path.\n\
                 See .env.example for the required variables.",
                self.labels_path.display()
            );
        }
        Ok(())
    }

    /// Check that the paper catalog exists.
    /// Call this before any ranking operation.
    pub fn require_papers(&self) -> Result<()> {
        if !self.papers_path.exists() {
            anyhow::bail!(
                "Papers dataset not found at {}.\n\
                 Set BYLINE_PAPERS_PATH in your .env file, or place the file at the default path.\n\
                 See .env.example for the required variables.",
                self.papers_path.display()
            );
        }
        Ok(())
    }
}
