// Dataset status display — file locations, entry counts, label distribution.

use anyhow::Result;

use crate::config::Config;
use crate::dataset;
use crate::models::Label;

/// Display dataset status to the terminal.
pub fn show(config: &Config) -> Result<()> {
    if !config.labels_path.exists() {
        println!("Labels dataset: not found at {}", config.labels_path.display());
        println!("\nSet BYLINE_LABELS_PATH or place the file at the default path.");
        return Ok(());
    }
    if !config.papers_path.exists() {
        println!("Papers dataset: not found at {}", config.papers_path.display());
        println!("\nSet BYLINE_PAPERS_PATH or place the file at the default path.");
        return Ok(());
    }

    let labels_size = file_size(&config.labels_path);
    let papers_size = file_size(&config.papers_path);
    println!("Labels dataset: {} ({})", config.labels_path.display(), labels_size);
    println!("Papers dataset: {} ({})", config.papers_path.display(), papers_size);

    let catalog = dataset::load_catalog(config)?;

    // Curated entries by label
    let mut human = 0;
    let mut ai = 0;
    let mut mixed = 0;
    let mut unlabeled = 0;
    for (_, entry) in catalog.index.iter() {
        match entry.label {
            Some(Label::Human) => human += 1,
            Some(Label::Ai) => ai += 1,
            Some(Label::Mixed) => mixed += 1,
            None => unlabeled += 1,
        }
    }
    println!(
        "Curated entries: {} total ({} human, {} ai, {} mixed, {} unlabeled)",
        catalog.index.len(),
        human,
        ai,
        mixed,
        unlabeled
    );

    // Paper catalog span
    if catalog.papers.is_empty() {
        println!("Papers: none loaded");
        println!("  Add entries to the papers dataset to enable ranking");
    } else {
        let years: Vec<i32> = catalog
            .papers
            .iter()
            .map(|p| p.year)
            .filter(|&y| y != 0)
            .collect();
        match (years.iter().min(), years.iter().max()) {
            (Some(min), Some(max)) => {
                println!("Papers: {} ({}-{})", catalog.papers.len(), min, max);
            }
            _ => println!("Papers: {} (no years recorded)", catalog.papers.len()),
        }
    }

    println!(
        "Loaded at: {}",
        catalog.loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    Ok(())
}

fn file_size(path: &std::path::Path) -> String {
    std::fs::metadata(path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
