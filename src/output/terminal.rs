// Colored terminal output for classification results and ranked papers.
//
// All terminal-specific formatting lives here: colors, tables, spacing.
// The main.rs command arms delegate to these functions.

use colored::Colorize;

use crate::models::{Classification, RankingResult};

/// Display a single classification result.
pub fn display_classification(result: &Classification) {
    println!("\n{}", "=== Authorship Screening ===".bold());
    println!("  Label: {}", colorize_label(result.label.as_str()));
    println!("  Confidence: {:.2}", result.confidence);
    println!("  {}", result.explanation.dimmed());
}

/// Display a ranked paper list.
pub fn display_ranking(result: &RankingResult) {
    if result.results.is_empty() {
        println!("No papers passed the label filter.");
        println!("{}", "Try --include-mixed, or a different topic.".dimmed());
        return;
    }

    let heading = if result.topic.is_empty() {
        format!("=== Ranked Papers ({} results, newest first) ===", result.count)
    } else {
        format!(
            "=== Ranked Papers for \"{}\" ({} results) ===",
            result.topic, result.count
        )
    };
    println!("\n{}", heading.bold());
    println!();

    // Header
    println!(
        "  {:>4}  {:<48} {:>5}  {:<6}",
        "Rank".dimmed(),
        "Title".dimmed(),
        "Year".dimmed(),
        "Label".dimmed(),
    );
    println!("  {}", "-".repeat(70).dimmed());

    for (i, labeled) in result.results.iter().enumerate() {
        let title = super::truncate_chars(&labeled.paper.title, 45);
        println!(
            "  {:>4}. {:<48} {:>5}  {:<6}",
            i + 1,
            title,
            labeled.paper.year,
            colorize_label(labeled.label.as_str()),
        );
        if let Some(explanation) = &labeled.explanation {
            println!("        {}", explanation.dimmed());
        }
    }
    println!();
}

/// Colorize an authorship label string.
fn colorize_label(label: &str) -> colored::ColoredString {
    match label {
        "ai" => label.red(),
        "mixed" => label.yellow(),
        "human" => label.green(),
        _ => label.dimmed(),
    }
}
