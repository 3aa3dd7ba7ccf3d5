use anyhow::Result;
use clap::{Parser, Subcommand};

use byline::config::Config;

/// Byline: authorship screening and topic ranking for paper catalogs.
///
/// Labels short academic text as human-, AI-, or mixed-authored using a
/// curated dataset with a rule-based fallback, and ranks a paper catalog
/// by topic relevance while filtering out unwanted labels.
#[derive(Parser)]
#[command(name = "byline", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a title or abstract as human, ai, or mixed
    Classify {
        /// The text to classify
        text: String,

        /// Print the raw JSON response instead of the formatted view
        #[arg(long)]
        json: bool,
    },

    /// Rank the paper catalog, filtered to human (and optionally mixed) papers
    Rank {
        /// Topic to rank against (omit to order newest first)
        #[arg(long, default_value = "")]
        topic: String,

        /// Maximum number of results
        #[arg(long, default_value = "5")]
        limit: usize,

        /// Also include mixed-authorship papers (ai is always excluded)
        #[arg(long)]
        include_mixed: bool,

        /// Print the raw JSON response instead of the formatted view
        #[arg(long)]
        json: bool,
    },

    /// Show dataset status (paths, sizes, label distribution)
    Status,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("byline=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { text, json } => {
            let config = Config::load()?;
            config.require_labels()?;

            let entries = byline::dataset::load_labels(&config.labels_path)?;
            let index = byline::catalog::index::LabelIndex::build(entries);
            let cues = byline::scoring::heuristic::CueLexicon::default();

            let result = byline::pipeline::classify::classify_text(&index, &cues, &text)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                byline::output::terminal::display_classification(&result);
            }
        }

        Commands::Rank {
            topic,
            limit,
            include_mixed,
            json,
        } => {
            let config = Config::load()?;
            config.require_labels()?;
            config.require_papers()?;

            let catalog = byline::dataset::load_catalog(&config)?;
            let cues = byline::scoring::heuristic::CueLexicon::default();
            let request =
                byline::pipeline::rank::RankRequest::new(topic.trim(), limit, include_mixed);

            let result = byline::pipeline::rank::rank_papers(
                &catalog.papers,
                &catalog.index,
                &cues,
                &request,
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                byline::output::terminal::display_ranking(&result);
            }
        }

        Commands::Status => {
            let config = Config::load()?;
            byline::status::show(&config)?;
        }
    }

    Ok(())
}
