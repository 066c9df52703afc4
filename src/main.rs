use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

mod config;

use concord::corpus::Corpus;
use concord::{output, pipeline};

/// Concord: phrase-frequency and paragraph-similarity comparison for two
/// text corpora.
///
/// Computes the most frequent word-phrases of lengths 1..=10 in each corpus,
/// and ranks each corpus's paragraphs by vocabulary overlap with a target
/// text.
#[derive(Parser)]
#[command(name = "concord", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare the most frequent phrases of both corpora
    Phrases {
        /// First corpus file
        first: PathBuf,

        /// Second corpus file
        second: PathBuf,

        /// Longest phrase length to sweep (default: 10, or CONCORD_MAX_PHRASE_LEN)
        #[arg(long)]
        max_len: Option<usize>,

        /// Entries kept per ranked list (default: 10, or CONCORD_TOP_K)
        #[arg(long)]
        top: Option<usize>,

        /// Emit results as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Rank paragraphs of both corpora by similarity to a target text
    Similar {
        /// First corpus file
        first: PathBuf,

        /// Second corpus file
        second: PathBuf,

        /// Target text whose vocabulary is the similarity basis
        #[arg(long)]
        target: PathBuf,

        /// Entries kept per ranked list (default: 10, or CONCORD_TOP_K)
        #[arg(long)]
        top: Option<usize>,

        /// Emit results as JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Run both analyses and write a combined plain-text report
    Report {
        /// First corpus file
        first: PathBuf,

        /// Second corpus file
        second: PathBuf,

        /// Target text whose vocabulary is the similarity basis
        #[arg(long)]
        target: PathBuf,

        /// Report file path (default: output/concord-report.txt, or CONCORD_REPORT_PATH)
        #[arg(long)]
        out: Option<String>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("concord=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = config::Config::load()?;

    match cli.command {
        Commands::Phrases {
            first,
            second,
            max_len,
            top,
            json,
        } => {
            let first = Corpus::load(&first);
            let second = Corpus::load(&second);
            let max_len = max_len.unwrap_or(config.max_phrase_len);
            let top = top.unwrap_or(config.top_k);

            let comparison = pipeline::phrases::run(&first, &second, max_len, top);

            if json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                output::terminal::display_phrase_comparison(&comparison);
            }
        }

        Commands::Similar {
            first,
            second,
            target,
            top,
            json,
        } => {
            let first = Corpus::load(&first);
            let second = Corpus::load(&second);
            let target = Corpus::load(&target);
            let top = top.unwrap_or(config.top_k);

            let comparison = pipeline::similarity::run(&first, &second, &target, top);

            if json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                output::terminal::display_similarity(&comparison);
            }
        }

        Commands::Report {
            first,
            second,
            target,
            out,
        } => {
            let first = Corpus::load(&first);
            let second = Corpus::load(&second);
            let target = Corpus::load(&target);
            let out = out.unwrap_or(config.report_path);

            println!(
                "Analyzing {} and {} against {}...",
                first.name, second.name, target.name
            );

            let phrases = pipeline::phrases::run(&first, &second, config.max_phrase_len, config.top_k);
            let similarity = pipeline::similarity::run(&first, &second, &target, config.top_k);

            let report_path = output::report::generate_report(&phrases, &similarity, &out)?;

            println!("\n{}", format!("Report saved to: {report_path}").bold());
        }
    }

    Ok(())
}
