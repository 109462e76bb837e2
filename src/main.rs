use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use tracing::{info, warn};

use copycheck::config::{self, MatcherBackend, Scheme};
use copycheck::matching::{detect_matches_with, Detection};
use copycheck::output::highlight::ColorScheme;
use copycheck::output::summary::CoverageSummary;
use copycheck::output::{markdown, terminal};
use copycheck::text::normalize::normalize_punctuation;
use copycheck::text::tokenizer::tokenize;

/// Copycheck: find verbatim reuse between two texts.
///
/// Highlights every run of at least N consecutive words that appears
/// identically in both the reference and the sample.
#[derive(Parser)]
#[command(name = "copycheck", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare a sample against a reference and highlight shared passages
    Check {
        /// Reference text file (`-` for stdin)
        reference: String,

        /// Sample text file (`-` for stdin)
        sample: String,

        /// Minimum number of consecutive words that counts as a match
        /// (default: COPYCHECK_FRAME_SIZE or 11)
        #[arg(short, long)]
        frame_size: Option<usize>,

        /// Do not highlight quoted matches separately
        #[arg(long)]
        no_quotes: bool,

        /// Highlight colour scheme
        #[arg(long, value_enum)]
        scheme: Option<Scheme>,

        /// Frame matcher backend
        #[arg(long, value_enum)]
        matcher: Option<MatcherBackend>,

        /// Print the detection and summary as JSON instead of highlighted text
        #[arg(long)]
        json: bool,

        /// Also write a markdown report to this path
        #[arg(long)]
        report: Option<String>,
    },

    /// Show how a text is tokenized
    Tokens {
        /// Text file (`-` for stdin)
        file: String,
    },
}

/// JSON shape printed by `check --json`.
#[derive(Serialize)]
struct JsonOutput<'a> {
    detection: &'a Detection,
    summary: &'a CoverageSummary,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr and stay quiet by default so they never interleave
    // with the highlighted texts.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("copycheck=warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            reference,
            sample,
            frame_size,
            no_quotes,
            scheme,
            matcher,
            json,
            report,
        } => {
            let config = config::Config::load()?;

            if reference == "-" && sample == "-" {
                anyhow::bail!("Only one of the reference and sample can be read from stdin.");
            }

            let frame_size = frame_size.unwrap_or(config.frame_size);
            let find_quotes = config.quotes && !no_quotes;
            let scheme = ColorScheme::for_scheme(scheme.unwrap_or(config.scheme));
            let matcher = config::create_matcher(matcher.unwrap_or(config.matcher))?;

            let reference_text = normalize_punctuation(&read_input(&reference)?);
            let sample_text = normalize_punctuation(&read_input(&sample)?);

            info!(
                reference = %reference,
                sample = %sample,
                frame_size,
                matcher = matcher.name(),
                "Running detection"
            );

            let detection =
                detect_matches_with(&reference_text, &sample_text, frame_size, matcher.as_ref())?;
            let summary = CoverageSummary::from_detection(&detection);

            if json {
                let output = JsonOutput {
                    detection: &detection,
                    summary: &summary,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                if frame_size > summary.sample.words {
                    warn!(frame_size, words = summary.sample.words, "Frame size exceeds sample length");
                    println!(
                        "{} The frame size {} is higher than the sample's word count of {}.",
                        "Warning:".yellow(),
                        frame_size,
                        summary.sample.words
                    );
                }
                terminal::display_detection(&detection, &scheme, find_quotes);
                terminal::display_summary(&summary);
            }

            if let Some(path) = report {
                let written = markdown::generate_report(&detection, &summary, find_quotes, &path)?;
                if !json {
                    println!(
                        "\n{}",
                        format!("Markdown report saved to: {written}").bold()
                    );
                }
            }
        }

        Commands::Tokens { file } => {
            let text = normalize_punctuation(&read_input(&file)?);
            let tokens = tokenize(&text);
            terminal::display_tokens(&tokens);
        }
    }

    Ok(())
}

/// Read a whole document from a file, or from stdin when `path` is `-`.
fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        eprintln!(
            "{}",
            "Reading from stdin. Ctrl-D (Unix) or Ctrl-Z (Windows) to finish.".dimmed()
        );
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {path}"))
    }
}
