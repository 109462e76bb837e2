// Markdown report generation.
//
// Writes a self-contained report: summary table, the list of matched
// passages, and both texts with matches wrapped in <mark> tags. Markdown
// renderers that allow inline HTML show the highlights; plain viewers still
// show the tags.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

use super::highlight::{matched_passages, Marker};
use super::summary::CoverageSummary;
use super::terminal::{render_reference, render_sample};
use crate::matching::Detection;

/// Build the report text.
pub fn build_report(detection: &Detection, summary: &CoverageSummary, find_quotes: bool) -> String {
    let mark = Marker::text("<mark>", "</mark>");
    let quote_mark = Marker::text("<mark class=\"quote\">", "</mark>");
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "# Copycheck Report\n");
    let _ = writeln!(
        out,
        "Generated {} with a frame size of {} words.\n",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        summary.frame_size
    );

    let _ = writeln!(out, "## Summary\n");
    let _ = writeln!(out, "| Document | Words | Covered | Covered % |");
    let _ = writeln!(out, "|----------|------:|--------:|----------:|");
    for (name, doc) in [("Reference", &summary.reference), ("Sample", &summary.sample)] {
        let _ = writeln!(
            out,
            "| {name} | {} | {} | {:.2} |",
            doc.words, doc.covered_tokens, doc.covered_percent
        );
    }
    let _ = writeln!(
        out,
        "\nThe sample is {:.2}% of the reference's length.\n",
        summary.sample_to_reference_percent
    );

    let _ = writeln!(out, "## Matched Passages\n");
    let passages = matched_passages(&detection.sample_tokens, &detection.sample_mask);
    if passages.is_empty() {
        let _ = writeln!(out, "No matching sequences found.\n");
    } else {
        for (i, passage) in passages.iter().enumerate() {
            let _ = writeln!(out, "{}. \"{}\"", i + 1, super::truncate_chars(passage, 200));
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "## Reference\n");
    let _ = writeln!(out, "{}\n", render_reference(detection, &mark));
    let _ = writeln!(out, "## Sample\n");
    let _ = writeln!(
        out,
        "{}",
        render_sample(detection, &mark, &quote_mark, find_quotes)
    );

    out
}

/// Write the report to `path`, creating parent directories as needed.
/// Returns the path written.
pub fn generate_report(
    detection: &Detection,
    summary: &CoverageSummary,
    find_quotes: bool,
    path: &str,
) -> Result<String> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating report directory {}", parent.display()))?;
        }
    }

    let report = build_report(detection, summary, find_quotes);
    std::fs::write(path, report).with_context(|| format!("writing report to {path}"))?;
    info!(path, passages = summary.passages, "Wrote markdown report");

    Ok(path.to_string())
}
