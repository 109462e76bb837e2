// Colored terminal output for detections.
//
// Reference matches get one background colour, sample matches another, and
// sample matches inside quotation marks a third. main.rs delegates here.

use colored::Colorize;

use super::highlight::{color_name, paint_layers, render, ColorScheme, Marker};
use super::quotes::{layer_masks, quote_mask};
use super::summary::CoverageSummary;
use crate::matching::Detection;
use crate::text::tokenizer::{detokenize, Token};

/// Render the sample with unquoted and quoted matches in separate markers.
pub fn render_sample(
    detection: &Detection,
    match_marker: &Marker,
    quote_marker: &Marker,
    find_quotes: bool,
) -> String {
    let tokens = &detection.sample_tokens;
    let quotes = if find_quotes {
        quote_mask(tokens)
    } else {
        vec![false; tokens.len()]
    };
    let (unquoted, quoted) = layer_masks(&detection.sample_mask, &quotes);
    let paints = paint_layers(
        tokens.len(),
        &[(unquoted.as_slice(), match_marker), (quoted.as_slice(), quote_marker)],
    );
    render(tokens, &paints)
}

/// Render the reference with its matches highlighted.
pub fn render_reference(detection: &Detection, marker: &Marker) -> String {
    let paints = paint_layers(
        detection.reference_tokens.len(),
        &[(detection.reference_mask.as_slice(), marker)],
    );
    render(&detection.reference_tokens, &paints)
}

/// Produce the `(reference, sample)` texts to display. Without any match
/// both come back verbatim, with no markers at all.
pub fn detection_texts(
    detection: &Detection,
    scheme: &ColorScheme,
    find_quotes: bool,
) -> (String, String) {
    if !detection.has_matches() {
        return (
            detokenize(&detection.reference_tokens),
            detokenize(&detection.sample_tokens),
        );
    }

    let reference_marker = Marker::Ansi(scheme.reference);
    let sample_marker = Marker::Ansi(scheme.sample);
    let quote_marker = Marker::Ansi(scheme.quote);
    (
        render_reference(detection, &reference_marker),
        render_sample(detection, &sample_marker, &quote_marker, find_quotes),
    )
}

/// Display both texts, highlighted where they match. Texts are shown
/// unhighlighted when nothing matched.
pub fn display_detection(detection: &Detection, scheme: &ColorScheme, find_quotes: bool) {
    let matched = detection.has_matches();
    if !matched {
        println!(
            "\n{}",
            format!(
                "No matching sequences of {} or more words.",
                detection.frame_size
            )
            .dimmed()
        );
    }

    let (reference_text, sample_text) = detection_texts(detection, scheme, find_quotes);

    let reference_header = if matched {
        format!(
            "=== Matching sequences in the reference are highlighted {} ===",
            color_name(scheme.reference)
        )
    } else {
        "=== Reference ===".to_string()
    };
    println!("\n{}", reference_header.bold());
    println!("\n{reference_text}");

    let sample_header = if matched {
        format!(
            "=== Matching sequences in the sample are highlighted {} ===",
            color_name(scheme.sample)
        )
    } else {
        "=== Sample ===".to_string()
    };
    println!("\n{}", sample_header.bold());
    if matched && find_quotes {
        println!(
            "{}",
            format!("Quoted sequences are highlighted {}.", color_name(scheme.quote)).dimmed()
        );
    }
    println!("\n{sample_text}");
}

/// Display the coverage summary.
pub fn display_summary(summary: &CoverageSummary) {
    println!("\n{}", "=== Summary ===".bold());
    println!("  Frame size:        {} words", summary.frame_size);
    println!(
        "  Reference covered: {}/{} words ({:.2}%)",
        summary.reference.covered_tokens, summary.reference.words, summary.reference.covered_percent
    );
    println!(
        "  Sample covered:    {}/{} words ({:.2}%)",
        summary.sample.covered_tokens, summary.sample.words, summary.sample.covered_percent
    );
    println!("  Matched passages:  {}", summary.passages);
    println!(
        "\n  The sample document contains {} words, which is {:.2}% of the reference.",
        summary.sample.words, summary.sample_to_reference_percent
    );
}

/// Display a tokenization, one token per line.
pub fn display_tokens(tokens: &[Token]) {
    println!(
        "  {:>5}  {:<24} {}",
        "#".dimmed(),
        "Word".dimmed(),
        "Surface".dimmed()
    );
    println!("  {}", "-".repeat(60).dimmed());
    for (i, token) in tokens.iter().enumerate() {
        let word = if token.is_separator_only() {
            "(none)".dimmed().to_string()
        } else {
            token.word.clone()
        };
        println!(
            "  {:>5}  {:<24} {}",
            i,
            word,
            super::truncate_chars(&format!("{:?}", token.text), 60)
        );
    }
    println!("\n  {} tokens", tokens.len());
}
