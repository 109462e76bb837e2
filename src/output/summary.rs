// Coverage summary — the numbers shown under the highlighted texts.

use serde::{Deserialize, Serialize};

use super::highlight::matched_passages;
use crate::matching::Detection;
use crate::text::tokenizer::Token;

/// Coverage figures for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentCoverage {
    pub tokens: usize,
    /// Tokens carrying a word (separator-only tokens excluded)
    pub words: usize,
    pub covered_tokens: usize,
    /// Share of word-bearing tokens that are covered, 0-100
    pub covered_percent: f64,
}

impl DocumentCoverage {
    fn compute(tokens: &[Token], mask: &[bool]) -> Self {
        let words = tokens.iter().filter(|t| !t.is_separator_only()).count();
        let covered_tokens = mask.iter().filter(|&&b| b).count();
        Self {
            tokens: tokens.len(),
            words,
            covered_tokens,
            covered_percent: percent(covered_tokens, words),
        }
    }
}

/// Summary of a detection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageSummary {
    pub frame_size: usize,
    pub reference: DocumentCoverage,
    pub sample: DocumentCoverage,
    /// Distinct highlighted runs in the sample
    pub passages: usize,
    /// Sample length as a percentage of the reference, in words
    pub sample_to_reference_percent: f64,
}

impl CoverageSummary {
    pub fn from_detection(detection: &Detection) -> Self {
        let reference =
            DocumentCoverage::compute(&detection.reference_tokens, &detection.reference_mask);
        let sample = DocumentCoverage::compute(&detection.sample_tokens, &detection.sample_mask);
        let passages = matched_passages(&detection.sample_tokens, &detection.sample_mask).len();
        let sample_to_reference_percent = percent(sample.words, reference.words);

        Self {
            frame_size: detection.frame_size.get(),
            reference,
            sample,
            passages,
            sample_to_reference_percent,
        }
    }
}

/// `part / whole * 100` rounded to two decimals, 0 when `whole` is 0.
fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 10_000.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::detect_matches;

    #[test]
    fn test_percent() {
        assert_eq!(percent(1, 3), 33.33);
        assert_eq!(percent(0, 0), 0.0);
        assert_eq!(percent(4, 4), 100.0);
    }

    #[test]
    fn test_summary_counts() {
        let d = detect_matches("The fog of San Francisco", "Hedgehog and the Fog", 2).unwrap();
        let s = CoverageSummary::from_detection(&d);
        assert_eq!(s.frame_size, 2);
        assert_eq!(s.reference.covered_tokens, 2);
        assert_eq!(s.reference.covered_percent, 40.0);
        assert_eq!(s.sample.covered_percent, 50.0);
        assert_eq!(s.passages, 1);
        assert_eq!(s.sample_to_reference_percent, 80.0);
    }
}
