// detect_matches — the single entry point tying the pipeline together.
//
//   tokenize -> encode (reference builds the vocabulary) -> frames
//   -> match matrix -> coverage masks
//
// Everything is created per call and dropped afterwards, so concurrent
// detections on unrelated document pairs share nothing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::frames::FrameSize;
use super::mask::reduce_masks;
use super::matcher::{FrameMatcher, RollingMatcher};
use crate::error::DetectError;
use crate::text::tokenizer::{tokenize, Token};
use crate::text::vocabulary::{WordId, Vocabulary};

/// A tokenized document and its encoding. Both sequences have equal length.
#[derive(Debug, Clone)]
pub struct Document {
    pub tokens: Vec<Token>,
    pub encoded: Vec<WordId>,
}

impl Document {
    /// Tokenize the reference and build the vocabulary from it.
    pub fn reference(text: &str) -> (Self, Vocabulary) {
        let tokens = tokenize(text);
        let (vocabulary, encoded) = Vocabulary::from_reference(&tokens);
        (Self { tokens, encoded }, vocabulary)
    }

    /// Tokenize the sample against an existing vocabulary.
    pub fn sample(text: &str, vocabulary: &Vocabulary) -> Self {
        let tokens = tokenize(text);
        let encoded = vocabulary.encode(&tokens);
        Self { tokens, encoded }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Result of one detection: both token sequences and their coverage masks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    pub frame_size: FrameSize,
    pub reference_tokens: Vec<Token>,
    pub sample_tokens: Vec<Token>,
    pub reference_mask: Vec<bool>,
    pub sample_mask: Vec<bool>,
}

impl Detection {
    /// True if any position in either document is covered.
    pub fn has_matches(&self) -> bool {
        self.reference_mask.iter().any(|&b| b) || self.sample_mask.iter().any(|&b| b)
    }
}

/// Find every run of at least `frame_size` tokens shared verbatim by the
/// reference and sample texts, using the default rolling matcher.
///
/// Fails only when `frame_size` is 0. Empty or short documents are not
/// errors: they produce all-false masks of the right length.
pub fn detect_matches(
    reference: &str,
    sample: &str,
    frame_size: usize,
) -> Result<Detection, DetectError> {
    detect_matches_with(reference, sample, frame_size, &RollingMatcher)
}

/// Same as [`detect_matches`] with a caller-chosen matcher backend.
pub fn detect_matches_with(
    reference: &str,
    sample: &str,
    frame_size: usize,
    matcher: &dyn FrameMatcher,
) -> Result<Detection, DetectError> {
    let frame_size = FrameSize::new(frame_size)?;

    let (reference, vocabulary) = Document::reference(reference);
    let sample = Document::sample(sample, &vocabulary);

    debug!(
        reference_tokens = reference.len(),
        sample_tokens = sample.len(),
        vocabulary = vocabulary.len(),
        "Encoded documents"
    );

    let matrix = matcher.match_matrix(&sample.encoded, &reference.encoded, frame_size);
    let (sample_frames, reference_frames) = matrix.shape();
    debug!(
        matcher = matcher.name(),
        sample_frames,
        reference_frames,
        matches = matrix.count_matches(),
        "Computed match matrix"
    );

    let (reference_mask, sample_mask) = reduce_masks(&matrix);

    Ok(Detection {
        frame_size,
        reference_tokens: reference.tokens,
        sample_tokens: sample.tokens,
        reference_mask,
        sample_mask,
    })
}
