// Fixed-length overlapping windows over an encoded sequence.

use std::fmt;
use std::num::NonZeroUsize;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::DetectError;
use crate::text::vocabulary::{WordId, UNMATCHED};

/// Minimum run length, in tokens, that counts as a match. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameSize(NonZeroUsize);

impl FrameSize {
    /// Validate a frame size. Zero is rejected, never clamped.
    pub fn new(size: usize) -> Result<Self, DetectError> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or(DetectError::InvalidFrameSize(size))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for FrameSize {
    type Error = DetectError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl fmt::Display for FrameSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A window of `FrameSize` ids starting at `start`, borrowed from its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    pub start: usize,
    pub window: &'a [WordId],
}

impl Frame<'_> {
    /// False if any position in the window is `UNMATCHED`.
    pub fn is_matchable(&self) -> bool {
        !self.window.contains(&UNMATCHED)
    }

    /// Element-wise equality where `UNMATCHED` never equals anything,
    /// including another `UNMATCHED`.
    pub fn matches(&self, other: &Frame<'_>) -> bool {
        self.window.len() == other.window.len()
            && self
                .window
                .iter()
                .zip(other.window)
                .all(|(a, b)| a == b && *a != UNMATCHED)
    }

    /// Token positions this frame covers.
    pub fn span(&self) -> Range<usize> {
        self.start..self.start + self.window.len()
    }
}

/// Number of frames in a sequence of `len` ids: `len - F + 1`, or 0 if `len < F`.
pub fn frame_count(len: usize, size: FrameSize) -> usize {
    (len + 1).saturating_sub(size.get())
}

/// Valid frame start indices for a sequence of `len` ids.
pub fn frame_starts(len: usize, size: FrameSize) -> Range<usize> {
    0..frame_count(len, size)
}

/// All frames of `sequence`, in start order. Empty when the sequence is
/// shorter than the frame size.
pub fn frames(sequence: &[WordId], size: FrameSize) -> impl ExactSizeIterator<Item = Frame<'_>> {
    sequence
        .windows(size.get())
        .enumerate()
        .map(|(start, window)| Frame { start, window })
}
