// Frame matcher trait — swap-ready abstraction over the pairwise comparison.
//
// Every sample frame is compared against every reference frame; backends
// differ only in how they get there. The default rolling matcher reuses the
// previous diagonal cell so each (i, j) costs O(1). The parallel matcher
// (feature `parallel`) splits the matrix by sample-frame rows across the
// rayon pool. Both must produce identical matrices.

use super::frames::FrameSize;
use super::matrix::MatchMatrix;
use crate::text::vocabulary::{WordId, UNMATCHED};

/// Trait for computing the exhaustive sample × reference match matrix.
pub trait FrameMatcher: Send + Sync {
    /// Short name for logs and summaries.
    fn name(&self) -> &'static str;

    /// Compare every sample frame with every reference frame.
    fn match_matrix(
        &self,
        sample: &[WordId],
        reference: &[WordId],
        frame_size: FrameSize,
    ) -> MatchMatrix;
}

/// Dynamic-programming matcher.
///
/// `run[b + 1]` holds the length of the common run of matchable ids ending at
/// the current sample position and reference position `b`. A frame pair
/// matches exactly when the run ending at its last cell is at least `F`
/// long, so the F−1 comparisons shared with the previous diagonal cell are
/// never repeated.
#[derive(Debug, Clone, Copy, Default)]
pub struct RollingMatcher;

impl FrameMatcher for RollingMatcher {
    fn name(&self) -> &'static str {
        "rolling"
    }

    fn match_matrix(
        &self,
        sample: &[WordId],
        reference: &[WordId],
        frame_size: FrameSize,
    ) -> MatchMatrix {
        let mut matrix = MatchMatrix::new(sample.len(), reference.len(), frame_size);
        let (rows, cols) = matrix.shape();
        if rows == 0 || cols == 0 {
            return matrix;
        }

        let f = frame_size.get();
        // Slot 0 stands for the empty prefix and stays 0.
        let mut prev = vec![0usize; reference.len() + 1];
        let mut run = vec![0usize; reference.len() + 1];

        for (a, &s) in sample.iter().enumerate() {
            for (b, &r) in reference.iter().enumerate() {
                run[b + 1] = if s == r && s != UNMATCHED {
                    prev[b] + 1
                } else {
                    0
                };
                if run[b + 1] >= f {
                    matrix.set(a + 1 - f, b + 1 - f);
                }
            }
            std::mem::swap(&mut prev, &mut run);
        }

        matrix
    }
}

/// Row-parallel matcher backed by rayon.
///
/// Each sample frame is compared directly against every reference frame.
/// Frames containing `UNMATCHED` are skipped as a whole, and the first
/// element is checked before the rest of the window.
#[cfg(feature = "parallel")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelMatcher;

#[cfg(feature = "parallel")]
impl FrameMatcher for ParallelMatcher {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn match_matrix(
        &self,
        sample: &[WordId],
        reference: &[WordId],
        frame_size: FrameSize,
    ) -> MatchMatrix {
        use super::frames::{frames, Frame};

        let reference_frames: Vec<Frame<'_>> = frames(reference, frame_size).collect();
        let sample_frames: Vec<Frame<'_>> = frames(sample, frame_size).collect();

        let mut matrix = MatchMatrix::new(sample.len(), reference.len(), frame_size);
        matrix.fill_rows_parallel(|i, row| {
            let s = &sample_frames[i];
            if !s.is_matchable() {
                return;
            }
            for (cell, r) in row.iter_mut().zip(&reference_frames) {
                *cell = s.window[0] == r.window[0] && s.matches(r);
            }
        });

        matrix
    }
}
