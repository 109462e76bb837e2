// Coverage masks — project the match matrix onto token positions.
//
// A position is covered when at least one frame containing it took part in
// a matching pair. The matrix is first collapsed to one flag per frame,
// then each flagged frame marks its F positions.

use super::frames::FrameSize;
use super::matrix::MatchMatrix;

/// Mark every position covered by a flagged frame.
///
/// `frame_hits[j]` flags the frame starting at `j`, covering `[j, j + F)`.
/// The result always has length `len`, all false when nothing is flagged.
pub fn coverage(frame_hits: &[bool], len: usize, frame_size: FrameSize) -> Vec<bool> {
    let f = frame_size.get();
    let mut mask = Vec::with_capacity(len);
    // Positions still owed to the most recent flagged frame.
    let mut remaining = 0usize;

    for p in 0..len {
        if frame_hits.get(p).copied().unwrap_or(false) {
            remaining = f;
        }
        mask.push(remaining > 0);
        remaining = remaining.saturating_sub(1);
    }

    mask
}

/// Reduce a match matrix to `(reference_mask, sample_mask)`.
///
/// Each mask has the length of its document, including documents that were
/// too short to produce any frame.
pub fn reduce_masks(matrix: &MatchMatrix) -> (Vec<bool>, Vec<bool>) {
    let frame_size = matrix.frame_size();
    let reference_mask = coverage(&matrix.column_hits(), matrix.reference_len(), frame_size);
    let sample_mask = coverage(&matrix.row_hits(), matrix.sample_len(), frame_size);
    (reference_mask, sample_mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> FrameSize {
        FrameSize::new(n).unwrap()
    }

    #[test]
    fn test_single_frame_covers_its_span() {
        let mask = coverage(&[false, true, false, false], 6, size(3));
        assert_eq!(mask, vec![false, true, true, true, false, false]);
    }

    #[test]
    fn test_overlapping_frames_merge() {
        let mask = coverage(&[true, false, true, false], 5, size(2));
        assert_eq!(mask, vec![true, true, true, true, false]);
    }

    #[test]
    fn test_no_hits_all_false_with_length() {
        assert_eq!(coverage(&[], 3, size(4)), vec![false; 3]);
        assert!(coverage(&[], 0, size(1)).is_empty());
    }

    #[test]
    fn test_reduce_masks_uses_both_axes() {
        let mut m = MatchMatrix::new(4, 5, size(2));
        m.set(2, 0);
        let (reference, sample) = reduce_masks(&m);
        assert_eq!(reference, vec![true, true, false, false, false]);
        assert_eq!(sample, vec![false, false, true, true]);
    }

    #[test]
    fn test_reduce_masks_when_one_side_has_no_frames() {
        let m = MatchMatrix::new(1, 5, size(3));
        let (reference, sample) = reduce_masks(&m);
        assert_eq!(reference, vec![false; 5]);
        assert_eq!(sample, vec![false]);
    }
}
