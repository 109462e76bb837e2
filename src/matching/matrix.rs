// MatchMatrix — the (sample frames × reference frames) boolean result.

use super::frames::{frame_count, FrameSize};

/// Row-major boolean matrix: entry (i, j) is true iff sample frame `i`
/// equals reference frame `j`.
///
/// The document lengths are kept alongside the cells so the mask reducer can
/// size its output even when one side has no frames at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchMatrix {
    frame_size: FrameSize,
    sample_len: usize,
    reference_len: usize,
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl MatchMatrix {
    /// An all-false matrix for documents of the given lengths.
    pub fn new(sample_len: usize, reference_len: usize, frame_size: FrameSize) -> Self {
        let rows = frame_count(sample_len, frame_size);
        let cols = frame_count(reference_len, frame_size);
        Self {
            frame_size,
            sample_len,
            reference_len,
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Fill every row on the rayon pool. `fill` receives the sample frame
    /// index and that row's cells, one per reference frame, all false.
    #[cfg(feature = "parallel")]
    pub fn fill_rows_parallel<F>(&mut self, fill: F)
    where
        F: Fn(usize, &mut [bool]) + Send + Sync,
    {
        use rayon::prelude::*;

        if self.cols == 0 {
            return;
        }
        self.cells
            .par_chunks_mut(self.cols)
            .enumerate()
            .for_each(|(i, row)| fill(i, row));
    }

    pub fn frame_size(&self) -> FrameSize {
        self.frame_size
    }

    pub fn sample_len(&self) -> usize {
        self.sample_len
    }

    pub fn reference_len(&self) -> usize {
        self.reference_len
    }

    /// (number of sample frames, number of reference frames)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, i: usize, j: usize) -> bool {
        i < self.rows && j < self.cols && self.cells[i * self.cols + j]
    }

    /// Mark (i, j) as a matching pair. Out-of-range coordinates are ignored.
    pub fn set(&mut self, i: usize, j: usize) {
        if i < self.rows && j < self.cols {
            self.cells[i * self.cols + j] = true;
        }
    }

    pub fn any(&self) -> bool {
        self.cells.iter().any(|&c| c)
    }

    pub fn count_matches(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    fn row(&self, i: usize) -> &[bool] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// Per sample frame: does it match any reference frame?
    pub fn row_hits(&self) -> Vec<bool> {
        (0..self.rows)
            .map(|i| self.row(i).iter().any(|&c| c))
            .collect()
    }

    /// Per reference frame: does any sample frame match it?
    pub fn column_hits(&self) -> Vec<bool> {
        let mut hits = vec![false; self.cols];
        for i in 0..self.rows {
            for (hit, &cell) in hits.iter_mut().zip(self.row(i)) {
                *hit |= cell;
            }
        }
        hits
    }

    /// All matching (sample frame, reference frame) pairs in row-major order.
    pub fn matching_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c)
            .map(move |(k, _)| (k / cols, k % cols))
    }
}
