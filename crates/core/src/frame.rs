//! Frame buffer - the engine's renderable output
//!
//! A small grid of non-negative integers, one per LED. The engine writes the
//! sum of board and piece occupancy (0, 1, rarely 2); mapping those values to
//! brightness levels is the display's job.

use serde::{Deserialize, Serialize};

use crate::types::{DISPLAY_COLS, DISPLAY_ROWS};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameBuffer {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl FrameBuffer {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Build from row slices. Short rows are zero-padded, long rows truncated.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Self {
        let cols = rows.iter().map(|r| r.as_ref().len()).max().unwrap_or(0);
        let mut fb = Self::new(rows.len(), cols);
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.as_ref().iter().enumerate() {
                fb.set(r, c, v);
            }
        }
        fb
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn idx(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.idx(row, col).map(|i| self.cells[i])
    }

    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        if let Some(i) = self.idx(row, col) {
            self.cells[i] = value;
        }
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Row `row` as a slice. Panics if out of range.
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.iter_rows().map(|r| r.to_vec()).collect()
    }

    /// Number of non-zero cells
    pub fn lit(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new(DISPLAY_ROWS, DISPLAY_COLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_8x8_dark() {
        let fb = FrameBuffer::default();
        assert_eq!((fb.rows(), fb.cols()), (8, 8));
        assert_eq!(fb.lit(), 0);
        assert_eq!(fb.iter_rows().count(), 8);
    }

    #[test]
    fn from_rows_pads_short_rows() {
        let fb = FrameBuffer::from_rows(&[vec![1, 2, 3], vec![4]]);
        assert_eq!((fb.rows(), fb.cols()), (2, 3));
        assert_eq!(fb.row(1), &[4, 0, 0]);
        assert_eq!(fb.get(0, 2), Some(3));
        assert_eq!(fb.get(2, 0), None);
    }

    #[test]
    fn set_out_of_bounds_is_ignored() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set(5, 5, 9);
        assert_eq!(fb.lit(), 0);
    }
}
