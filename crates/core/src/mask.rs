//! Mask module - boolean footprint of the falling piece
//!
//! A mask has the same geometry as the board, so collision is a plain
//! cell-wise AND and merging is a cell-wise OR. Storage is a flat row-major
//! vector, like the board.

use crate::pieces::{pattern_size, Pattern};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Mask {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

/// Overlap of a length-`len` axis with itself shifted by `delta`:
/// (source start, destination start, count), or None if nothing survives.
fn overlap(len: usize, delta: isize) -> Option<(usize, usize, usize)> {
    let shift = delta.unsigned_abs();
    if shift >= len {
        return None;
    }
    let count = len - shift;
    if delta >= 0 {
        Some((0, shift, count))
    } else {
        Some((shift, 0, count))
    }
}

impl Mask {
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Stamp `pattern` with its top-left corner at `anchor`.
    ///
    /// Returns None when any part of the pattern's bounding box would fall
    /// outside the mask.
    pub fn with_pattern(
        rows: usize,
        cols: usize,
        pattern: Pattern,
        anchor: (isize, isize),
    ) -> Option<Self> {
        let (height, width) = pattern_size(pattern);
        let (row, col) = anchor;
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row + height > rows || col + width > cols {
            return None;
        }

        let mut mask = Self::empty(rows, cols);
        for (dr, line) in pattern.iter().enumerate() {
            for (dc, &v) in line.iter().enumerate() {
                if v != 0 {
                    mask.cells[(row + dr) * cols + col + dc] = true;
                }
            }
        }
        Some(mask)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Whether (row, col) is set; out of bounds reads as unset
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.index(row, col).map(|i| self.cells[i]).unwrap_or(false)
    }

    /// Copy-shift by (d_row, d_col).
    ///
    /// Cells pushed past an edge are dropped; nothing wraps. Whether the
    /// result is an acceptable move is decided by collision, not here.
    pub fn shifted(&self, d_row: isize, d_col: isize) -> Mask {
        let mut out = Mask::empty(self.rows, self.cols);
        let (Some((src_row, dst_row, n_rows)), Some((src_col, dst_col, n_cols))) =
            (overlap(self.rows, d_row), overlap(self.cols, d_col))
        else {
            return out;
        };

        for i in 0..n_rows {
            let src = (src_row + i) * self.cols + src_col;
            let dst = (dst_row + i) * self.cols + dst_col;
            out.cells[dst..dst + n_cols].copy_from_slice(&self.cells[src..src + n_cols]);
        }
        out
    }

    /// Whether any cell of `row` is set
    pub fn occupies_row(&self, row: usize) -> bool {
        if row >= self.rows {
            return false;
        }
        let start = row * self.cols;
        self.cells[start..start + self.cols].iter().any(|&v| v)
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&v| v).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|&v| v)
    }

    /// Set cells as (row, col), row-major order
    pub fn iter_filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    /// Top-left corner of the set cells' bounding box
    pub fn top_left(&self) -> Option<(usize, usize)> {
        let mut iter = self.iter_filled();
        let first = iter.next()?;
        Some(iter.fold(first, |(r, c), (row, col)| (r.min(row), c.min(col))))
    }
}
