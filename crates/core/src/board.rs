//! Board module - settled cells and permanent walls
//!
//! The board is a `grid_rows x grid_cols` grid (12x12 by default) stored as a
//! flat row-major array for cache locality. The leftmost and rightmost `pad`
//! columns are walls: they are filled on construction and can never be
//! emptied, which is what keeps pieces inside the interior without any
//! explicit bounds check during moves.
//!
//! Coordinates are (row, col) with row 0 at the top of the hidden spawn
//! buffer.

use crate::geometry::Geometry;
use crate::mask::Mask;
use crate::types::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    geometry: Geometry,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with both walls filled
    pub fn new(geometry: Geometry) -> Self {
        let mut cells = vec![Cell::Empty; geometry.grid_rows * geometry.grid_cols];
        for row in 0..geometry.grid_rows {
            for col in 0..geometry.grid_cols {
                if geometry.is_wall_col(col) {
                    cells[row * geometry.grid_cols + col] = Cell::Filled;
                }
            }
        }
        Self { geometry, cells }
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.geometry.grid_rows || col >= self.geometry.grid_cols {
            return None;
        }
        Some(row * self.geometry.grid_cols + col)
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn rows(&self) -> usize {
        self.geometry.grid_rows
    }

    pub fn cols(&self) -> usize {
        self.geometry.grid_cols
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Set an interior cell.
    ///
    /// Returns false if out of bounds or if the target is a wall: walls stay
    /// filled for the lifetime of the board.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        if self.geometry.is_wall_col(col) {
            return false;
        }
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Filled and in bounds
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Cell::Filled))
    }

    /// Every cell of the row is filled, walls included
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.rows() {
            return false;
        }
        let start = row * self.cols();
        self.cells[start..start + self.cols()]
            .iter()
            .all(|cell| cell.is_filled())
    }

    /// True if any cell is filled in both the mask and the board
    pub fn intersects(&self, mask: &Mask) -> bool {
        mask.iter_filled()
            .any(|(row, col)| self.is_filled(row, col))
    }

    /// OR the mask into the board
    pub fn merge(&mut self, mask: &Mask) {
        for (row, col) in mask.iter_filled() {
            if let Some(i) = self.index(row, col) {
                self.cells[i] = Cell::Filled;
            }
        }
    }

    /// Remove one row: everything above shifts down by one and the interior
    /// of row 0 is emptied. Walls are untouched because every row carries
    /// identical wall cells.
    pub fn clear_row(&mut self, row: usize) {
        if row >= self.rows() {
            return;
        }
        let width = self.cols();

        // copy_within handles the overlapping ranges
        for r in (1..=row).rev() {
            let src = (r - 1) * width;
            self.cells.copy_within(src..src + width, r * width);
        }

        for col in self.geometry.interior() {
            self.cells[col] = Cell::Empty;
        }
    }

    /// Clear every full row and return how many were cleared.
    ///
    /// Rows are scanned top to bottom. Clearing a row only moves rows above
    /// it, so rows still to be scanned keep their index.
    pub fn check_lines(&mut self) -> u32 {
        let mut cleared = 0;
        for row in 0..self.rows() {
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared += 1;
            }
        }
        cleared
    }

    /// Any interior cell filled in the overflow rows (game over)
    pub fn overflowed(&self) -> bool {
        self.geometry.overflow_rows().any(|row| {
            self.geometry
                .interior()
                .any(|col| self.is_filled(row, col))
        })
    }

    /// Every wall cell is filled
    pub fn walls_intact(&self) -> bool {
        (0..self.rows()).all(|row| {
            (0..self.cols())
                .filter(|&col| self.geometry.is_wall_col(col))
                .all(|col| self.is_filled(row, col))
        })
    }

    /// Number of filled interior cells
    pub fn filled_interior(&self) -> usize {
        (0..self.rows())
            .map(|row| {
                self.geometry
                    .interior()
                    .filter(|&col| self.is_filled(row, col))
                    .count()
            })
            .sum()
    }

    /// Fill the interior of `row` except the listed columns.
    ///
    /// Used by hosts and tests to stage positions.
    pub fn fill_row_except(&mut self, row: usize, holes: &[usize]) {
        for col in self.geometry.interior() {
            let cell = if holes.contains(&col) {
                Cell::Empty
            } else {
                Cell::Filled
            };
            self.set(row, col, cell);
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Board rows as strings, `#` filled and `.` empty (walls included)
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols())
            .map(|row| {
                row.iter()
                    .map(|cell| if cell.is_filled() { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Geometry::REFERENCE)
    }
}
