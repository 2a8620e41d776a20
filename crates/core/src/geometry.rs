//! Grid geometry - sizes of the grid, its walls and the visible window
//!
//! Everything that depends on the shape of the playfield reads it from a
//! [`Geometry`] value instead of the raw constants, so alternative panel sizes
//! can be simulated. A geometry must pass [`Geometry::validate`] before an
//! engine is built on it.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pieces;
use crate::types::{DISPLAY_ROWS, GRAVITY_TIME, GRID_COLS, GRID_ROWS, PAD};

/// Reasons a geometry cannot host a game.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("grid has {grid_cols} columns, which leaves no interior between two walls of width {pad}")]
    NoInterior { grid_cols: usize, pad: usize },
    #[error("walls must be at least one column wide (got pad = 0)")]
    NoWalls,
    #[error("interior is {interior} columns wide but the widest spawn shape needs {needed}")]
    InteriorTooNarrow { interior: usize, needed: usize },
    #[error("grid has {grid_rows} rows but the tallest shape needs {needed}")]
    GridTooShort { grid_rows: usize, needed: usize },
    #[error("visible window must have between 1 and {max} rows (got {display_rows})")]
    BadDisplayRows { display_rows: usize, max: usize },
    #[error("gravity interval must be at least one frame")]
    ZeroGravityTime,
}

/// Playfield geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Geometry {
    /// Total rows, hidden spawn buffer included
    pub grid_rows: usize,
    /// Total columns, both walls included
    pub grid_cols: usize,
    /// Wall width on each side
    pub pad: usize,
    /// Visible rows at the bottom of the grid
    pub display_rows: usize,
    /// Frames between forced gravity steps
    pub gravity_time: u32,
}

impl Geometry {
    /// The 12x12 grid shown on an 8x8 panel.
    pub const REFERENCE: Geometry = Geometry {
        grid_rows: GRID_ROWS,
        grid_cols: GRID_COLS,
        pad: PAD,
        display_rows: DISPLAY_ROWS,
        gravity_time: GRAVITY_TIME,
    };

    /// Number of non-wall columns (also the visible width)
    pub fn interior_cols(&self) -> usize {
        self.grid_cols.saturating_sub(2 * self.pad)
    }

    pub fn display_cols(&self) -> usize {
        self.interior_cols()
    }

    /// Rows above the visible window
    pub fn hidden_rows(&self) -> usize {
        self.grid_rows.saturating_sub(self.display_rows)
    }

    /// First grid row shown on the panel
    pub fn first_visible_row(&self) -> usize {
        self.hidden_rows()
    }

    /// Columns that can hold settled blocks and be cleared
    pub fn interior(&self) -> Range<usize> {
        self.pad..self.grid_cols.saturating_sub(self.pad)
    }

    pub fn is_wall_col(&self, col: usize) -> bool {
        col < self.pad || col >= self.grid_cols.saturating_sub(self.pad)
    }

    /// Rows in which a settled cell ends the game.
    ///
    /// This is the hidden buffer plus the top visible row: a stack that
    /// reaches the top edge of the panel is already game over.
    pub fn overflow_rows(&self) -> Range<usize> {
        0..(self.hidden_rows() + 1).min(self.grid_rows)
    }

    /// Check that a game can be played on this geometry.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.pad == 0 {
            return Err(GeometryError::NoWalls);
        }
        if self.grid_cols < 2 * self.pad + 1 {
            return Err(GeometryError::NoInterior {
                grid_cols: self.grid_cols,
                pad: self.pad,
            });
        }
        let needed = pieces::max_spawn_width();
        if self.interior_cols() < needed {
            return Err(GeometryError::InteriorTooNarrow {
                interior: self.interior_cols(),
                needed,
            });
        }
        let needed = pieces::max_variant_height();
        if self.grid_rows < needed {
            return Err(GeometryError::GridTooShort {
                grid_rows: self.grid_rows,
                needed,
            });
        }
        if self.display_rows == 0 || self.display_rows >= self.grid_rows {
            return Err(GeometryError::BadDisplayRows {
                display_rows: self.display_rows,
                max: self.grid_rows.saturating_sub(1),
            });
        }
        if self.gravity_time == 0 {
            return Err(GeometryError::ZeroGravityTime);
        }
        Ok(())
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::REFERENCE
    }
}
