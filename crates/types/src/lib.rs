//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic, so they can be used by the
//! simulation core, the input collaborator and the display collaborator alike.
//!
//! # Grid Geometry
//!
//! The reference geometry is a 12x12 grid rendered onto an 8x8 LED panel:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_ROWS` | 12 | Total grid rows, including the hidden spawn buffer |
//! | `GRID_COLS` | 12 | Total grid columns, including both walls |
//! | `PAD` | 2 | Width of each permanently filled wall |
//! | `DISPLAY_ROWS` | 8 | Visible rows (the bottom of the grid) |
//! | `DISPLAY_COLS` | 8 | Visible columns (the grid interior) |
//!
//! # Frame Timing
//!
//! The simulation is frame-stepped, not time-stepped. The host calls
//! `step` once per frame at `FRAME_HZ`; gravity fires every `GRAVITY_TIME`
//! frames (one row per second at 30 Hz).
//!
//! # Examples
//!
//! ```
//! use ledtris_types::{Action, ShapeKind, GRID_COLS, PAD, DISPLAY_COLS};
//!
//! assert_eq!(Action::from_str("rotate"), Some(Action::Rotate));
//! assert_eq!(ShapeKind::from_index(2), ShapeKind::T);
//! assert_eq!(GRID_COLS - 2 * PAD, DISPLAY_COLS);
//! ```

use serde::{Deserialize, Serialize};

/// Grid height in cells (12 rows)
pub const GRID_ROWS: usize = 12;

/// Grid width in cells (12 columns)
pub const GRID_COLS: usize = 12;

/// Wall width on each side of the grid
pub const PAD: usize = 2;

/// Visible rows on the LED panel
pub const DISPLAY_ROWS: usize = 8;

/// Visible columns on the LED panel
pub const DISPLAY_COLS: usize = 8;

/// Frames between forced gravity steps
pub const GRAVITY_TIME: u32 = 30;

/// Target frame rate of the host loop
pub const FRAME_HZ: u32 = 30;

/// Frame duration in milliseconds (rounded down from 1000 / 30)
pub const FRAME_MS: u64 = 1000 / FRAME_HZ as u64;

/// Brightest level an LED can show (levels are 0..=15)
pub const MAX_BRIGHTNESS: u8 = 15;

/// Offset added to every lit cell when mapping engine output to brightness
pub const LIT_BRIGHTNESS_OFFSET: u8 = 8;


/// The seven tetromino shape kinds
///
/// The order is the order of the shape table; `spawn_piece` draws an index
/// uniformly from `0..ShapeKind::COUNT` and maps it with [`ShapeKind::from_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// Number of shape kinds
    pub const COUNT: usize = 7;

    /// All kinds in table order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Map a table index to a kind. Indices wrap modulo [`ShapeKind::COUNT`].
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// Position of this kind in the shape table
    pub fn index(&self) -> usize {
        match self {
            ShapeKind::I => 0,
            ShapeKind::O => 1,
            ShapeKind::T => 2,
            ShapeKind::S => 3,
            ShapeKind::Z => 4,
            ShapeKind::J => 5,
            ShapeKind::L => 6,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
        }
    }
}

/// Input action considered by the engine for a single frame
///
/// The host resolves whatever input it has (held keys, a policy, a script)
/// into exactly one action per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    #[default]
    None,
    Left,
    Right,
    Down,
    Rotate,
    Restart,
    Quit,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::None,
        Action::Left,
        Action::Right,
        Action::Down,
        Action::Rotate,
        Action::Restart,
        Action::Quit,
    ];

    /// Parse action from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "none" => Some(Action::None),
            "left" => Some(Action::Left),
            "right" => Some(Action::Right),
            "down" => Some(Action::Down),
            "rotate" => Some(Action::Rotate),
            "restart" => Some(Action::Restart),
            "quit" => Some(Action::Quit),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::None => "none",
            Action::Left => "left",
            Action::Right => "right",
            Action::Down => "down",
            Action::Rotate => "rotate",
            Action::Restart => "restart",
            Action::Quit => "quit",
        }
    }

    /// Horizontal translation requested by this action, if any
    pub fn shift(&self) -> Option<(isize, isize)> {
        match self {
            Action::Left => Some((0, -1)),
            Action::Right => Some((0, 1)),
            _ => None,
        }
    }
}

/// A single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled,
}

impl Cell {
    #[inline(always)]
    pub fn is_filled(self) -> bool {
        matches!(self, Cell::Filled)
    }

    /// Value contributed to the rendered frame (0 or 1)
    #[inline(always)]
    pub fn value(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Filled => 1,
        }
    }
}
