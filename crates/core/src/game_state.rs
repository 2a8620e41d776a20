//! Game state module - the frame-stepped simulation engine
//!
//! This module ties together the board, the falling piece, the RNG and
//! gravity pacing. The host calls [`GameState::step`] once per frame with the
//! single action it resolved for that frame; everything else happens inside.
//!
//! Blocked moves and rotations are not errors: they are rejected silently and
//! the piece stays where it was. The only terminal condition, a stack
//! reaching the overflow rows, is resolved inside `step` by resetting the game
//! and is reported upward through [`StepOutcome::done`].

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::board::Board;
use crate::frame::FrameBuffer;
use crate::geometry::{Geometry, GeometryError};
use crate::mask::Mask;
use crate::pieces::{self, pattern_size};
use crate::rng::SimpleRng;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{Action, ShapeKind};

/// The falling piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    /// Index into the kind's variant table
    pub rotation: usize,
    /// Footprint in grid coordinates
    pub mask: Mask,
    /// (row, col) of the current variant's bounding-box origin
    pub anchor: (isize, isize),
}

impl Piece {
    /// Place `kind` with the given rotation at `anchor`.
    ///
    /// Returns None if the variant's bounding box leaves the grid.
    pub fn place(
        kind: ShapeKind,
        rotation: usize,
        anchor: (isize, isize),
        geometry: &Geometry,
    ) -> Option<Self> {
        let rotation = rotation % pieces::variant_count(kind);
        let mask = Mask::with_pattern(
            geometry.grid_rows,
            geometry.grid_cols,
            pieces::variant(kind, rotation),
            anchor,
        )?;
        Some(Self {
            kind,
            rotation,
            mask,
            anchor,
        })
    }

    /// Topmost and leftmost occupied cell (row, col)
    pub fn top_left(&self) -> Option<(usize, usize)> {
        self.mask.top_left()
    }
}

/// Result of one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StepOutcome {
    /// The game overflowed on this frame and has already been reset
    pub done: bool,
    /// Lines cleared so far; on an overflow frame, the score before the reset
    pub score: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    geometry: Geometry,
    board: Board,
    piece: Piece,
    rng: SimpleRng,
    seed: u32,
    /// Frames since the last forced gravity step
    gravity_counter: u32,
    /// Lines cleared in the current episode
    score: u32,
    /// Monotonic episode id (increments on every reset after the first)
    episode_id: u32,
    /// Frames stepped in the current episode
    frame: u64,
    frame_buffer: FrameBuffer,
}

impl GameState {
    /// Create a game on the reference 12x12 geometry
    pub fn new(seed: u32) -> Self {
        Self::build(Geometry::REFERENCE, seed)
    }

    /// Create a game on a custom geometry, rejecting impossible ones up front
    pub fn with_geometry(geometry: Geometry, seed: u32) -> Result<Self, GeometryError> {
        geometry.validate()?;
        Ok(Self::build(geometry, seed))
    }

    fn build(geometry: Geometry, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let board = Board::new(geometry);
        let piece = Self::random_piece(&geometry, &mut rng);
        let mut state = Self {
            geometry,
            board,
            piece,
            rng,
            seed,
            gravity_counter: 0,
            score: 0,
            episode_id: 0,
            frame: 0,
            frame_buffer: FrameBuffer::new(geometry.display_rows, geometry.display_cols()),
        };
        state.render_into_buffer();
        state
    }

    /// Fresh board, fresh piece, counters and score zeroed.
    ///
    /// The RNG keeps running so consecutive episodes differ.
    pub fn reset(&mut self) {
        self.board = Board::new(self.geometry);
        self.gravity_counter = 0;
        self.score = 0;
        self.frame = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.spawn_piece();
        self.render_into_buffer();
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for hosts and tests that stage positions.
    ///
    /// Walls stay protected by [`Board::set`].
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn gravity_counter(&self) -> u32 {
        self.gravity_counter
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Last rendered frame
    pub fn render(&self) -> &FrameBuffer {
        &self.frame_buffer
    }

    fn random_piece(geometry: &Geometry, rng: &mut SimpleRng) -> Piece {
        let kind = ShapeKind::from_index(rng.next_index(ShapeKind::COUNT));
        let (_, width) = pattern_size(pieces::spawn_pattern(kind));
        // Validated geometry guarantees interior >= width.
        let slack = geometry.interior_cols().saturating_sub(width);
        let col = geometry.pad + rng.next_index(slack + 1);

        let mask = Mask::with_pattern(
            geometry.grid_rows,
            geometry.grid_cols,
            pieces::spawn_pattern(kind),
            (0, col as isize),
        )
        .unwrap_or_else(|| Mask::empty(geometry.grid_rows, geometry.grid_cols));

        Piece {
            kind,
            rotation: 0,
            mask,
            anchor: (0, col as isize),
        }
    }

    /// Replace the falling piece with a random kind at a random column, in
    /// spawn orientation at the top of the grid.
    pub fn spawn_piece(&mut self) {
        self.piece = Self::random_piece(&self.geometry, &mut self.rng);
        trace!(
            kind = self.piece.kind.as_str(),
            col = self.piece.anchor.1,
            "spawned piece"
        );
    }

    /// Put a specific piece in play if it fits without collision.
    ///
    /// Returns false (and leaves the current piece) otherwise.
    pub fn place_piece(&mut self, kind: ShapeKind, rotation: usize, anchor: (isize, isize)) -> bool {
        match Piece::place(kind, rotation, anchor, &self.geometry) {
            Some(piece) if !self.board.intersects(&piece.mask) => {
                self.piece = piece;
                self.render_into_buffer();
                true
            }
            _ => false,
        }
    }

    /// The piece mask translated by `delta`, without touching state
    pub fn propose_move(&self, delta: (isize, isize)) -> Mask {
        self.piece.mask.shifted(delta.0, delta.1)
    }

    /// Translate the piece if the result does not collide.
    pub fn do_safe_move(&mut self, delta: (isize, isize)) -> bool {
        let proposed = self.propose_move(delta);
        if self.board.intersects(&proposed) {
            return false;
        }
        self.piece.mask = proposed;
        self.piece.anchor.0 += delta.0;
        self.piece.anchor.1 += delta.1;
        true
    }

    /// Swap in the next rotation variant at the same anchor if it fits.
    ///
    /// No wall kicks: a blocked rotation is simply refused.
    pub fn do_safe_rotate(&mut self) -> bool {
        let next = (self.piece.rotation + 1) % pieces::variant_count(self.piece.kind);
        let Some(candidate) = Mask::with_pattern(
            self.geometry.grid_rows,
            self.geometry.grid_cols,
            pieces::variant(self.piece.kind, next),
            self.piece.anchor,
        ) else {
            return false;
        };

        if self.board.intersects(&candidate) {
            return false;
        }
        self.piece.mask = candidate;
        self.piece.rotation = next;
        true
    }

    /// Move the piece down one row.
    ///
    /// Returns true (landed) without moving when the row below is blocked or
    /// the piece already touches the bottom row of the grid.
    pub fn gravity_step(&mut self) -> bool {
        let bottom = self.geometry.grid_rows - 1;
        let proposed = self.propose_move((1, 0));
        if self.board.intersects(&proposed) || self.piece.mask.occupies_row(bottom) {
            return true;
        }
        self.piece.mask = proposed;
        self.piece.anchor.0 += 1;
        false
    }

    /// Clear full rows, adding one point per row
    pub fn check_lines(&mut self) -> u32 {
        let cleared = self.board.check_lines();
        if cleared > 0 {
            self.score += cleared;
            debug!(cleared, score = self.score, "lines cleared");
        }
        cleared
    }

    /// Merge the landed piece, clear lines, spawn the next piece
    fn land(&mut self) {
        self.board.merge(&self.piece.mask);
        self.check_lines();
        self.spawn_piece();
    }

    /// Advance the simulation by one frame.
    pub fn step(&mut self, action: Action) -> StepOutcome {
        match action {
            Action::Restart => {
                info!(episode = self.episode_id, score = self.score, "restart requested");
                self.reset();
            }
            Action::Rotate => {
                self.do_safe_rotate();
            }
            Action::Left | Action::Right => {
                if let Some(delta) = action.shift() {
                    self.do_safe_move(delta);
                }
            }
            // Down goes through the forced gravity path below.
            Action::None | Action::Down | Action::Quit => {}
        }

        if self.gravity_counter >= self.geometry.gravity_time || action == Action::Down {
            if self.gravity_step() {
                self.land();
            }
            self.gravity_counter = 0;
        } else {
            self.gravity_counter += 1;
        }
        self.frame = self.frame.wrapping_add(1);

        let score = self.score;
        let done = self.board.overflowed();
        if done {
            info!(
                episode = self.episode_id,
                score,
                frames = self.frame,
                "stack overflowed, resetting"
            );
            self.reset();
        }

        self.render_into_buffer();
        StepOutcome { done, score }
    }

    /// Project board plus piece over the visible window
    fn render_into_buffer(&mut self) {
        let top = self.geometry.first_visible_row();
        let left = self.geometry.pad;
        for r in 0..self.frame_buffer.rows() {
            for c in 0..self.frame_buffer.cols() {
                let (row, col) = (top + r, left + c);
                let settled = self.board.get(row, col).map(|cell| cell.value()).unwrap_or(0);
                let falling = self.piece.mask.get(row, col) as u8;
                self.frame_buffer.set(r, c, settled + falling);
            }
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            episode_id: self.episode_id,
            frame: self.frame,
            seed: self.seed,
            score: self.score,
            gravity_counter: self.gravity_counter,
            piece: PieceSnapshot::from(&self.piece),
            display: self.frame_buffer.to_rows(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
