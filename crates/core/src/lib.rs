//! Core game logic - pure, deterministic, and testable
//!
//! This crate is the whole simulation. It has **no dependencies** on
//! terminals, keyboards, serial ports or clocks:
//!
//! - **Deterministic**: the same seed and action sequence produce the same game
//! - **Frame-stepped**: one [`GameState::step`] per frame, no wall-clock time
//! - **Bounded**: every step is a fixed amount of in-place array work
//!
//! # Module Structure
//!
//! - [`geometry`]: grid, wall and visible-window sizes, with up-front validation
//! - [`board`]: settled cells, permanent walls, line clearing, overflow detection
//! - [`mask`]: boolean footprint of the falling piece and the copy-shift move
//! - [`pieces`]: the shape table of pre-authored rotation variants
//! - [`game_state`]: the engine (moves, rotation, gravity, landing, render)
//! - [`frame`]: the rendered panel buffer
//! - [`rng`]: seeded LCG for spawn kind and column
//! - [`snapshot`]: serializable observer view
//!
//! # Rules
//!
//! - **No wall kicks**: rotation swaps in the next variant at the same anchor
//!   or does nothing
//! - **Gravity**: every `GRAVITY_TIME` frames, or immediately on `Down`
//! - **Scoring**: one point per cleared row
//! - **Game over**: a settled cell in the hidden rows or the top visible row
//!   resets the game inside the same step; `done` pulses for that frame only
//!
//! # Example
//!
//! ```
//! use ledtris_core::GameState;
//! use ledtris_types::Action;
//!
//! let mut game = GameState::new(12345);
//!
//! game.step(Action::Left);
//! game.step(Action::Rotate);
//! let outcome = game.step(Action::Down);
//!
//! assert!(!outcome.done);
//! assert_eq!(game.render().rows(), 8);
//! ```

pub mod board;
pub mod frame;
pub mod game_state;
pub mod geometry;
pub mod mask;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use ledtris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use frame::FrameBuffer;
pub use game_state::{GameState, Piece, StepOutcome};
pub use geometry::{Geometry, GeometryError};
pub use mask::Mask;
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, PieceSnapshot};
