//! Terminal input module (engine-facing).
//!
//! This crate is the keyboard collaborator of the simulation. It maps
//! `crossterm` key events into [`crate::types::Action`]s and reduces whatever
//! keys are held to exactly one action per frame, which is all the engine
//! ever sees. It works on terminals without key-release events by releasing
//! keys after a short frame timeout.

pub mod handler;
pub mod map;

pub use ledtris_types as types;

pub use handler::KeyState;
pub use map::{action_for_key, should_quit};
