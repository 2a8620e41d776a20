//! ledtris (workspace facade crate).
//!
//! Re-exports the workspace crates under one name and holds the pieces the
//! two binaries share: log setup and the game/score-screen session.

pub mod logging;
pub mod session;

pub use ledtris_core as core;
pub use ledtris_input as input;
pub use ledtris_term as term;
pub use ledtris_types as types;
