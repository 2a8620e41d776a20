use serde::{Deserialize, Serialize};

use crate::game_state::Piece;
use crate::types::ShapeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub kind: ShapeKind,
    pub rotation: usize,
    pub row: isize,
    pub col: isize,
}

impl From<&Piece> for PieceSnapshot {
    fn from(value: &Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            row: value.anchor.0,
            col: value.anchor.1,
        }
    }
}

/// Observer view of a game after a frame
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub episode_id: u32,
    pub frame: u64,
    pub seed: u32,
    pub score: u32,
    pub gravity_counter: u32,
    pub piece: PieceSnapshot,
    /// Rendered panel, one vector per row
    pub display: Vec<Vec<u8>>,
}

impl GameSnapshot {
    /// Non-zero cells in the rendered panel
    pub fn lit(&self) -> usize {
        self.display
            .iter()
            .flatten()
            .filter(|&&v| v != 0)
            .count()
    }
}
