//! Render-ready copy of the session state.

use crate::game_mode::Phase;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Plain-data view of one frame, indexed `board[y][x]` with y = 0 at the floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[bool; BOARD_WIDTH]; BOARD_HEIGHT],
    pub phase: Phase,
    pub active_kind: Option<PieceKind>,
    pub cleared_rows: u32,
}

impl GameSnapshot {
    pub fn is_match_over(&self) -> bool {
        self.phase == Phase::MatchOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[false; BOARD_WIDTH]; BOARD_HEIGHT],
            phase: Phase::NoPiece,
            active_kind: None,
            cleared_rows: 0,
        }
    }
}
