//! Session - the single owner of the board and the game mode
//!
//! Hosts construct one session, call [`Session::tick`] once per frame and
//! read the results back through the accessors or a [`GameSnapshot`].

use crate::board::Board;
use crate::config::GameConfig;
use crate::game_mode::{GameMode, Phase};
use crate::rng::{ShapePicker, UniformPicker};
use crate::snapshot::GameSnapshot;
use crate::types::{Controls, Point, BOARD_WIDTH};

/// One game from first spawn to match over
#[derive(Debug, Clone)]
pub struct Session<P = UniformPicker> {
    board: Board,
    mode: GameMode<P>,
}

impl Session<UniformPicker> {
    /// Start a session with uniform piece selection seeded from `config`.
    pub fn initialize(config: GameConfig) -> Self {
        let picker = UniformPicker::new(config.seed);
        Self::with_picker(config, picker)
    }
}

impl<P: ShapePicker> Session<P> {
    /// Start a session with a caller-supplied piece picker.
    ///
    /// The first piece is spawned immediately, without waiting out the
    /// spawn delay.
    pub fn with_picker(config: GameConfig, picker: P) -> Self {
        let mut board = Board::new();
        let mut mode = GameMode::new(config, picker);
        mode.spawn(&mut board);
        Self { board, mode }
    }

    /// Advance by `dt` seconds using one control snapshot
    pub fn tick(&mut self, dt: f32, controls: Controls) {
        self.mode.tick(&mut self.board, dt, controls);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> &GameMode<P> {
        &self.mode
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    /// Occupancy at (x, y), false when off the board
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.board.is_occupied(Point::new(x, y))
    }

    pub fn is_match_over(&self) -> bool {
        self.mode.is_match_over()
    }

    pub fn phase(&self) -> Phase {
        self.mode.phase()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (y, row) in self.board.cells().chunks_exact(BOARD_WIDTH).enumerate() {
            out.board[y].copy_from_slice(row);
        }
        out.phase = self.mode.phase();
        out.active_kind = self.mode.active().map(|p| p.kind());
        out.cleared_rows = self.mode.cleared_rows();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
