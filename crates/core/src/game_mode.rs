//! Game mode - the per-tick state machine
//!
//! Sequences spawning, automatic falling, player control, landing, row
//! elimination and the end-of-match check. The board is passed in by the
//! owner on every call; the mode holds the authoritative copy of the active
//! piece and only touches the board through stamping and elimination.
//!
//! Between ticks the active piece's footprint is stamped onto the board so a
//! renderer can draw the grid as-is. Each tick erases it first, so the
//! top-out check and elimination only ever see locked cells.
//!
//! Timers do not catch up: however large `dt` is, one tick applies at most one
//! automatic fall and at most one spawn.

use tracing::{debug, info, warn};

use crate::board::Board;
use crate::config::GameConfig;
use crate::piece::Piece;
use crate::rng::{ShapePicker, UniformPicker};
use crate::types::{Controls, Point, BOARD_HEIGHT, BOARD_WIDTH};

const DOWN: Point = Point::new(0, -1);
const LEFT: Point = Point::new(-1, 0);
const RIGHT: Point = Point::new(1, 0);

/// Where the mode is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting out the spawn delay
    NoPiece,
    /// A piece is under player control
    PieceFalling,
    /// Terminal; ticks no longer change anything
    MatchOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::NoPiece => "spawning",
            Phase::PieceFalling => "falling",
            Phase::MatchOver => "match over",
        }
    }
}

/// Falling-piece game state machine
#[derive(Debug, Clone)]
pub struct GameMode<P = UniformPicker> {
    config: GameConfig,
    picker: P,
    active: Option<Piece>,
    fall_timer: f32,
    spawn_timer: f32,
    match_over: bool,
    cleared_rows: u32,
}

impl<P: ShapePicker> GameMode<P> {
    pub fn new(config: GameConfig, picker: P) -> Self {
        Self {
            config,
            picker,
            active: None,
            fall_timer: 0.0,
            spawn_timer: 0.0,
            match_over: false,
            cleared_rows: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        if self.match_over {
            Phase::MatchOver
        } else if self.active.is_some() {
            Phase::PieceFalling
        } else {
            Phase::NoPiece
        }
    }

    pub fn is_match_over(&self) -> bool {
        self.match_over
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    /// Total rows eliminated this session
    pub fn cleared_rows(&self) -> u32 {
        self.cleared_rows
    }

    pub fn fall_timer(&self) -> f32 {
        self.fall_timer
    }

    pub fn spawn_timer(&self) -> f32 {
        self.spawn_timer
    }

    /// Row that ends the match once any locked cell reaches it
    pub fn top_out_row(&self) -> usize {
        (BOARD_HEIGHT - 1).saturating_sub(self.config.top_out_rows)
    }

    /// Place a freshly picked piece at the top center and stamp it.
    ///
    /// The piece starts on the top row and steps down one row at a time until
    /// it no longer collides. If no row works the match ends instead.
    /// Returns whether a piece was placed.
    pub fn spawn(&mut self, board: &mut Board) -> bool {
        let kind = self.picker.pick();
        let mut piece = Piece::new(
            kind,
            Point::new(BOARD_WIDTH as i32 / 2, BOARD_HEIGHT as i32 - 1),
        );

        while piece.has_collision(board) {
            if piece.location.y < 0 {
                warn!(kind = kind.as_str(), "no legal spawn position");
                self.active = None;
                self.match_over = true;
                return false;
            }
            piece.location.y -= 1;
        }

        debug!(
            kind = kind.as_str(),
            x = piece.location.x,
            y = piece.location.y,
            "spawned piece"
        );
        board.stamp(&piece, true);
        self.active = Some(piece);
        self.fall_timer = 0.0;
        true
    }

    /// Advance the simulation by `dt` seconds with the given control snapshot.
    pub fn tick(&mut self, board: &mut Board, dt: f32, controls: Controls) {
        if self.match_over {
            return;
        }

        if let Some(piece) = &self.active {
            board.stamp(piece, false);
        }

        if board.row_has_any(self.top_out_row()) {
            info!(cleared_rows = self.cleared_rows, "match over");
            self.match_over = true;
            if let Some(piece) = &self.active {
                board.stamp(piece, true);
            }
            return;
        }

        let removed = board.eliminate_rows();
        if removed > 0 {
            self.cleared_rows += removed as u32;
            info!(rows = removed, total = self.cleared_rows, "rows eliminated");
        }

        match self.active.take() {
            None => {
                self.spawn_timer += dt;
                if self.spawn_timer > self.config.spawn_delay_secs {
                    self.spawn_timer = 0.0;
                    self.spawn(board);
                }
            }
            Some(mut piece) => {
                let mut landed = false;

                self.fall_timer += dt;
                if self.fall_timer > self.config.fall_delay_secs {
                    self.fall_timer = 0.0;
                    landed = !piece.try_move(DOWN, board);
                }

                // A blocked soft drop never lands the piece; only gravity does.
                if controls.move_down {
                    piece.try_move(DOWN, board);
                }
                if controls.move_left {
                    piece.try_move(LEFT, board);
                }
                if controls.move_right {
                    piece.try_move(RIGHT, board);
                }
                if controls.rotate {
                    piece.try_rotate(board);
                }

                board.stamp(&piece, true);

                if landed {
                    debug!(
                        kind = piece.kind().as_str(),
                        x = piece.location.x,
                        y = piece.location.y,
                        "piece landed"
                    );
                    self.spawn_timer = 0.0;
                } else {
                    self.active = Some(piece);
                }
            }
        }
    }
}
