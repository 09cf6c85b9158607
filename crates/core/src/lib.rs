//! Falling-block simulation core - pure, deterministic, and testable
//!
//! This crate holds every game rule and no I/O. Given the same piece picker
//! and the same sequence of `(dt, controls)` ticks it always produces the
//! same board.
//!
//! # Module Structure
//!
//! - [`pieces`]: immutable shape catalog and the quarter-turn rotation table
//! - [`piece`]: a placed template with sweep movement and rotation
//! - [`board`]: 10x21 occupancy grid with stamping and row elimination
//! - [`game_mode`]: the per-tick spawn / fall / control / land state machine
//! - [`rng`]: the spawn-choice seam and its default uniform picker
//! - [`config`]: timing and top-out tunables, readable from the environment
//! - [`session`]: owns one board and one game mode
//! - [`snapshot`]: plain-data frame for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, Phase, SequencePicker, Session};
//! use blockfall_types::{Controls, PieceKind};
//!
//! let mut session = Session::with_picker(
//!     GameConfig::default(),
//!     SequencePicker::new(vec![PieceKind::I]),
//! );
//! assert_eq!(session.phase(), Phase::PieceFalling);
//!
//! session.tick(0.016, Controls { move_left: true, ..Controls::NONE });
//! assert!(!session.is_match_over());
//! ```

pub mod board;
pub mod config;
pub mod game_mode;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use game_mode::{GameMode, Phase};
pub use piece::Piece;
pub use pieces::{get_shape, rotate_point};
pub use rng::{SequencePicker, ShapePicker, SimpleRng, UniformPicker};
pub use session::Session;
pub use snapshot::GameSnapshot;
