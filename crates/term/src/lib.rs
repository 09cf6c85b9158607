//! Terminal rendering for the falling-block game.
//!
//! [`GameView`] turns a [`core::GameSnapshot`] into a [`FrameBuffer`] with no
//! I/O; [`TerminalRenderer`] writes framebuffers to the terminal through
//! `crossterm`, redrawing only what changed.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
