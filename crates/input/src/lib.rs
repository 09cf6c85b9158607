//! Terminal input module.
//!
//! Maps `crossterm` key events to [`crate::types::Control`]s and tracks held
//! keys so the host can hand the simulation one [`crate::types::Controls`]
//! snapshot per tick, including on terminals without key-release events.

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::ControlTracker;
pub use map::{map_key, should_quit};
