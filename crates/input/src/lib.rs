//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`InputEvent`]s and provides a grid cursor that
//! resolves those into [`crate::types::GameAction`]s for the engine.

pub mod cursor;
pub mod map;

pub use block_blast_types as types;

pub use cursor::{next_available, CursorController};
pub use map::{handle_key_event, should_quit, InputEvent};
