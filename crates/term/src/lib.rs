//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal play.
//! It intentionally avoids widget/layout frameworks and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render from a read-only snapshot, never from live engine state
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use block_blast_core as core;
pub use block_blast_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{color_rgb, GameView, Layout, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
