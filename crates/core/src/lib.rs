//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the rules, state management, and move validation
//! of the block placement puzzle. It has **zero dependencies** on UI or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed produces identical block sequences
//! - **Testable**: Randomness is injected, so tests can script every tray
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-free**: Grid, tray, and snapshots are fixed-size values
//!
//! # Module Structure
//!
//! - [`grid`]: N×N occupancy grid with fit testing and row/column clearing
//! - [`shapes`]: Rigid polyomino shapes and the catalogue blocks are drawn from
//! - [`block`]: A shape plus a color, tracked through the tray
//! - [`rng`]: Pluggable random source and block generation
//! - [`validator`]: Placement legality and the no-move scan
//! - [`scoring`]: Line-clear points and level progression
//! - [`config`]: Tunable rules (grid size, palette, scoring table, tray size)
//! - `undo`: The single-slot undo memento
//! - [`game_state`]: The engine tying it all together
//! - [`snapshot`]: Read-only views for presentation layers
//!
//! # Game Rules
//!
//! - **Tray**: Three blocks are offered at a time; a new set arrives only
//!   when all three are placed
//! - **No rotation**: Blocks are placed exactly as drawn
//! - **Simultaneous clears**: Every full row and column is detected before
//!   any is cleared, so a cell on a full row and a full column counts once
//!   per line
//! - **Scoring**: `100 × multiplier(lines) × level`, with the multiplier
//!   table 1, 3, 6, 10, 15
//! - **Undo**: One step back, including out of game over
//! - **Game over**: No unused block fits anywhere on the grid
//!
//! # Example
//!
//! ```
//! use block_blast_core::GameState;
//! use block_blast_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! // Select the first block and drop it at the first spot it fits.
//! let anchor = game.valid_anchors(0).next().unwrap();
//! assert!(game.apply_action(GameAction::SelectBlock(0)));
//! assert!(game.apply_action(GameAction::Place(anchor)));
//!
//! assert!(game.blocks()[0].used());
//! assert!(game.undo_available());
//! assert_eq!(game.score(), 0); // placement alone scores nothing
//! ```

pub mod block;
pub mod config;
pub mod game_state;
pub mod grid;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;
mod undo;
pub mod validator;

pub use block_blast_types as types;

// Re-export commonly used types for convenience
pub use block::{Block, BlockSet};
pub use config::{ConfigError, Rules};
pub use game_state::{GameState, MoveError};
pub use grid::{Grid, LineClear};
pub use rng::{BlockGenerator, RandomSource, SimpleRng};
pub use scoring::{calculate_level, calculate_line_score, ScoreResult};
pub use shapes::{Shape, CATALOGUE};
pub use snapshot::{BlockSnapshot, GameSnapshot, StatsSnapshot};
