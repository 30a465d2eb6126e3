//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no required dependencies, making them
//! usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The playfield is a square `N×N` grid. `N` is a runtime parameter of the
//! engine rules; storage is sized for the largest supported grid:
//!
//! - **Default**: 8×8 (indexed 0-7)
//! - **Maximum**: 10×10
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_LINE_SCORE` | 100 | Points per line before multiplier and level |
//! | `LINE_MULTIPLIERS` | `[0, 1, 3, 6, 10]` | Multiplier by simultaneous lines (index = lines) |
//! | `LINE_MULTIPLIER_MAX` | 15 | Multiplier for 5+ simultaneous lines |
//! | `LINES_PER_LEVEL` | 10 | Lines needed per level step |
//!
//! # Examples
//!
//! ```
//! use block_blast_types::{Anchor, GameAction, DEFAULT_GRID_SIZE, BLOCKS_PER_SET};
//!
//! let action = GameAction::from_str("undo").unwrap();
//! assert_eq!(action, GameAction::Undo);
//!
//! let anchor = Anchor::new(2, 3);
//! assert_eq!(anchor.offset(1, -1), Anchor::new(3, 2));
//!
//! assert_eq!(DEFAULT_GRID_SIZE, 8);
//! assert_eq!(BLOCKS_PER_SET, 3);
//! ```

/// Default grid side length (8 columns x 8 rows)
pub const DEFAULT_GRID_SIZE: u8 = 8;

/// Smallest supported grid side length; the four-cell line needs room to fit
pub const MIN_GRID_SIZE: u8 = 4;

/// Largest supported grid side length
pub const MAX_GRID_SIZE: u8 = 10;

/// Number of distinct block colors (color ids are `1..=PALETTE_SIZE`)
pub const PALETTE_SIZE: u8 = 8;

/// Points per cleared line before multiplier and level are applied
pub const BASE_LINE_SCORE: u32 = 100;

/// Line multiplier table indexed by simultaneous lines cleared (0-4)
///
/// Clears of more than 4 lines use [`LINE_MULTIPLIER_MAX`].
pub const LINE_MULTIPLIERS: [u32; 5] = [0, 1, 3, 6, 10];

/// Multiplier for 5 or more simultaneous lines
pub const LINE_MULTIPLIER_MAX: u32 = 15;

/// Blocks offered to the player per set
pub const BLOCKS_PER_SET: u8 = 3;

/// Upper bound on a configured set size (storage capacity)
pub const MAX_BLOCKS_PER_SET: usize = 5;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// A cell on the grid
///
/// - `0`: Empty cell
/// - `1..=PALETTE_SIZE`: Cell filled with the given color id
pub type Cell = u8;

/// Empty cell value
pub const EMPTY: Cell = 0;

/// Block color identifier (never zero)
pub type ColorId = u8;

/// Grid coordinate of a shape's top-left bounding-box corner
///
/// Coordinates are signed so that callers may propose anchors that fall off
/// the grid; those are rejected by the placement check rather than wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    pub x: i8,
    pub y: i8,
}

impl Anchor {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Shift the anchor by `(dx, dy)`.
    pub fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Actions that can be applied to the engine
///
/// These are the engine-level commands produced by the input layer. Cursor
/// movement is not an engine concern and is resolved into `Place` anchors
/// before reaching the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameAction {
    /// Mark the block at this tray index as the active one
    SelectBlock(u8),
    /// Place the selected block with its top-left corner at the anchor
    Place(Anchor),
    /// Roll back the last placement
    Undo,
    /// Start a fresh game
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// Accepts `select:<index>`, `place:<x>,<y>`, `undo`, and `restart`
    /// (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use block_blast_types::{Anchor, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("select:2"), Some(GameAction::SelectBlock(2)));
    /// assert_eq!(GameAction::from_str("place:3,4"), Some(GameAction::Place(Anchor::new(3, 4))));
    /// assert_eq!(GameAction::from_str("Restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("rotate"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        if let Some(idx) = lower.strip_prefix("select:") {
            return idx.trim().parse().ok().map(GameAction::SelectBlock);
        }
        if let Some(coords) = lower.strip_prefix("place:") {
            let (x, y) = coords.split_once(',')?;
            let x = x.trim().parse().ok()?;
            let y = y.trim().parse().ok()?;
            return Some(GameAction::Place(Anchor::new(x, y)));
        }
        match lower.as_str() {
            "undo" => Some(GameAction::Undo),
            "restart" | "reset" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Short lowercase name of the action kind
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::SelectBlock(_) => "select",
            GameAction::Place(_) => "place",
            GameAction::Undo => "undo",
            GameAction::Restart => "restart",
        }
    }
}

/// Engine-side event emitted after a successful placement.
///
/// This is what presentation layers read to drive score popups and line
/// flashes; the engine itself never renders anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementReport {
    pub block_index: u8,
    pub anchor: Anchor,
    pub rows_cleared: u8,
    pub cols_cleared: u8,
    pub lines_cleared: u32,
    pub score_delta: u32,
    /// The tray was exhausted and replaced by a fresh set.
    pub refilled: bool,
    /// The grid was left completely empty by the clear.
    pub perfect_clear: bool,
    pub game_over: bool,
}
