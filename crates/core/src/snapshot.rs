//! Read-only view of engine state for presentation layers.

use crate::block::Block;
use crate::grid::Grid;
use crate::shapes::Shape;
use crate::types::{Anchor, ColorId, MAX_BLOCKS_PER_SET, MAX_GRID_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockSnapshot {
    pub shape: Shape,
    pub color: ColorId,
    pub used: bool,
}

impl From<Block> for BlockSnapshot {
    fn from(value: Block) -> Self {
        Self {
            shape: *value.shape(),
            color: value.color(),
            used: value.used(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsSnapshot {
    pub blocks_placed: u32,
    pub perfect_clears: u32,
    pub best_clear: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    /// Rows beyond `grid_size` (and columns beyond it) are always zero.
    pub grid: [[u8; MAX_GRID_SIZE as usize]; MAX_GRID_SIZE as usize],
    pub grid_size: u8,
    pub blocks: [Option<BlockSnapshot>; MAX_BLOCKS_PER_SET],
    pub selected: Option<u8>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub game_over: bool,
    pub undo_available: bool,
    pub episode_id: u32,
    pub seed: u32,
    pub stats: StatsSnapshot,
}

impl GameSnapshot {
    /// Whether `shape` would fit on the captured grid at `anchor`, using the
    /// same check the engine applies on commit.
    pub fn fits(&self, shape: &Shape, anchor: Anchor) -> bool {
        self.grid_size > 0
            && Grid::from_u8_grid(&self.grid, self.grid_size).fits(shape, anchor.x, anchor.y)
    }

    /// Tray slots that are present, in slot order.
    pub fn tray(&self) -> impl Iterator<Item = (usize, &BlockSnapshot)> {
        self.blocks
            .iter()
            .enumerate()
            .filter_map(|(i, b)| b.as_ref().map(|b| (i, b)))
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0u8; MAX_GRID_SIZE as usize]; MAX_GRID_SIZE as usize],
            grid_size: 0,
            blocks: [None; MAX_BLOCKS_PER_SET],
            selected: None,
            score: 0,
            level: 1,
            lines: 0,
            game_over: false,
            undo_available: false,
            episode_id: 0,
            seed: 0,
            stats: StatsSnapshot::default(),
        }
    }
}
