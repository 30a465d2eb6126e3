//! Rule configuration
//!
//! The defaults reproduce the canonical 8×8 rule set. Everything a deployment
//! might vary (grid size, palette, scoring table, tray size) is a field here
//! rather than a literal in the engine.

use thiserror::Error;

use crate::types::{
    ColorId, BASE_LINE_SCORE, BLOCKS_PER_SET, DEFAULT_GRID_SIZE, LINES_PER_LEVEL,
    LINE_MULTIPLIERS, LINE_MULTIPLIER_MAX, MAX_BLOCKS_PER_SET, MAX_GRID_SIZE, MIN_GRID_SIZE,
    PALETTE_SIZE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size {0} is outside {min}..={max}", min = MIN_GRID_SIZE, max = MAX_GRID_SIZE)]
    GridSize(u8),
    #[error("palette size must be at least 1")]
    PaletteSize,
    #[error("blocks per set {0} is outside 1..={max}", max = MAX_BLOCKS_PER_SET)]
    BlocksPerSet(usize),
    #[error("lines per level must be at least 1")]
    LinesPerLevel,
    #[error("cell color {0} is outside the palette")]
    CellColor(u8),
    #[error("starting grid already has a full line")]
    FullLine,
}

/// Engine rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rules {
    pub grid_size: u8,
    pub palette_size: ColorId,
    pub base_line_score: u32,
    /// Multiplier indexed by simultaneous lines cleared (0-4)
    pub line_multipliers: [u32; 5],
    /// Multiplier for clears beyond the table
    pub line_multiplier_max: u32,
    pub blocks_per_set: usize,
    pub lines_per_level: u32,
}

impl Rules {
    /// The 10×10 rule set used by the larger layout.
    pub fn classic_ten() -> Self {
        Self::default().with_grid_size(10)
    }

    pub fn with_grid_size(mut self, size: u8) -> Self {
        self.grid_size = size;
        self
    }

    pub fn with_palette_size(mut self, palette_size: ColorId) -> Self {
        self.palette_size = palette_size;
        self
    }

    pub fn with_blocks_per_set(mut self, count: usize) -> Self {
        self.blocks_per_set = count;
        self
    }

    pub fn with_base_line_score(mut self, score: u32) -> Self {
        self.base_line_score = score;
        self
    }

    /// Check the rules are playable. Every catalogue shape fits an empty grid
    /// of an accepted size, so a fresh tray always has a move.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(ConfigError::GridSize(self.grid_size));
        }
        if self.palette_size == 0 {
            return Err(ConfigError::PaletteSize);
        }
        if self.blocks_per_set == 0 || self.blocks_per_set > MAX_BLOCKS_PER_SET {
            return Err(ConfigError::BlocksPerSet(self.blocks_per_set));
        }
        if self.lines_per_level == 0 {
            return Err(ConfigError::LinesPerLevel);
        }
        Ok(())
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            palette_size: PALETTE_SIZE,
            base_line_score: BASE_LINE_SCORE,
            line_multipliers: LINE_MULTIPLIERS,
            line_multiplier_max: LINE_MULTIPLIER_MAX,
            blocks_per_set: BLOCKS_PER_SET as usize,
            lines_per_level: LINES_PER_LEVEL,
        }
    }
}
