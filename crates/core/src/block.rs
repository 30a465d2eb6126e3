//! Block module - a sampled shape with a color and a consumed flag

use arrayvec::ArrayVec;

use crate::shapes::Shape;
use crate::types::{ColorId, MAX_BLOCKS_PER_SET};

/// A placeable block offered in the tray.
///
/// `used` starts `false` and flips to `true` when the block is committed to
/// the grid. Only the engine flips it (and flips it back on undo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    shape: Shape,
    color: ColorId,
    used: bool,
}

impl Block {
    /// Create a fresh block. A color id of zero is bumped to 1.
    pub fn new(shape: Shape, color: ColorId) -> Self {
        Self {
            shape,
            color: color.max(1),
            used: false,
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn color(&self) -> ColorId {
        self.color
    }

    pub fn used(&self) -> bool {
        self.used
    }

    pub(crate) fn mark_used(&mut self) {
        self.used = true;
    }
}

/// The tray: fixed-capacity, ordered by selection slot.
pub type BlockSet = ArrayVec<Block, MAX_BLOCKS_PER_SET>;

/// True when every block in the tray has been placed (or the tray is empty).
pub fn all_used(blocks: &[Block]) -> bool {
    blocks.iter().all(Block::used)
}
