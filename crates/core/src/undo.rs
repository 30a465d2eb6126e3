//! Single-slot undo memento

use crate::block::BlockSet;
use crate::grid::Grid;

/// Engine state captured immediately before a committed placement.
///
/// The whole tray is kept (not just the placed block) so that undoing a
/// placement which exhausted and refilled the tray brings back the original
/// blocks rather than the replacements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoSnapshot {
    pub(crate) grid: Grid,
    pub(crate) blocks: BlockSet,
    pub(crate) score: u32,
    pub(crate) lines: u32,
    pub(crate) blocks_placed: u32,
    pub(crate) perfect_clears: u32,
    pub(crate) best_clear: u32,
}
