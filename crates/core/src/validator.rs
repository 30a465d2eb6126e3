//! Move validation - placement legality and the no-move (terminal) scan
//!
//! Pure functions over a [`Grid`] and the tray; nothing here mutates state.

use crate::block::{all_used, Block};
use crate::grid::Grid;
use crate::shapes::Shape;
use crate::types::Anchor;

/// Whether `block` may occupy the grid with its top-left corner at `anchor`.
///
/// This is the grid fit test only; whether the block is still available is
/// the engine's concern.
pub fn can_place(grid: &Grid, block: &Block, anchor: Anchor) -> bool {
    grid.fits(block.shape(), anchor.x, anchor.y)
}

/// Every anchor at which `shape` fits, in row-major order.
pub fn valid_anchors<'a>(grid: &'a Grid, shape: &'a Shape) -> impl Iterator<Item = Anchor> + 'a {
    let n = grid.size() as i8;
    (0..n)
        .flat_map(move |y| (0..n).map(move |x| Anchor::new(x, y)))
        .filter(move |a| grid.fits(shape, a.x, a.y))
}

/// First anchor at which `shape` fits, scanning rows top to bottom.
pub fn first_valid_anchor(grid: &Grid, shape: &Shape) -> Option<Anchor> {
    valid_anchors(grid, shape).next()
}

/// Whether the player can still move.
///
/// A fully consumed tray counts as movable: it is about to be refilled, so it
/// never signals a stuck game. Otherwise unused blocks are tried in index
/// order, each against every anchor, stopping at the first fit.
pub fn has_any_valid_move(grid: &Grid, blocks: &[Block]) -> bool {
    if all_used(blocks) {
        return true;
    }
    blocks
        .iter()
        .filter(|b| !b.used())
        .any(|b| first_valid_anchor(grid, b.shape()).is_some())
}
