//! Grid cursor for terminal play.
//!
//! The engine only understands "place the selected block at this anchor". The
//! cursor tracks where the player is pointing and turns [`InputEvent`]s into
//! [`GameAction`]s, clamping movement to the grid.

use crate::map::InputEvent;
use crate::types::{Anchor, GameAction, DEFAULT_GRID_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorController {
    anchor: Anchor,
    grid_size: u8,
}

impl CursorController {
    /// Start centered on a `grid_size` grid
    pub fn new(grid_size: u8) -> Self {
        let grid_size = grid_size.max(1);
        let mid = (grid_size / 2) as i8;
        Self {
            anchor: Anchor::new(mid, mid),
            grid_size,
        }
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn grid_size(&self) -> u8 {
        self.grid_size
    }

    /// Move by `(dx, dy)`, staying on the grid.
    pub fn move_by(&mut self, dx: i8, dy: i8) {
        let max = self.grid_size as i8 - 1;
        let next = self.anchor.offset(dx, dy);
        self.anchor = Anchor::new(next.x.clamp(0, max), next.y.clamp(0, max));
    }

    pub fn move_to(&mut self, anchor: Anchor) {
        self.anchor = anchor;
        self.move_by(0, 0);
    }

    /// Resolve an input event into an engine action.
    ///
    /// `selected` is the engine's current selection and `available[i]` tells
    /// whether tray slot `i` still holds an unused block. Cursor moves are
    /// absorbed here and yield `None`.
    pub fn handle(
        &mut self,
        event: InputEvent,
        selected: Option<u8>,
        available: &[bool],
    ) -> Option<GameAction> {
        match event {
            InputEvent::MoveCursor(dx, dy) => {
                self.move_by(dx, dy);
                None
            }
            InputEvent::SelectBlock(index) => Some(GameAction::SelectBlock(index)),
            InputEvent::CycleBlock => next_available(selected, available).map(GameAction::SelectBlock),
            InputEvent::Place => Some(GameAction::Place(self.anchor)),
            InputEvent::Undo => Some(GameAction::Undo),
            InputEvent::Restart => Some(GameAction::Restart),
        }
    }
}

impl Default for CursorController {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}

/// The first available slot after `selected`, wrapping around.
pub fn next_available(selected: Option<u8>, available: &[bool]) -> Option<u8> {
    let n = available.len();
    if n == 0 {
        return None;
    }
    let start = selected.map_or(0, |s| s as usize + 1);
    (0..n)
        .map(|step| (start + step) % n)
        .find(|&i| available[i])
        .map(|i| i as u8)
}
