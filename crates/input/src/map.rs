//! Key mapping from terminal events to front-end input events.

use crate::types::MAX_BLOCKS_PER_SET;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press means to the front-end.
///
/// Cursor movement and tray cycling are front-end concerns; the
/// [`CursorController`](crate::CursorController) resolves these into engine
/// actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveCursor(i8, i8),
    /// Select the tray slot with this index (0-based)
    SelectBlock(u8),
    /// Select the next unused block after the current selection
    CycleBlock,
    Place,
    Undo,
    Restart,
}

/// Map keyboard input to input events.
pub fn handle_key_event(key: KeyEvent) -> Option<InputEvent> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputEvent::MoveCursor(-1, 0))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputEvent::MoveCursor(1, 0))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InputEvent::MoveCursor(0, -1))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputEvent::MoveCursor(0, 1))
        }

        // Tray
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as u8 - b'1';
            ((index as usize) < MAX_BLOCKS_PER_SET).then_some(InputEvent::SelectBlock(index))
        }
        KeyCode::Tab => Some(InputEvent::CycleBlock),

        // Actions
        KeyCode::Char(' ') | KeyCode::Enter => Some(InputEvent::Place),
        KeyCode::Char('u') | KeyCode::Char('U') => Some(InputEvent::Undo),
        KeyCode::Char('z') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(InputEvent::Undo),

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
