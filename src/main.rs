//! Terminal Block Blast runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer.
//! The game has no clock, so the loop blocks on input and redraws after
//! every event.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use block_blast::cli::{parse_play_args, PlayConfig, USAGE};
use block_blast::core::GameState;
use block_blast::input::{handle_key_event, should_quit, CursorController};
use block_blast::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use block_blast::types::{GameAction, MAX_BLOCKS_PER_SET};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = parse_play_args(&args)? else {
        println!("{}", USAGE);
        return Ok(());
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: PlayConfig) -> Result<()> {
    let mut game = GameState::with_rules(config.rules, config.seed)?;
    let mut cursor = CursorController::new(config.rules.grid_size);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    // Start with the first block in hand.
    game.select_block(0).ok();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.snapshot(), Some(cursor.anchor()), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                let Some(input) = handle_key_event(key) else {
                    continue;
                };

                let selected = game.selected().map(|i| i as u8);
                let mut available = [false; MAX_BLOCKS_PER_SET];
                for (slot, block) in available.iter_mut().zip(game.blocks()) {
                    *slot = !block.used();
                }
                let tray = &available[..game.blocks().len()];
                let Some(action) = cursor.handle(input, selected, tray) else {
                    continue;
                };

                let changed_tray = matches!(
                    action,
                    GameAction::Place(_) | GameAction::Undo | GameAction::Restart
                );
                if game.apply_action(action) && changed_tray {
                    select_next(&mut game);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}

/// Keep a block in hand after the tray changes.
fn select_next(game: &mut GameState) {
    if game.game_over() || game.selected().is_some() {
        return;
    }
    if let Some(index) = game.blocks().iter().position(|b| !b.used()) {
        game.select_block(index).ok();
    }
}
