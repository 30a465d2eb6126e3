use block_blast::core::{GameState, Grid, Rules, SimpleRng};
use block_blast::term::{color_rgb, GameView, Viewport};
use block_blast::types::Anchor;

fn layout_origin(view: &GameView, snap_size: u8, tray: usize, vp: Viewport) -> (u16, u16) {
    let layout = view.layout(snap_size, tray, vp);
    (layout.frame_x, layout.frame_y)
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let fb = view.render(&snap, None, vp);

    // 8 cells x 2 columns wide plus border => 18x10 frame.
    let (x0, y0) = layout_origin(&view, 8, 3, vp);
    assert_eq!(fb.get(x0, y0).unwrap().ch, '┌');
    assert_eq!(fb.get(x0 + 17, y0).unwrap().ch, '┐');
    assert_eq!(fb.get(x0, y0 + 9).unwrap().ch, '└');
    assert_eq!(fb.get(x0 + 17, y0 + 9).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_filled_cell_two_chars_wide() {
    let mut snap = GameState::new(1).snapshot();
    snap.grid[7][0] = 3;

    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let fb = view.render(&snap, None, vp);

    let (x0, y0) = layout_origin(&view, 8, 3, vp);
    let left = fb.get(x0 + 1, y0 + 8).unwrap();
    let right = fb.get(x0 + 2, y0 + 8).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(right.ch, '█');
    assert_eq!(left.style.fg, color_rgb(3));
    // Empty neighbour shows the grid dot.
    assert_eq!(fb.get(x0 + 3, y0 + 8).unwrap().ch, '·');
}

#[test]
fn term_view_draws_side_panel() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;
    snap.undo_available = true;

    let fb = GameView::default().render(&snap, None, Viewport::new(80, 24));
    for text in ["SCORE", "1234", "LEVEL", "LINES", "UNDO", "ready"] {
        assert!(fb.contains_text(text), "missing {}", text);
    }
    assert!(!fb.contains_text("GAME OVER"));
}

#[test]
fn term_view_preview_is_tinted_by_fit() {
    let mut grid = Grid::new(8);
    grid.set(5, 5, 1);
    let mut game = GameState::with_grid(Rules::default(), grid, SimpleRng::new(5)).unwrap();
    game.select_block(0).unwrap();
    let snap = game.snapshot();
    let shape = *game.blocks()[0].shape();

    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let (x0, y0) = layout_origin(&view, 8, 3, vp);
    let (dx, dy) = shape.cells().next().unwrap();

    let ok = view.render(&snap, Some(Anchor::new(0, 0)), vp);
    let ok_cell = ok
        .get(x0 + 1 + dx as u16 * 2, y0 + 1 + dy as u16)
        .unwrap();
    assert_eq!(ok_cell.ch, '▓');

    // Anchor the first filled cell of the block on the occupied square.
    let blocked_anchor = Anchor::new(5 - dx, 5 - dy);
    let blocked = view.render(&snap, Some(blocked_anchor), vp);
    let blocked_cell = blocked.get(x0 + 1 + 5 * 2, y0 + 1 + 5).unwrap();
    assert_eq!(blocked_cell.ch, '▓');
    assert_ne!(blocked_cell.style.fg, ok_cell.style.fg);
}

#[test]
fn term_view_shows_tray_slots() {
    let mut game = GameState::new(3);
    game.select_block(1).unwrap();
    let snap = game.snapshot();

    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let fb = view.render(&snap, None, vp);
    let layout = view.layout(8, 3, vp);

    let row = fb.row_text(layout.tray_y);
    assert!(row.contains('1'));
    assert!(row.contains("2*"));
    assert!(row.contains('3'));
}

#[test]
fn term_view_game_over_overlay_shows_final_score() {
    let mut snap = GameState::new(1).snapshot();
    snap.game_over = true;
    snap.score = 4200;

    let fb = GameView::default().render(&snap, Some(Anchor::new(2, 2)), Viewport::new(80, 24));
    assert!(fb.contains_text("GAME OVER"));
    assert!(fb.contains_text("SCORE 4200"));
}

#[test]
fn term_view_small_viewport_does_not_panic() {
    let snap = GameState::with_rules(Rules::classic_ten(), 1).unwrap().snapshot();
    let view = GameView::default();
    for (w, h) in [(0, 0), (5, 3), (20, 8), (200, 60)] {
        let fb = view.render(&snap, Some(Anchor::new(9, 9)), Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
}
