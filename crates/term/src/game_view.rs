//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout: the grid sits in a bordered frame, the tray of offered blocks is
//! drawn underneath it, and the side panel (score, level, lines, undo) sits to
//! the right. The selected block is previewed at the cursor, tinted by whether
//! it fits there.

use crate::core::shapes::MAX_SHAPE_DIM;
use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Anchor, ColorId, EMPTY};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);
const PANEL_W: u16 = 12;

/// Color per block color id (1-based; ids past the table wrap around).
const PALETTE: [Rgb; 8] = [
    Rgb::new(220, 80, 80),
    Rgb::new(255, 165, 0),
    Rgb::new(240, 220, 80),
    Rgb::new(100, 220, 120),
    Rgb::new(80, 220, 220),
    Rgb::new(80, 120, 220),
    Rgb::new(200, 120, 220),
    Rgb::new(240, 130, 180),
];

const PREVIEW_OK: Rgb = Rgb::new(120, 240, 140);
const PREVIEW_BLOCKED: Rgb = Rgb::new(240, 70, 70);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Screen positions of the view's regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    pub tray_y: u16,
    pub panel_x: u16,
}

/// A lightweight terminal renderer for the puzzle.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    fn slot_w(&self) -> u16 {
        MAX_SHAPE_DIM as u16 * self.cell_w + 2
    }

    fn tray_h(&self) -> u16 {
        1 + MAX_SHAPE_DIM as u16 * self.cell_h
    }

    pub fn layout(&self, grid_size: u8, tray_len: usize, viewport: Viewport) -> Layout {
        let frame_w = grid_size as u16 * self.cell_w + 2;
        let frame_h = grid_size as u16 * self.cell_h + 2;
        let left_w = frame_w.max(self.slot_w() * tray_len as u16);
        let total_w = left_w + 2 + PANEL_W;
        let total_h = frame_h + 1 + self.tray_h();

        let frame_x = viewport.width.saturating_sub(total_w) / 2;
        let frame_y = viewport.height.saturating_sub(total_h) / 2;
        Layout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            tray_y: frame_y + frame_h + 1,
            panel_x: frame_x.saturating_add(left_w).saturating_add(2),
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// `cursor` is the anchor the player is pointing at; when a block is
    /// selected it is previewed there.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<Anchor>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(snap.grid_size, snap.tray().count(), viewport);
        let n = snap.grid_size as u16;

        fb.fill_rect(
            layout.frame_x + 1,
            layout.frame_y + 1,
            n * self.cell_w,
            n * self.cell_h,
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );
        fb.draw_box(
            layout.frame_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG),
        );

        for y in 0..n {
            for x in 0..n {
                let cell = snap.grid[y as usize][x as usize];
                if cell == EMPTY {
                    let dot = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
                    self.fill_grid_cell(fb, &layout, x, y, '·', dot);
                } else {
                    let style = CellStyle::new(color_rgb(cell), BOARD_BG).bold();
                    self.fill_grid_cell(fb, &layout, x, y, '█', style);
                }
            }
        }

        if let Some(anchor) = cursor.filter(|_| snap.playable()) {
            self.draw_cursor(fb, snap, &layout, anchor);
        }

        self.draw_tray(fb, snap, &layout);
        self.draw_side_panel(fb, snap, viewport, &layout);

        if snap.game_over {
            self.draw_game_over(fb, snap, &layout);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, cursor: Option<Anchor>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn fill_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = layout.frame_x + 1 + x * self.cell_w;
        let py = layout.frame_y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout, anchor: Anchor) {
        let n = snap.grid_size as i8;
        let selected = snap
            .selected
            .and_then(|i| snap.blocks.get(i as usize).copied().flatten())
            .filter(|b| !b.used);

        let Some(block) = selected else {
            if (0..n).contains(&anchor.x) && (0..n).contains(&anchor.y) {
                let style = CellStyle::new(Rgb::new(255, 255, 255), BOARD_BG).bold();
                self.fill_grid_cell(fb, layout, anchor.x as u16, anchor.y as u16, '▒', style);
            }
            return;
        };

        let tint = if snap.fits(&block.shape, anchor) {
            PREVIEW_OK
        } else {
            PREVIEW_BLOCKED
        };
        let style = CellStyle::new(tint, BOARD_BG);
        for (dx, dy) in block.shape.cells() {
            let (x, y) = (anchor.x.saturating_add(dx), anchor.y.saturating_add(dy));
            if (0..n).contains(&x) && (0..n).contains(&y) {
                self.fill_grid_cell(fb, layout, x as u16, y as u16, '▓', style);
            }
        }
    }

    fn draw_tray(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let label = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let mut x = layout.frame_x;
        for (i, block) in snap.tray() {
            let is_selected = snap.selected == Some(i as u8);
            let slot_label = if is_selected { label.bold() } else { label.dim() };
            let after = fb.put_u32(x, layout.tray_y, i as u32 + 1, slot_label);
            if is_selected {
                fb.put_char(after, layout.tray_y, '*', slot_label);
            }

            if !block.used {
                let style = CellStyle::new(color_rgb(block.color), PANEL_BG);
                for (dx, dy) in block.shape.cells() {
                    fb.fill_rect(
                        x + dx as u16 * self.cell_w,
                        layout.tray_y + 1 + dy as u16 * self.cell_h,
                        self.cell_w,
                        self.cell_h,
                        '█',
                        style,
                    );
                }
            }
            x = x.saturating_add(self.slot_w());
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, layout: &Layout) {
        let panel_x = layout.panel_x;
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = layout.frame_y;
        let mut row = |fb: &mut FrameBuffer, name: &str, v: Option<u32>, text: &str| {
            fb.put_str(panel_x, y, name, label);
            match v {
                Some(v) => fb.put_u32(panel_x, y + 1, v, value),
                None => fb.put_str(panel_x, y + 1, text, value),
            };
            y = y.saturating_add(3);
        };

        row(fb, "SCORE", Some(snap.score), "");
        row(fb, "LEVEL", Some(snap.level), "");
        row(fb, "LINES", Some(snap.lines), "");
        row(fb, "UNDO", None, if snap.undo_available { "ready" } else { "-" });
        row(fb, "PLACED", Some(snap.stats.blocks_placed), "");
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let mid_y = layout.frame_y + layout.frame_h / 2;

        let center = |w: u16| layout.frame_x + layout.frame_w.saturating_sub(w) / 2;
        let title = "GAME OVER";
        fb.put_str(center(title.len() as u16), mid_y.saturating_sub(1), title, style);

        let digits = digit_count(snap.score);
        let x = center(6 + digits);
        let x = fb.put_str(x, mid_y, "SCORE ", style);
        fb.put_u32(x, mid_y, snap.score, style);

        let hint = "r restart";
        fb.put_str(center(hint.len() as u16), mid_y + 1, hint, style.dim());
    }
}

pub fn color_rgb(color: ColorId) -> Rgb {
    PALETTE[(color.max(1) as usize - 1) % PALETTE.len()]
}

fn digit_count(mut v: u32) -> u16 {
    let mut n = 1;
    while v >= 10 {
        v /= 10;
        n += 1;
    }
    n
}
