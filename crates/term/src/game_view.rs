//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Board row `BOARD_HEIGHT - 1` is drawn at the top of the frame and row 0
//! directly above the bottom border.

use std::fmt::Write as _;

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BG: CellStyle = CellStyle::new(Rgb::new(80, 80, 90), Rgb::new(30, 30, 40));
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const FILLED: CellStyle = CellStyle::new(Rgb::new(90, 200, 230), Rgb::new(30, 30, 40));
const FILLED_OVER: CellStyle = CellStyle::new(Rgb::new(150, 150, 150), Rgb::new(30, 30, 40));
const TEXT: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));
const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(160, 30, 30));

/// A lightweight terminal renderer for the board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
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
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', BG);
        draw_border(fb, start_x, start_y, frame_w, frame_h, BORDER);

        let match_over = snap.is_match_over();
        for (y, row) in snap.board.iter().enumerate() {
            for (x, &filled) in row.iter().enumerate() {
                let (sx, sy) = self.cell_origin(start_x, start_y, x, y);
                if filled {
                    let style = if match_over { FILLED_OVER } else { FILLED };
                    fb.fill_rect(sx, sy, self.cell_w, self.cell_h, '█', style);
                } else {
                    fb.put_str(sx, sy, "·", BG.dimmed());
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if match_over {
            draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, " MATCH OVER ");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Top-left terminal cell of board cell (x, y).
    fn cell_origin(&self, start_x: u16, start_y: u16, x: usize, y: usize) -> (u16, u16) {
        let row_from_top = (BOARD_HEIGHT - 1 - y) as u16;
        (
            start_x + 1 + x as u16 * self.cell_w,
            start_y + 1 + row_from_top * self.cell_h,
        )
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) {
        const PANEL_W: u16 = 16;
        if x.saturating_add(PANEL_W) > viewport.width {
            return;
        }

        let mut line = String::with_capacity(PANEL_W as usize);
        fb.put_str(x, y + 1, "BLOCKFALL", TEXT);

        line.clear();
        let _ = write!(line, "ROWS  {}", snap.cleared_rows);
        fb.put_str(x, y + 3, &line, TEXT);

        line.clear();
        let _ = write!(line, "STATE {}", snap.phase.as_str());
        fb.put_str(x, y + 4, &line, TEXT);

        if let Some(kind) = snap.active_kind {
            line.clear();
            let _ = write!(line, "PIECE {}", kind.as_str().to_ascii_uppercase());
            fb.put_str(x, y + 5, &line, TEXT);
        }

        let help = TEXT.dimmed();
        fb.put_str(x, y + 7, "←→  move", help);
        fb.put_str(x, y + 8, "↓   drop", help);
        fb.put_str(x, y + 9, "↑   rotate", help);
        fb.put_str(x, y + 10, "q   quit", help);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }
    let right = x + w - 1;
    let bottom = y + h - 1;

    fb.set(x, y, style.into_cell('┌'));
    fb.set(right, y, style.into_cell('┐'));
    fb.set(x, bottom, style.into_cell('└'));
    fb.set(right, bottom, style.into_cell('┘'));
    for cx in x + 1..right {
        fb.set(cx, y, style.into_cell('─'));
        fb.set(cx, bottom, style.into_cell('─'));
    }
    for cy in y + 1..bottom {
        fb.set(x, cy, style.into_cell('│'));
        fb.set(right, cy, style.into_cell('│'));
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
    let len = text.chars().count() as u16;
    let tx = x + w.saturating_sub(len) / 2;
    let ty = y + h / 2;
    fb.put_str(tx, ty, text, OVERLAY);
}
