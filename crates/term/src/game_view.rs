//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::shapes::filled_offsets;
use crate::core::{GameSnapshot, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{ColorId, GamePhase, MAX_PIECE_SIZE};

/// Shown over the board while waiting in `GameOver`.
pub const START_TEXT: &str = "PRESS ENTER TO START";
pub const PAUSED_TEXT: &str = "PAUSED";
pub const GAME_OVER_TEXT: &str = "GAME OVER";

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const BLOCK: char = '█';

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

/// Where the board frame landed in the last render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell roughly squares up terminal glyphs.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Callers keep one framebuffer across frames; nothing here allocates
    /// once it has reached the viewport size.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let w = (snap.cols as u16).saturating_mul(self.cell_w).saturating_add(2);
        let h = (snap.rows as u16).saturating_add(2);
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
        };

        let empty = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        fb.fill_rect(frame.x + 1, frame.y + 1, w - 2, h - 2, ' ', CellStyle::new(BOARD_BG, BOARD_BG));
        fb.draw_box(frame.x, frame.y, w, h, CellStyle::new(Rgb::new(200, 200, 200), Rgb::default()));

        for row in 0..snap.rows {
            for col in 0..snap.cols {
                match snap.cell(row, col) {
                    Some(color) => self.draw_block(fb, frame, row as u16, col as u16, color),
                    None => self.fill_cell(fb, frame, row as u16, col as u16, '·', empty),
                }
            }
        }

        if let Some(active) = &snap.active {
            for (row, col) in active.cells() {
                if row >= 0 && col >= 0 && (row as usize) < snap.rows && (col as usize) < snap.cols {
                    self.draw_block(fb, frame, row as u16, col as u16, active.color);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.phase {
            GamePhase::Paused => draw_overlay_text(fb, frame, 0, PAUSED_TEXT),
            GamePhase::GameOver => {
                // A piece is left on screen only after a game has been played.
                if snap.active.is_some() {
                    draw_overlay_text(fb, frame, -1, GAME_OVER_TEXT);
                }
                draw_overlay_text(fb, frame, 0, START_TEXT);
            }
            GamePhase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, row: u16, col: u16, color: ColorId) {
        let style = CellStyle::new(color.rgb().into(), BOARD_BG).bold();
        self.fill_cell(fb, frame, row, col, BLOCK, style);
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, row: u16, col: u16, ch: char, style: CellStyle) {
        let x = frame.x + 1 + col * self.cell_w;
        let y = frame.y + 1 + row;
        fb.fill_rect(x, y, self.cell_w, 1, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::default());

        let mut y = frame.y;
        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        let preview_w = (MAX_PIECE_SIZE as u16) * self.cell_w + 2;
        let preview_h = MAX_PIECE_SIZE as u16 + 2;
        fb.draw_box(panel_x, y, preview_w, preview_h, value.dim());
        if let Some(next) = &snap.next {
            self.draw_preview(fb, panel_x + 1, y + 1, next);
        }
        y += preview_h + 1;

        for (name, n) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, n, value);
            y += 3;
        }

        if snap.quick_drop {
            fb.put_str(panel_x, y, "QUICK DROP", value.bold());
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &Piece) {
        let style = CellStyle::new(piece.color.rgb().into(), Rgb::default()).bold();
        for (i, j) in filled_offsets(piece.matrix()) {
            fb.fill_rect(x + (j as u16) * self.cell_w, y + i as u16, self.cell_w, 1, BLOCK, style);
        }
    }
}

/// Centered text on the board's middle row, shifted by `dy` rows.
fn draw_overlay_text(fb: &mut FrameBuffer, frame: Frame, dy: i16, text: &str) {
    let mid_y = frame.y.saturating_add(frame.h / 2).saturating_add_signed(dy);
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::default()).bold();
    fb.put_str(x, mid_y, text, style);
}
