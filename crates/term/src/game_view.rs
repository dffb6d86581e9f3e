//! GameView: maps a `core::Session` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Session;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::Cell;

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

/// Snake colours, cycled by segment index from the tail.
pub const SEGMENT_COLORS: [Rgb; 3] = [
    Rgb::new(220, 50, 50),
    Rgb::new(60, 90, 230),
    Rgb::new(60, 190, 80),
];

pub const FOOD_COLOR: Rgb = Rgb::new(60, 90, 230);

const PLAY_BG: Rgb = Rgb::grey(0xaa);
const GAME_OVER_BG: Rgb = Rgb::BLACK;
const SCORE_COLOR: Rgb = Rgb::new(220, 50, 50);

/// Draws the board, snake, food, score and overlays.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps cells roughly square in most terminals.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
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

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    pub fn cell_h(&self) -> u16 {
        self.cell_h
    }

    /// Largest grid (in cells) whose bordered frame fits the viewport.
    pub fn fit_grid(&self, viewport: Viewport) -> (u16, u16) {
        let w = viewport.width.saturating_sub(2) / self.cell_w;
        let h = viewport.height.saturating_sub(2) / self.cell_h;
        (w.max(1), h.max(1))
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, session: &Session, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let board = session.board();
        let game_over = session.halted();

        let grid_w = board.width().saturating_mul(self.cell_w);
        let grid_h = board.height().saturating_mul(self.cell_h);
        let frame_w = grid_w.saturating_add(2);
        let frame_h = grid_h.saturating_add(2);

        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let bg = if game_over { GAME_OVER_BG } else { PLAY_BG };
        fb.fill_rect(
            origin_x + 1,
            origin_y + 1,
            grid_w,
            grid_h,
            Glyph::new(' ', Style::new(bg, bg)),
        );
        draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        let layout = Layout {
            origin_x,
            origin_y,
            grid_w: board.width(),
            grid_h: board.height(),
        };

        for (cell, color) in board.snake().painted_segments() {
            let style = Style::new(SEGMENT_COLORS[color], bg);
            self.paint_cell(fb, &layout, cell, Glyph::new('█', style));
        }

        self.paint_cell(
            fb,
            &layout,
            board.food(),
            Glyph::new('▓', Style::new(FOOD_COLOR, bg)),
        );

        // Score sits on the bottom grid row, which is outside the playable rows.
        let score_x = origin_x + 1;
        let score_y = (origin_y + 1).saturating_add((board.height() - 1).saturating_mul(self.cell_h));
        fb.put_u32(score_x, score_y, board.score(), Style::new(SCORE_COLOR, bg).bold());

        self.draw_side_panel(fb, session, viewport, origin_x.saturating_add(frame_w), origin_y);

        if game_over {
            draw_overlay_text(fb, origin_x, origin_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &Session, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn paint_cell(&self, fb: &mut FrameBuffer, layout: &Layout, cell: Cell, glyph: Glyph) {
        if cell.x < 0
            || cell.y < 0
            || cell.x >= layout.grid_w as i32
            || cell.y >= layout.grid_h as i32
        {
            return;
        }
        let px = (layout.origin_x + 1).saturating_add((cell.x as u16).saturating_mul(self.cell_w));
        let py = (layout.origin_y + 1).saturating_add((cell.y as u16).saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, glyph);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &Session,
        viewport: Viewport,
        frame_right: u16,
        top: u16,
    ) {
        let panel_x = frame_right.saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = Style::default().bold();
        let value = Style::default();

        fb.put_str(panel_x, top, "SCORE", label);
        fb.put_u32(panel_x, top + 1, session.board().score(), value);

        fb.put_str(panel_x, top + 3, "HEADING", label);
        fb.put_str(
            panel_x,
            top + 4,
            session.board().snake().direction().as_str(),
            value,
        );

        fb.put_str(panel_x, top + 6, "KEYS", label);
        fb.put_str(panel_x, top + 7, "h j k l", value);
        fb.put_str(panel_x, top + 8, "q quit", value);

        if let Some(reason) = session.end_reason() {
            fb.put_str(panel_x, top + 10, reason.as_str(), value);
        }
    }
}

struct Layout {
    origin_x: u16,
    origin_y: u16,
    grid_w: u16,
    grid_h: u16,
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = Style::new(Rgb::grey(200), Rgb::BLACK);
    let right = x + w - 1;
    let bottom = y + h - 1;

    fb.set(x, y, Glyph::new('┌', style));
    fb.set(right, y, Glyph::new('┐', style));
    fb.set(x, bottom, Glyph::new('└', style));
    fb.set(right, bottom, Glyph::new('┘', style));
    for cx in x + 1..right {
        fb.set(cx, y, Glyph::new('─', style));
        fb.set(cx, bottom, Glyph::new('─', style));
    }
    for cy in y + 1..bottom {
        fb.set(x, cy, Glyph::new('│', style));
        fb.set(right, cy, Glyph::new('│', style));
    }
}

fn draw_overlay_text(
    fb: &mut FrameBuffer,
    origin_x: u16,
    origin_y: u16,
    frame_w: u16,
    frame_h: u16,
    text: &str,
) {
    let text_w = text.chars().count() as u16;
    let x = origin_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    let y = origin_y.saturating_add(frame_h / 2);
    fb.put_str(x, y, text, Style::new(Rgb::WHITE, Rgb::BLACK).bold());
}
