//! TerminalRenderer: flushes framebuffers to a real terminal.
//!
//! The first frame (and any frame after a resize) is drawn in full. After that,
//! each row is compared with the previous frame and only the span between the
//! first and last changed column is rewritten.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Rgb, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    prev: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prev: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo everything `enter` did.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next frame to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    /// Present a frame, writing only what changed since the last one.
    pub fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match &mut self.prev {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(prev, fb, &mut self.buf)?;
                prev.clone_from(fb);
            }
            slot => {
                encode_full_into(fb, &mut self.buf)?;
                *slot = Some(fb.clone());
            }
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::default();
    for y in 0..fb.height() {
        write_span(fb, y, 0, fb.width(), &mut pen, out)?;
    }
    pen.reset(out)
}

/// Encode only the changed span of each row into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();
    for y in 0..next.height() {
        if let Some((start, end)) = changed_span(prev, next, y) {
            write_span(next, y, start, end, &mut pen, out)?;
        }
    }
    pen.reset(out)
}

/// Columns `[start, end)` of row `y` covering every difference, if any.
///
/// Rows of different width are treated as entirely changed.
pub fn changed_span(prev: &FrameBuffer, next: &FrameBuffer, y: u16) -> Option<(u16, u16)> {
    let new_row = next.row(y)?;
    let old_row = match prev.row(y) {
        Some(row) if row.len() == new_row.len() => row,
        _ => return (!new_row.is_empty()).then_some((0, next.width())),
    };

    let first = old_row.iter().zip(new_row).position(|(a, b)| a != b)?;
    let last = old_row
        .iter()
        .zip(new_row)
        .rposition(|(a, b)| a != b)
        .unwrap_or(first);
    Some((first as u16, last as u16 + 1))
}

/// Tracks the style last sent to the terminal to avoid redundant escapes.
#[derive(Default)]
struct Pen {
    current: Option<Style>,
}

impl Pen {
    fn apply(&mut self, style: Style, out: &mut Vec<u8>) -> Result<()> {
        if self.current == Some(style) {
            return Ok(());
        }
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        if style.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        self.current = Some(style);
        Ok(())
    }

    fn reset(self, out: &mut Vec<u8>) -> Result<()> {
        if self.current.is_some() {
            out.queue(ResetColor)?;
            out.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

fn write_span(
    fb: &FrameBuffer,
    y: u16,
    start: u16,
    end: u16,
    pen: &mut Pen,
    out: &mut Vec<u8>,
) -> Result<()> {
    let Some(row) = fb.row(y) else {
        return Ok(());
    };
    out.queue(cursor::MoveTo(start, y))?;
    for glyph in &row[start as usize..end as usize] {
        pen.apply(glyph.style, out)?;
        out.queue(Print(glyph.ch))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Glyph;

    #[test]
    fn identical_rows_have_no_span() {
        let a = FrameBuffer::new(6, 2);
        let b = FrameBuffer::new(6, 2);
        assert_eq!(changed_span(&a, &b, 0), None);
        assert_eq!(changed_span(&a, &b, 1), None);
    }

    #[test]
    fn span_covers_first_to_last_change() {
        let a = FrameBuffer::new(8, 1);
        let mut b = FrameBuffer::new(8, 1);
        b.set(2, 0, Glyph::new('x', Style::default()));
        b.set(5, 0, Glyph::new('y', Style::default()));
        assert_eq!(changed_span(&a, &b, 0), Some((2, 6)));
    }

    #[test]
    fn style_only_change_is_detected() {
        let a = FrameBuffer::new(3, 1);
        let mut b = FrameBuffer::new(3, 1);
        b.set(1, 0, Glyph::new(' ', Style::default().bold()));
        assert_eq!(changed_span(&a, &b, 0), Some((1, 2)));
    }

    #[test]
    fn width_change_marks_whole_row() {
        let a = FrameBuffer::new(3, 1);
        let b = FrameBuffer::new(5, 1);
        assert_eq!(changed_span(&a, &b, 0), Some((0, 5)));
    }

    #[test]
    fn diff_of_identical_frames_is_empty() {
        let a = FrameBuffer::new(4, 4);
        let mut out = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn full_encode_contains_text() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(0, 0, "snek", Style::default());
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("snek"));
    }
}
