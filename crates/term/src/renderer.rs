//! Terminal output for the game view.
//!
//! Frames are encoded as crossterm commands into a byte buffer and written in
//! one call. A frame whose size matches the last one sent only rewrites the
//! cells that changed; anything else is painted whole.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Owns the output stream and the last frame sent to it.
pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    /// What the terminal currently shows; `None` forces a full paint
    shown: Option<FrameBuffer>,
    pending: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            shown: None,
            pending: Vec::with_capacity(64 * 1024),
        }
    }

    /// Switch the terminal into game mode. Undone by [`TerminalRenderer::exit`].
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.pending.clear();
        self.pending.queue(terminal::EnterAlternateScreen)?;
        self.pending.queue(cursor::Hide)?;
        self.pending.queue(terminal::DisableLineWrap)?;
        self.send()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.pending.clear();
        reset_style(&mut self.pending)?;
        self.pending.queue(terminal::EnableLineWrap)?;
        self.pending.queue(cursor::Show)?;
        self.pending.queue(terminal::LeaveAlternateScreen)?;
        self.send()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Paint the next frame whole. Call after a resize.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Send `fb` to the terminal and hand back the previously shown frame in
    /// its place, sized like `fb`, for the caller to render the next frame into.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.pending.clear();
        let mut recycled = match self.shown.take() {
            Some(shown) if shown.width() == fb.width() && shown.height() == fb.height() => {
                encode_diff_into(&shown, fb, &mut self.pending)?;
                shown
            }
            other => {
                encode_full_into(fb, &mut self.pending)?;
                let mut spare = other.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
                spare.resize(fb.width(), fb.height());
                spare
            }
        };
        self.send()?;

        std::mem::swap(&mut recycled, fb);
        self.shown = Some(recycled);
        Ok(())
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn send(&mut self) -> Result<()> {
        self.out.write_all(&self.pending)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Queues cells, emitting style commands only when the style changes.
struct CellWriter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> CellWriter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn put(&mut self, cell: Cell) -> Result<()> {
        if self.style != Some(cell.style) {
            set_style(self.out, cell.style)?;
            self.style = Some(cell.style);
        }
        self.out.queue(Print(cell.ch))?;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        if self.style.is_some() {
            reset_style(self.out)?;
        }
        Ok(())
    }
}

/// Queue a clear-screen followed by every cell of `fb`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut cells = CellWriter::new(out);
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            cells.put(fb.get(x, y).unwrap_or_default())?;
        }
        if y + 1 < fb.height() {
            cells.out.queue(Print("\r\n"))?;
        }
    }
    cells.finish()
}

/// Queue only the cells of `next` that differ from `prev`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut cells = CellWriter::new(out);
    for_each_changed_run(prev, next, |x, y, len| {
        cells.out.queue(cursor::MoveTo(x, y))?;
        for x in x..x + len {
            cells.put(next.get(x, y).unwrap_or_default())?;
        }
        Ok(())
    })?;
    cells.finish()
}

fn set_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn reset_style(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn to_color(Rgb { r, g, b }: Rgb) -> Color {
    Color::Rgb { r, g, b }
}

/// Call `f(x, y, len)` once per horizontal run of differing cells.
///
/// Frames of different size count as changed everywhere.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let same_size = prev.width() == next.width() && prev.height() == next.height();
    let w = next.width();

    for y in 0..next.height() {
        if !same_size {
            f(0, y, w)?;
            continue;
        }
        let mut run_start: Option<u16> = None;
        for x in 0..=w {
            let differs = x < w && prev.get(x, y) != next.get(x, y);
            match (differs, run_start) {
                (true, None) => run_start = Some(x),
                (false, Some(start)) => {
                    f(start, y, x - start)?;
                    run_start = None;
                }
                _ => {}
            }
        }
    }
    Ok(())
}
