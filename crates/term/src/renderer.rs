//! TerminalRenderer: flushes a [`TermBuffer`] to a real terminal.
//!
//! The first frame (and any frame after a resize) is a full redraw; later
//! frames only repaint the spans of each row that changed.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, Rgb, TermBuffer, TermCell};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<TermBuffer>,
    buf: Vec<u8>,
    key_release_events: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
            key_release_events: false,
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    ///
    /// Also asks the terminal for key release events where the keyboard
    /// enhancement protocol is supported; see [`Self::key_release_events`].
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.key_release_events = terminal::supports_keyboard_enhancement().unwrap_or(false);

        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        if self.key_release_events {
            self.buf.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        if self.key_release_events {
            self.buf.queue(PopKeyboardEnhancementFlags)?;
        }
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// True once [`Self::enter`] enabled key release reporting.
    pub fn key_release_events(&self) -> bool {
        self.key_release_events
    }

    /// Force the next draw to be a full redraw (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a buffer, swapping it into internal state.
    ///
    /// Callers keep one `TermBuffer` and pass it in every frame. The renderer
    /// diffs against the previous frame and then swaps buffers so the caller
    /// can reuse the old one without cloning.
    pub fn draw_swap(&mut self, next: &mut TermBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == next.width() && prev.height() == next.height() => {
                encode_diff_into(&prev, next, &mut self.buf)?;
                prev
            }
            _ => {
                encode_full_into(next, &mut self.buf)?;
                TermBuffer::new(next.width(), next.height())
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, next);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Queues cells into a byte buffer, emitting style commands only when the
/// style changes between consecutive cells.
struct Painter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Painter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn paint(&mut self, x: u16, y: u16, cells: &[TermCell]) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        for cell in cells {
            if self.style != Some(cell.style) {
                self.out.queue(SetAttribute(Attribute::Reset))?;
                self.out.queue(SetForegroundColor(rgb_to_color(cell.style.fg)))?;
                self.out.queue(SetBackgroundColor(rgb_to_color(cell.style.bg)))?;
                if cell.style.bold {
                    self.out.queue(SetAttribute(Attribute::Bold))?;
                }
                self.style = Some(cell.style);
            }
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Encode a full redraw into `out` without touching stdout.
pub fn encode_full_into(buf: &TermBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut painter = Painter::new(out);
    for y in 0..buf.height() {
        painter.paint(0, y, buf.row(y))?;
    }
    painter.finish()
}

/// Encode only the cells that differ between two equally sized buffers.
pub fn encode_diff_into(prev: &TermBuffer, next: &TermBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut painter = Painter::new(out);
    for y in 0..next.height() {
        let row = next.row(y);
        for span in changed_spans(prev.row(y), row) {
            painter.paint(span.start as u16, y, &row[span])?;
        }
    }
    painter.finish()
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Column ranges of `next` that differ from `prev`, adjacent changes merged.
/// A shorter `prev` row counts as changed past its end.
fn changed_spans<'a>(
    prev: &'a [TermCell],
    next: &'a [TermCell],
) -> impl Iterator<Item = Range<usize>> + 'a {
    let differs = move |x: usize| prev.get(x) != next.get(x);
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < next.len() && !differs(x) {
            x += 1;
        }
        if x == next.len() {
            return None;
        }
        let start = x;
        while x < next.len() && differs(x) {
            x += 1;
        }
        Some(start..x)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changed_spans_merge_adjacent_cells() {
        let style = CellStyle::default();
        let a = TermBuffer::new(7, 1);
        let mut b = TermBuffer::new(7, 1);
        b.hline(1, 0, 3, 'X', style);
        b.put(6, 0, 'Y', style);

        let spans: Vec<_> = changed_spans(a.row(0), b.row(0)).collect();
        assert_eq!(spans, vec![1..4, 6..7]);
    }

    #[test]
    fn changed_spans_treat_missing_prev_cells_as_changed() {
        let a = TermBuffer::new(2, 1);
        let b = TermBuffer::new(4, 1);
        let spans: Vec<_> = changed_spans(a.row(0), b.row(0)).collect();
        assert_eq!(spans, vec![2..4]);
    }

    #[test]
    fn identical_buffers_encode_no_cells() {
        let a = TermBuffer::new(4, 2);
        let mut out = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(!text.contains(' '));
    }

    #[test]
    fn full_encode_positions_every_row() {
        let mut buf = TermBuffer::new(3, 2);
        buf.put_str(0, 0, "ab", CellStyle::default());
        buf.put_str(0, 1, "█", CellStyle::default());
        let mut out = Vec::new();
        encode_full_into(&buf, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("ab"));
        assert!(text.contains('█'));
        // MoveTo is 1-based: row 2, column 1.
        assert!(text.contains("\x1b[2;1H"));
        assert!(!text.contains("\r\n"));
    }

    #[test]
    fn style_is_emitted_once_per_change() {
        let red = CellStyle::new(Rgb::new(255, 0, 0), Rgb::new(0, 0, 0));
        let mut buf = TermBuffer::new(4, 1);
        buf.hline(0, 0, 4, '#', red);
        let mut out = Vec::new();
        encode_full_into(&buf, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert_eq!(text.matches("38;2;255;0;0").count(), 1);
    }

    #[test]
    fn style_colors_are_rgb() {
        assert_eq!(
            rgb_to_color(Rgb::new(1, 2, 3)),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
