//! PanelView: draws an 8x8 brightness frame as a terminal LED panel.
//!
//! Pure (no I/O), so it can be unit-tested.

use crate::core::FrameBuffer;
use crate::fb::{CellStyle, Rgb, TermBuffer};
use crate::palette::level_rgb;

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

/// Session numbers shown beside the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelStatus {
    pub score: u32,
    pub frame: u64,
    pub episode: u32,
    pub game_over: bool,
}

const PANEL_BG: Rgb = Rgb::new(12, 8, 8);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

const HELP: [&str; 4] = ["W rotate  A/D move", "S down", "R restart", "Q quit"];

pub struct PanelView {
    /// Terminal columns per LED.
    led_w: u16,
    /// Terminal rows per LED.
    led_h: u16,
}

impl Default for PanelView {
    fn default() -> Self {
        // 2x1 keeps LEDs roughly square in typical terminal fonts.
        Self { led_w: 2, led_h: 1 }
    }
}

impl PanelView {
    pub fn new(led_w: u16, led_h: u16) -> Self {
        Self {
            led_w: led_w.max(1),
            led_h: led_h.max(1),
        }
    }

    /// Outer size of the bordered panel for a frame of `rows x cols` LEDs.
    pub fn panel_size(&self, rows: usize, cols: usize) -> (u16, u16) {
        (
            (cols as u16) * self.led_w + 2,
            (rows as u16) * self.led_h + 2,
        )
    }

    /// Render into an existing buffer, resizing it to the viewport.
    ///
    /// `levels` holds brightness levels (0..=15), not raw engine values.
    pub fn render_into(
        &self,
        levels: &FrameBuffer,
        status: &PanelStatus,
        viewport: Viewport,
        buf: &mut TermBuffer,
    ) {
        buf.reset(viewport.width, viewport.height);

        let (frame_w, frame_h) = self.panel_size(levels.rows(), levels.cols());
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(buf, start_x, start_y, frame_w, frame_h);

        for (r, row) in levels.iter_rows().enumerate() {
            for (c, &level) in row.iter().enumerate() {
                let px = start_x + 1 + (c as u16) * self.led_w;
                let py = start_y + 1 + (r as u16) * self.led_h;
                let (ch, fg) = if level == 0 {
                    ('·', level_rgb(0))
                } else {
                    ('█', level_rgb(level))
                };
                let style = CellStyle::new(fg, PANEL_BG);
                buf.fill(px, py, self.led_w, self.led_h, ch, style);
            }
        }

        self.draw_side_panel(buf, status, viewport, start_x + frame_w, start_y);
    }

    /// Convenience helper that allocates a new buffer.
    pub fn render(&self, levels: &FrameBuffer, status: &PanelStatus, viewport: Viewport) -> TermBuffer {
        let mut buf = TermBuffer::new(viewport.width, viewport.height);
        self.render_into(levels, status, viewport, &mut buf);
        buf
    }

    fn draw_border(&self, buf: &mut TermBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let (right, bottom) = (x + w - 1, y + h - 1);
        buf.hline(x + 1, y, w - 2, '─', BORDER);
        buf.hline(x + 1, bottom, w - 2, '─', BORDER);
        for dy in 1..h - 1 {
            buf.put(x, y + dy, '│', BORDER);
            buf.put(right, y + dy, '│', BORDER);
        }
        buf.put(x, y, '┌', BORDER);
        buf.put(right, y, '┐', BORDER);
        buf.put(x, bottom, '└', BORDER);
        buf.put(right, bottom, '┘', BORDER);
    }

    fn draw_side_panel(
        &self,
        buf: &mut TermBuffer,
        status: &PanelStatus,
        viewport: Viewport,
        panel_right: u16,
        start_y: u16,
    ) {
        let x = panel_right.saturating_add(2);
        if x >= viewport.width || viewport.width - x < 10 {
            return;
        }

        let mut y = start_y;
        buf.put_str(x, y, "SCORE", LABEL);
        buf.put_u64(x, y + 1, status.score as u64, VALUE);
        y = y.saturating_add(3);

        buf.put_str(x, y, "FRAME", LABEL);
        buf.put_u64(x, y + 1, status.frame, VALUE);
        y = y.saturating_add(3);

        buf.put_str(x, y, "GAME", LABEL);
        buf.put_u64(x, y + 1, status.episode as u64, VALUE);
        y = y.saturating_add(3);

        if status.game_over {
            buf.put_str(x, y, "GAME OVER", LABEL);
            y = y.saturating_add(2);
        }

        let help = CellStyle { bold: false, ..VALUE };
        for line in HELP {
            if y >= viewport.height {
                break;
            }
            buf.put_str(x, y, line, help);
            y = y.saturating_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_is_two_columns_per_led_plus_border() {
        let view = PanelView::default();
        assert_eq!(view.panel_size(8, 8), (18, 10));
    }

    #[test]
    fn lit_led_fills_two_columns() {
        let mut levels = FrameBuffer::new(8, 8);
        levels.set(0, 0, 9);
        let view = PanelView::default();
        let buf = view.render(&levels, &PanelStatus::default(), Viewport::new(18, 10));

        assert_eq!(buf.row_text(0), format!("┌{}┐", "─".repeat(16)));
        assert_eq!(buf.row_text(1), format!("│██{}│", "·".repeat(14)));
        assert_eq!(buf.get(1, 1).map(|c| c.style.fg), Some(level_rgb(9)));
        assert_eq!(buf.row_text(9), format!("└{}┘", "─".repeat(16)));
    }

    #[test]
    fn side_panel_shows_score_when_wide() {
        let view = PanelView::default();
        let status = PanelStatus {
            score: 12,
            frame: 345,
            episode: 2,
            game_over: true,
        };
        let buf = view.render(&FrameBuffer::default(), &status, Viewport::new(50, 12));
        let text: Vec<String> = (0..12).map(|y| buf.row_text(y)).collect();
        assert!(text.iter().any(|row| row.contains("SCORE")));
        assert!(text.iter().any(|row| row.contains("12")));
        assert!(text.iter().any(|row| row.contains("345")));
        assert!(text.iter().any(|row| row.contains("GAME OVER")));
    }

    #[test]
    fn narrow_viewport_skips_side_panel() {
        let view = PanelView::default();
        let buf = view.render(&FrameBuffer::default(), &PanelStatus::default(), Viewport::new(20, 10));
        let text: String = (0..10).map(|y| buf.row_text(y)).collect();
        assert!(!text.contains("SCORE"));
    }
}
