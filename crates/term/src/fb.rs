//! Character grid the LED panel is drawn into before it reaches the terminal.
//!
//! Cells are stored row by row; drawing helpers work on row slices so the
//! renderer can diff and encode whole rows at a time.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermCell {
    pub ch: char,
    pub style: CellStyle,
}

impl TermCell {
    pub const fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }
}

impl Default for TermCell {
    fn default() -> Self {
        Self::new(' ', CellStyle::default())
    }
}

/// Styled character cells addressed as (x, y); writes off the grid are
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermBuffer {
    width: u16,
    height: u16,
    cells: Vec<TermCell>,
}

impl TermBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut buf = Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        };
        buf.reset(width, height);
        buf
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Blank the buffer at the given size, reusing the allocation.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(width as usize * height as usize, TermCell::default());
    }

    /// Row `y`, or an empty slice below the last row.
    pub fn row(&self, y: u16) -> &[TermCell] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.cells[start..start + self.width as usize]
    }

    /// Columns `x..x + len` of row `y`, clipped to the grid.
    fn span_mut(&mut self, x: u16, y: u16, len: u16) -> &mut [TermCell] {
        if y >= self.height || x >= self.width {
            return &mut [];
        }
        let end = x.saturating_add(len).min(self.width);
        let start = y as usize * self.width as usize;
        &mut self.cells[start + x as usize..start + end as usize]
    }

    pub fn get(&self, x: u16, y: u16) -> Option<TermCell> {
        self.row(y).get(x as usize).copied()
    }

    pub fn put(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.span_mut(x, y, 1).fill(TermCell::new(ch, style));
    }

    /// Repeat `ch` over `len` columns starting at (x, y).
    pub fn hline(&mut self, x: u16, y: u16, len: u16, ch: char, style: CellStyle) {
        self.span_mut(x, y, len).fill(TermCell::new(ch, style));
    }

    pub fn fill(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            self.hline(x, y.saturating_add(dy), w, ch, style);
        }
    }

    /// Write `s` from (x, y), clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let span = self.span_mut(x, y, u16::MAX);
        for (cell, ch) in span.iter_mut().zip(s.chars()) {
            *cell = TermCell::new(ch, style);
        }
    }

    /// Decimal `value` from (x, y) without allocating.
    pub fn put_u64(&mut self, x: u16, y: u16, value: u64, style: CellStyle) {
        let mut digits = [b'0'; 20];
        let mut n = value;
        let mut start = digits.len();
        loop {
            start -= 1;
            digits[start] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        let text = std::str::from_utf8(&digits[start..]).unwrap_or("?");
        self.put_str(x, y, text, style);
    }

    /// Row `y` as plain text (styles dropped).
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|cell| cell.ch).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_str_clips_at_right_edge() {
        let mut buf = TermBuffer::new(4, 1);
        buf.put_str(2, 0, "abc", CellStyle::default());
        assert_eq!(buf.row_text(0), "  ab");
    }

    #[test]
    fn put_u64_writes_digits() {
        let mut buf = TermBuffer::new(6, 1);
        buf.put_u64(0, 0, 1204, CellStyle::default());
        buf.put_u64(5, 0, 0, CellStyle::default());
        assert_eq!(buf.row_text(0), "1204 0");
    }

    #[test]
    fn fill_clips_to_grid() {
        let mut buf = TermBuffer::new(3, 2);
        buf.fill(1, 1, 5, 5, '#', CellStyle::default());
        assert_eq!(buf.row_text(0), "   ");
        assert_eq!(buf.row_text(1), " ##");
        buf.put(9, 9, 'x', CellStyle::default());
        assert_eq!(buf.get(3, 0), None);
    }

    #[test]
    fn reset_blanks_and_resizes() {
        let mut buf = TermBuffer::new(2, 2);
        buf.put(0, 0, 'x', CellStyle::default());
        buf.reset(5, 3);
        assert_eq!((buf.width(), buf.height()), (5, 3));
        assert_eq!(buf.row_text(0), "     ");
        assert!(buf.row(3).is_empty());
    }
}
