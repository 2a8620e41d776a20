//! Score screen: a number drawn on the LED matrix.
//!
//! Only two 3x5 glyphs fit side by side on an 8x8 matrix, so the screen shows
//! the last two decimal digits, zero padded.

use crate::core::FrameBuffer;
use crate::types::{DISPLAY_COLS, DISPLAY_ROWS, MAX_BRIGHTNESS};

const GLYPH_W: usize = 3;
const GLYPH_H: usize = 5;
const TOP: usize = 1;
const TENS_COL: usize = 0;
const UNITS_COL: usize = 4;

/// 3x5 glyphs, one `u16` per digit: bit 14 is the top-left pixel, rows of
/// three bits from top to bottom.
const FONT: [u16; 10] = [
    0b111_101_101_101_111, // 0
    0b010_110_010_010_111, // 1
    0b111_001_111_100_111, // 2
    0b111_001_111_001_111, // 3
    0b101_101_111_001_001, // 4
    0b111_100_111_001_111, // 5
    0b111_100_111_101_111, // 6
    0b111_001_010_010_010, // 7
    0b111_101_111_101_111, // 8
    0b111_101_111_001_111, // 9
];

fn glyph_pixel(digit: usize, row: usize, col: usize) -> bool {
    let bit = 14 - (row * GLYPH_W + col);
    (FONT[digit % 10] >> bit) & 1 == 1
}

fn draw_digit(frame: &mut FrameBuffer, digit: usize, top: usize, left: usize) {
    for row in 0..GLYPH_H {
        for col in 0..GLYPH_W {
            if glyph_pixel(digit, row, col) {
                frame.set(top + row, left + col, MAX_BRIGHTNESS);
            }
        }
    }
}

/// Brightness frame showing `n % 100`.
pub fn frame_for_number(n: u64) -> FrameBuffer {
    let mut frame = FrameBuffer::new(DISPLAY_ROWS, DISPLAY_COLS);
    let n = (n % 100) as usize;
    draw_digit(&mut frame, n / 10, TOP, TENS_COL);
    draw_digit(&mut frame, n % 10, TOP, UNITS_COL);
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(frame: &FrameBuffer) -> Vec<String> {
        frame
            .iter_rows()
            .map(|row| row.iter().map(|&v| if v > 0 { '#' } else { '.' }).collect())
            .collect()
    }

    #[test]
    fn zero_shows_double_zero() {
        let frame = frame_for_number(0);
        assert_eq!(
            pattern(&frame),
            vec![
                "........",
                "###.###.",
                "#.#.#.#.",
                "#.#.#.#.",
                "#.#.#.#.",
                "###.###.",
                "........",
                "........",
            ]
        );
    }

    #[test]
    fn shows_last_two_digits() {
        assert_eq!(frame_for_number(142), frame_for_number(42));
        let frame = frame_for_number(17);
        assert_eq!(pattern(&frame)[1], ".#..###.");
        assert_eq!(pattern(&frame)[5], "###...#.");
    }

    #[test]
    fn lit_pixels_are_full_brightness() {
        let frame = frame_for_number(88);
        assert!(frame.cells().iter().all(|&v| v == 0 || v == MAX_BRIGHTNESS));
        assert_eq!(frame.lit(), 26);
    }
}
