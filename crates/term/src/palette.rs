//! Brightness levels of the LED matrix and their terminal colours.
//!
//! The matrix takes 16 levels per LED, 0 (off) to 15 (brightest). Engine
//! output is occupancy (0, 1, rarely 2); any lit cell is lifted into the
//! upper half of the range so a single piece cell is clearly visible.

use crate::core::FrameBuffer;
use crate::fb::Rgb;
use crate::types::{LIT_BRIGHTNESS_OFFSET, MAX_BRIGHTNESS};

/// Brightness level for one engine cell value.
pub fn brightness(value: u8) -> u8 {
    if value == 0 {
        0
    } else {
        value.saturating_add(LIT_BRIGHTNESS_OFFSET).min(MAX_BRIGHTNESS)
    }
}

/// Map an engine frame to a frame of brightness levels.
pub fn brightness_frame(frame: &FrameBuffer) -> FrameBuffer {
    let mut out = FrameBuffer::new(frame.rows(), frame.cols());
    for (r, row) in frame.iter_rows().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            out.set(r, c, brightness(v));
        }
    }
    out
}

/// Terminal colour of a brightness level. Off LEDs stay faintly visible.
pub fn level_rgb(level: u8) -> Rgb {
    let level = level.min(MAX_BRIGHTNESS) as u16;
    if level == 0 {
        return Rgb::new(28, 18, 18);
    }
    // Red LED: intensity grows linearly, with a warm tint at the top end.
    let r = 60 + level * 13;
    let g = level * 6;
    let b = level * 3;
    Rgb::new(r as u8, g as u8, b as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_stays_off() {
        assert_eq!(brightness(0), 0);
    }

    #[test]
    fn lit_values_are_offset_and_capped() {
        assert_eq!(brightness(1), 9);
        assert_eq!(brightness(2), 10);
        assert_eq!(brightness(7), 15);
        assert_eq!(brightness(200), 15);
    }

    #[test]
    fn brightness_frame_maps_every_cell() {
        let frame = FrameBuffer::from_rows(&[[0u8, 1], [2, 0]]);
        let levels = brightness_frame(&frame);
        assert_eq!(levels.to_rows(), vec![vec![0, 9], vec![10, 0]]);
    }

    #[test]
    fn colours_grow_with_level() {
        assert_eq!(level_rgb(15), Rgb::new(255, 90, 45));
        assert!(level_rgb(9).r > level_rgb(1).r);
        assert_eq!(level_rgb(99), level_rgb(15));
    }
}
