//! Serial frame packing for the 8x8 LED matrix controller.
//!
//! The controller expects 64 brightness nibbles in 32 bytes followed by one
//! flag byte. Byte `i` holds LED `2i` in its low nibble and LED `2i + 1` in
//! its high nibble, LEDs in row-major order.

use crate::core::FrameBuffer;
use crate::types::{DISPLAY_COLS, DISPLAY_ROWS, MAX_BRIGHTNESS};

/// Bytes of packed brightness data per frame.
pub const PACKED_PIXEL_BYTES: usize = DISPLAY_ROWS * DISPLAY_COLS / 2;

/// Full packet: pixel bytes plus the trailing audio flag.
pub const PACKET_LEN: usize = PACKED_PIXEL_BYTES + 1;

/// Pack a brightness frame. Levels above 15 are clamped; cells outside the
/// 8x8 window are ignored and missing cells read as off.
pub fn pack_frame(levels: &FrameBuffer, audio: bool) -> [u8; PACKET_LEN] {
    let mut packet = [0u8; PACKET_LEN];
    for (i, byte) in packet[..PACKED_PIXEL_BYTES].iter_mut().enumerate() {
        let lo = level_at(levels, 2 * i);
        let hi = level_at(levels, 2 * i + 1);
        *byte = lo | (hi << 4);
    }
    packet[PACKED_PIXEL_BYTES] = audio as u8;
    packet
}

/// Inverse of [`pack_frame`]'s pixel part.
pub fn unpack_frame(packet: &[u8; PACKET_LEN]) -> FrameBuffer {
    let mut levels = FrameBuffer::new(DISPLAY_ROWS, DISPLAY_COLS);
    for (i, &byte) in packet[..PACKED_PIXEL_BYTES].iter().enumerate() {
        for (k, v) in [byte & 0x0f, byte >> 4].into_iter().enumerate() {
            let led = 2 * i + k;
            levels.set(led / DISPLAY_COLS, led % DISPLAY_COLS, v);
        }
    }
    levels
}

fn level_at(levels: &FrameBuffer, led: usize) -> u8 {
    levels
        .get(led / DISPLAY_COLS, led % DISPLAY_COLS)
        .unwrap_or(0)
        .min(MAX_BRIGHTNESS)
}

/// Lowercase hex of a packet, for line-oriented output.
pub fn to_hex(packet: &[u8]) -> String {
    hex::encode(packet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_share_a_byte_low_nibble_first() {
        let mut levels = FrameBuffer::new(8, 8);
        levels.set(0, 0, 9);
        levels.set(0, 1, 15);
        levels.set(7, 7, 3);
        let packet = pack_frame(&levels, false);
        assert_eq!(packet[0], 0xf9);
        assert_eq!(packet[31], 0x30);
        assert_eq!(packet[32], 0);
    }

    #[test]
    fn audio_flag_is_last_byte() {
        let packet = pack_frame(&FrameBuffer::default(), true);
        assert_eq!(packet.len(), 33);
        assert_eq!(packet[32], 1);
    }

    #[test]
    fn overbright_levels_are_clamped() {
        let mut levels = FrameBuffer::new(8, 8);
        levels.set(0, 0, 40);
        assert_eq!(pack_frame(&levels, false)[0], 0x0f);
    }

    #[test]
    fn unpack_restores_levels() {
        let levels = FrameBuffer::from_rows(&[[1u8, 2, 3, 4, 5, 6, 7, 8]; 8]);
        let packet = pack_frame(&levels, false);
        assert_eq!(unpack_frame(&packet), levels);
    }

    #[test]
    fn hex_is_two_chars_per_byte() {
        assert_eq!(to_hex(&[0x0f, 0xa0]), "0fa0");
        let line = to_hex(&pack_frame(&FrameBuffer::default(), true));
        assert_eq!(line.len(), 2 * PACKET_LEN);
        assert!(line.ends_with("01"));
    }
}
