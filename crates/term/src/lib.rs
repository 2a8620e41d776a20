//! Terminal LED panel.
//!
//! Stands in for the physical 8x8 matrix: engine frames are mapped to 16
//! brightness levels ([`palette`]), drawn as a bordered panel of character
//! cells ([`panel_view`]) and flushed to the terminal with diffing
//! ([`renderer`]). [`packing`] produces the byte format the hardware
//! controller reads, and [`digits`] draws the score screen.
//!
//! No ratatui: a plain character buffer keeps full control over the 2:1
//! aspect ratio of each LED.

pub mod digits;
pub mod fb;
pub mod packing;
pub mod palette;
pub mod panel_view;
pub mod renderer;

pub use ledtris_core as core;
pub use ledtris_types as types;

pub use digits::frame_for_number;
pub use fb::{CellStyle, Rgb, TermBuffer, TermCell};
pub use packing::{pack_frame, unpack_frame, PACKET_LEN};
pub use palette::{brightness, brightness_frame, level_rgb};
pub use panel_view::{PanelStatus, PanelView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
