//! Fixed palette for the terminal screens.
//!
//! The accent pair matches the endpoints of the confirm track's color ramp
//! so the chrome and the control read as one design.

use tategu_slide::Rgb;

pub const BG: Rgb = Rgb::new(0x12, 0x16, 0x1e);
pub const PANEL: Rgb = Rgb::new(0x1d, 0x24, 0x30);
pub const PANEL_RAISED: Rgb = Rgb::new(0x27, 0x30, 0x40);
pub const TEXT: Rgb = Rgb::new(0xe6, 0xe9, 0xf0);
pub const MUTED: Rgb = Rgb::new(0x8c, 0x96, 0xa5);
pub const ACCENT: Rgb = Rgb::new(0x15, 0x65, 0xc0);
pub const ACCENT_SOFT: Rgb = Rgb::new(0x90, 0xca, 0xf9);
pub const TRACK_EMPTY: Rgb = Rgb::new(0x2a, 0x30, 0x3c);
pub const POWER_ON: Rgb = Rgb::new(0x2e, 0x7d, 0x32);
pub const FAVORITE: Rgb = Rgb::new(0xff, 0xc1, 0x07);
pub const WARN: Rgb = Rgb::new(0xff, 0xb7, 0x4d);
