//! Screen rendering and the geometry both drawing and hit testing share.

pub mod detail;
pub mod list;

use crate::surface::{Rect, Style, Surface};
use crate::text;

/// Center a string horizontally within `rect`, on absolute row `y`.
pub(crate) fn put_centered(surface: &mut Surface, rect: Rect, y: u16, s: &str, style: Style) {
    let width = text::display_width(s) as u16;
    let x = rect.x + rect.width.saturating_sub(width) / 2;
    surface.put_str(x, y, s, style);
}

/// A one-row button: filled background with a centered label.
pub(crate) fn draw_button(surface: &mut Surface, rect: Rect, label: &str, style: Style) {
    surface.fill_rect(rect, style);
    put_centered(surface, rect, rect.y, label, style);
}
