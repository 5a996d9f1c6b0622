//! Display-width helpers for mixed Japanese/Latin strings.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Force a string into exactly `width` display columns: longer strings are
/// truncated with an ellipsis, shorter ones padded with spaces.
pub fn fit_width(s: &str, width: usize) -> String {
    let mut out = if display_width(s) <= width {
        s.to_string()
    } else {
        let target = width.saturating_sub(1);
        let mut clipped = String::new();
        let mut used = 0;
        for ch in s.chars() {
            let w = char_width(ch);
            if used + w > target {
                break;
            }
            clipped.push(ch);
            used += w;
        }
        clipped.push('…');
        clipped
    };
    let pad = width.saturating_sub(display_width(&out));
    out.push_str(&" ".repeat(pad));
    out
}
