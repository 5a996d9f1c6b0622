//! Fitting list screen: paged rows, multi-select, favorites.

use crate::app::App;
use crate::surface::{Rect, Style, Surface};
use crate::text::fit_width;
use crate::theme;

/// Row placement for the list screen at a given terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListGeometry {
    /// First row of fitting entries.
    pub rows_top: u16,
    /// Row of the paging footer; entries end just above it.
    pub footer_y: u16,
    /// How many entries fit between header and footer.
    pub capacity: usize,
}

pub fn geometry(size: (u16, u16)) -> ListGeometry {
    let (_, height) = size;
    let footer_y = height.saturating_sub(1);
    let rows_top = 2u16.min(footer_y);
    ListGeometry {
        rows_top,
        footer_y,
        capacity: usize::from(footer_y.saturating_sub(rows_top)),
    }
}

pub fn draw(app: &App, surface: &mut Surface) {
    let geometry = geometry((surface.width(), surface.height()));
    let shown = app.shown();

    let header_style = Style::new(theme::TEXT, theme::ACCENT);
    surface.fill_rect(Rect::new(0, 0, surface.width(), 1), header_style);
    let header = if app.selection.is_active() {
        format!(" {}件選択中", app.selection.len())
    } else {
        format!(" 建具一覧  {}/{}件", shown, app.catalog.len())
    };
    surface.put_str(0, 0, &header, header_style.bold());

    let hints = if app.selection.is_active() {
        "クリック 選択切替  a 全選択  Esc 解除"
    } else {
        "↑/↓ 移動  Enter 操作  f お気に入り  右クリック 選択  r 更新  q 終了"
    };
    surface.put_str(1, 1, hints, Style::new(theme::MUTED, theme::BG).dim());

    for (offset, index) in (app.scroll_top..shown).enumerate().take(geometry.capacity) {
        let y = geometry.rows_top + offset as u16;
        draw_row(app, surface, index, y);
    }

    let footer = if app.pager.is_loading() {
        String::from(" 読み込み中…")
    } else if app.pager.has_more() {
        format!(" 末尾までスクロールで続きを読み込み ({shown}/{}件)", app.catalog.len())
    } else {
        format!(" 全{}件を表示中", app.catalog.len())
    };
    surface.put_str(
        0,
        geometry.footer_y,
        &footer,
        Style::new(theme::MUTED, theme::BG).dim(),
    );
}

fn draw_row(app: &App, surface: &mut Surface, index: usize, y: u16) {
    let Some(fitting) = app.catalog.fittings().get(index) else {
        return;
    };
    let bg = if index == app.cursor {
        theme::PANEL_RAISED
    } else {
        theme::BG
    };
    surface.fill_rect(Rect::new(0, y, surface.width(), 1), Style::new(theme::TEXT, bg));

    let mut x = 1;
    if app.selection.is_active() {
        let mark = if app.selection.is_selected(&fitting.device_id) {
            "[x]"
        } else {
            "[ ]"
        };
        surface.put_str(x, y, mark, Style::new(theme::ACCENT_SOFT, bg));
        x += 4;
    }

    let (star, star_color) = if fitting.favorite {
        ("★", theme::FAVORITE)
    } else {
        ("☆", theme::MUTED)
    };
    surface.put_str(x, y, star, Style::new(star_color, bg));
    x += 2;

    surface.put_str(
        x,
        y,
        &fit_width(&fitting.fitting_name, 20),
        Style::new(theme::TEXT, bg),
    );
    x += 21;
    surface.put_str(
        x,
        y,
        &fit_width(fitting.kind.label(), 20),
        Style::new(theme::MUTED, bg),
    );
    x += 21;
    surface.put_str(
        x,
        y,
        &fit_width(fitting.status.label(), 6),
        Style::new(theme::ACCENT_SOFT, bg),
    );
    x += 7;
    surface.put_str(
        x,
        y,
        &fit_width(fitting.permission.label(), 16),
        Style::new(theme::MUTED, bg),
    );
    x += 17;
    surface.put_str(
        x,
        y,
        &format!("{} {}", fitting.area, fitting.detail_location),
        Style::new(theme::MUTED, bg).dim(),
    );
}
