//! Detail screen: power and movement controls, operation history, and the
//! slide-to-confirm overlay for door open/close.

use std::time::Instant;

use tategu_core::{DoorAction, DoorKind, MoveDirection};
use tategu_slide::blend_over;

use crate::app::App;
use crate::screens::{draw_button, put_centered};
use crate::surface::{Rect, Style, Surface};
use crate::theme;

/// Interior height of the confirm track, which doubles as the control's
/// travel distance: one terminal row of drag per unit.
pub const TRACK_ROWS: u16 = 12;

/// History lines shown under the controls.
const HISTORY_LINES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailButton {
    MoveUp,
    Stop,
    MoveDown,
    Open,
    Close,
}

/// Clickable regions of the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailGeometry {
    pub back: Rect,
    pub power: Rect,
    /// Movement/open controls; empty while the device is powered off.
    pub buttons: Vec<(DetailButton, Rect)>,
}

impl DetailGeometry {
    pub fn button_at(&self, x: u16, y: u16) -> Option<DetailButton> {
        self.buttons
            .iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(button, _)| *button)
    }
}

pub fn geometry(_size: (u16, u16), kind: DoorKind, powered: bool) -> DetailGeometry {
    let back = Rect::new(1, 0, 6, 1);
    let power = Rect::new(2, 7, 14, 1);
    let mut buttons = Vec::new();
    if powered {
        match kind {
            DoorKind::Shutter => {
                buttons.push((DetailButton::MoveUp, Rect::new(2, 9, 10, 1)));
                buttons.push((DetailButton::Stop, Rect::new(14, 9, 10, 1)));
                buttons.push((DetailButton::MoveDown, Rect::new(26, 9, 10, 1)));
            }
            DoorKind::Door => {
                buttons.push((DetailButton::Open, Rect::new(2, 9, 10, 1)));
                buttons.push((DetailButton::Close, Rect::new(14, 9, 12, 1)));
            }
        }
    }
    DetailGeometry {
        back,
        power,
        buttons,
    }
}

/// Placement of the confirm overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayGeometry {
    pub panel: Rect,
    /// The gesture surface; a press here starts the drag.
    pub track: Rect,
    pub cancel: Rect,
}

pub fn overlay_geometry(size: (u16, u16)) -> OverlayGeometry {
    let (width, height) = size;
    let panel_w = 34;
    let panel_h = TRACK_ROWS + 8;
    let px = width.saturating_sub(panel_w) / 2;
    let py = height.saturating_sub(panel_h) / 2;
    OverlayGeometry {
        panel: Rect::new(px, py, panel_w, panel_h),
        track: Rect::new(px + (panel_w - 7) / 2, py + 4, 7, TRACK_ROWS),
        cancel: Rect::new(px + (panel_w - 12) / 2, py + panel_h - 2, 12, 1),
    }
}

fn action_label(action: DoorAction) -> &'static str {
    match action {
        DoorAction::Open => "開く",
        DoorAction::Close => "閉じる",
    }
}

fn button_label(button: DetailButton) -> &'static str {
    match button {
        DetailButton::MoveUp => "上昇",
        DetailButton::Stop => "停止",
        DetailButton::MoveDown => "下降",
        DetailButton::Open => "開く",
        DetailButton::Close => "閉じる",
    }
}

/// Whether a control reflects the device's present state, echoing the
/// operation panel's highlighted-button behavior.
fn is_activated(app: &App, button: DetailButton) -> bool {
    let device = &app.device;
    match button {
        DetailButton::MoveUp => {
            device.is_running() && device.position() == Some(MoveDirection::Up)
        }
        DetailButton::Stop => !device.is_running(),
        DetailButton::MoveDown => {
            device.is_running() && device.position() == Some(MoveDirection::Down)
        }
        DetailButton::Open => device.is_running() && device.is_open(),
        DetailButton::Close => !device.is_running() && !device.is_open(),
    }
}

pub fn draw(app: &App, surface: &mut Surface, now: Instant) {
    let Some(door) = app.door.current() else {
        return;
    };
    let size = (surface.width(), surface.height());
    let geometry = geometry(size, door.kind, app.device.is_powered_on());

    let header_style = Style::new(theme::TEXT, theme::ACCENT);
    surface.fill_rect(Rect::new(0, 0, surface.width(), 1), header_style);
    draw_button(surface, geometry.back, "[戻る]", header_style);
    surface.put_str(8, 0, &door.fitting_name, header_style.bold());

    if let Some(fitting) = app.catalog.get(&door.device_id) {
        let muted = Style::new(theme::MUTED, theme::BG);
        surface.put_str(
            2,
            2,
            &format!(
                "場所: {} {} {}",
                fitting.station_building_name, fitting.area, fitting.detail_location
            ),
            muted,
        );
        surface.put_str(
            2,
            3,
            &format!("種別: {}", fitting.kind.label()),
            muted,
        );
        surface.put_str(
            2,
            4,
            &format!(
                "状態: {}   権限: {}",
                fitting.status.label(),
                fitting.permission.label()
            ),
            muted,
        );
    }
    surface.put_str(
        2,
        5,
        &format!("最終操作: {}", door.logged_at.format("%Y-%m-%d %H:%M:%S")),
        Style::new(theme::MUTED, theme::BG).dim(),
    );

    let power_style = if app.device.is_powered_on() {
        Style::new(theme::TEXT, theme::POWER_ON).bold()
    } else {
        Style::new(theme::MUTED, theme::PANEL_RAISED)
    };
    let power_label = if app.device.is_powered_on() {
        "電源 ON"
    } else {
        "電源 OFF"
    };
    draw_button(surface, geometry.power, power_label, power_style);
    surface.put_str(
        18,
        7,
        &motion_text(app, door.kind),
        Style::new(theme::ACCENT_SOFT, theme::BG),
    );

    if app.device.is_powered_on() {
        for (button, rect) in &geometry.buttons {
            let style = if is_activated(app, *button) {
                Style::new(theme::TEXT, theme::ACCENT).bold()
            } else {
                Style::new(theme::TEXT, theme::PANEL_RAISED)
            };
            draw_button(surface, *rect, button_label(*button), style);
        }
    } else {
        surface.put_str(
            2,
            9,
            "電源を入れると操作できます",
            Style::new(theme::MUTED, theme::BG).dim(),
        );
    }

    surface.put_str(2, 11, "操作履歴", Style::new(theme::TEXT, theme::BG).bold());
    let records: Vec<_> = app
        .oplog
        .records()
        .iter()
        .filter(|record| record.device_id == door.device_id)
        .take(HISTORY_LINES)
        .collect();
    if records.is_empty() {
        surface.put_str(
            2,
            12,
            "まだ操作はありません",
            Style::new(theme::MUTED, theme::BG).dim(),
        );
    } else {
        for (offset, record) in records.iter().enumerate() {
            surface.put_str(
                2,
                12 + offset as u16,
                &format!(
                    "{}  {} ({})",
                    record.at.format("%H:%M:%S"),
                    action_label(record.action),
                    record.action.label()
                ),
                Style::new(theme::MUTED, theme::BG),
            );
        }
    }

    if app.door_control.pending().is_some() {
        draw_overlay(app, surface, now);
    }
    if app.hint_until.is_some() {
        draw_hint(surface);
    }
}

fn motion_text(app: &App, kind: DoorKind) -> String {
    if !app.device.is_powered_on() {
        return String::new();
    }
    match kind {
        DoorKind::Shutter => match (app.device.is_running(), app.device.position()) {
            (true, Some(MoveDirection::Up)) => String::from("● 上昇中"),
            (true, Some(MoveDirection::Down)) => String::from("● 下降中"),
            (true, None) => String::from("● 動作中"),
            (false, _) => String::from("停止中"),
        },
        DoorKind::Door => {
            if app.device.is_running() {
                String::from("● 動作中")
            } else if app.device.is_open() {
                String::from("開いています")
            } else {
                String::from("閉じています")
            }
        }
    }
}

fn draw_overlay(app: &App, surface: &mut Surface, now: Instant) {
    let Some(action) = app.door_control.pending() else {
        return;
    };
    let Some(slide) = &app.slide else {
        return;
    };
    let geometry = overlay_geometry((surface.width(), surface.height()));
    let panel = geometry.panel;
    surface.fill_rect(panel, Style::new(theme::TEXT, theme::PANEL));

    put_centered(
        surface,
        panel,
        panel.y + 1,
        &format!("操作の確認: {}", action_label(action)),
        Style::new(theme::TEXT, theme::PANEL).bold(),
    );
    put_centered(
        surface,
        panel,
        panel.y + 2,
        "矢印を下端までドラッグ",
        Style::new(theme::MUTED, theme::PANEL).dim(),
    );

    let visuals = slide.visuals(now);
    let flash = slide.config().flash_color;
    let fill_color = blend_over(visuals.track_color, flash, visuals.flash_opacity);
    let filled = (visuals.fill_fraction * f32::from(TRACK_ROWS)).round() as u16;
    for row in 0..TRACK_ROWS {
        let bg = if row < filled {
            fill_color
        } else {
            theme::TRACK_EMPTY
        };
        surface.fill_rect(
            Rect::new(geometry.track.x, geometry.track.y + row, geometry.track.width, 1),
            Style::new(theme::TEXT, bg),
        );
    }

    let offset = visuals
        .indicator_offset
        .round()
        .clamp(0.0, f32::from(TRACK_ROWS - 1)) as u16;
    let arrow_bg = if offset < filled {
        fill_color
    } else {
        theme::TRACK_EMPTY
    };
    surface.put_str(
        geometry.track.x + geometry.track.width / 2,
        geometry.track.y + offset,
        "▼",
        Style::new(visuals.indicator_color, arrow_bg).bold(),
    );

    put_centered(
        surface,
        panel,
        geometry.track.y + TRACK_ROWS + 1,
        &format!("{:>3}%", visuals.fill_percent),
        Style::new(theme::ACCENT_SOFT, theme::PANEL),
    );
    draw_button(
        surface,
        geometry.cancel,
        "キャンセル",
        Style::new(theme::TEXT, theme::PANEL_RAISED),
    );
}

fn draw_hint(surface: &mut Surface) {
    let (width, height) = (surface.width(), surface.height());
    let panel = Rect::new(
        width.saturating_sub(32) / 2,
        height.saturating_sub(4) / 2,
        32,
        4,
    );
    surface.fill_rect(panel, Style::new(theme::TEXT, theme::PANEL_RAISED));
    put_centered(
        surface,
        panel,
        panel.y + 1,
        "操作は確定されませんでした",
        Style::new(theme::WARN, theme::PANEL_RAISED).bold(),
    );
    put_centered(
        surface,
        panel,
        panel.y + 2,
        "もう一度最後までスライド",
        Style::new(theme::MUTED, theme::PANEL_RAISED),
    );
}
