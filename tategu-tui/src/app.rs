//! App state machine: screens, input routing, and the confirm gesture.
//!
//! All mutation flows through [`App::handle_event`] and [`App::tick`];
//! drawing reads the state back out. Both take the caller's clock, so the
//! whole machine can be driven deterministically.

use std::time::{Duration, Instant};

use chrono::Utc;
use log::{debug, error};
use tategu_core::{
    Catalog, DeviceControl, DoorAction, DoorControl, DoorKind, DoorSelection, OperationLog,
    OperationRecord, Pager, Selection,
};
use tategu_slide::{SlideConfig, SlideOutcome, SlideToConfirm};

use crate::event::{AppEvent, Key, MouseButton};
use crate::screens::detail::{self, DetailButton};
use crate::screens::list::{self, ListGeometry};
use crate::surface::{Style, Surface};
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    List,
    Detail,
}

pub struct App {
    pub(crate) catalog: Catalog,
    pub(crate) screen: Screen,
    pub(crate) cursor: usize,
    pub(crate) scroll_top: usize,
    pub(crate) selection: Selection,
    pub(crate) pager: Pager,
    pub(crate) door: DoorSelection,
    pub(crate) door_control: DoorControl,
    pub(crate) device: DeviceControl,
    pub(crate) oplog: OperationLog,
    /// The confirm gesture; lives exactly as long as the overlay.
    pub(crate) slide: Option<SlideToConfirm>,
    /// Row where the active drag grabbed the track.
    pub(crate) grab: Option<u16>,
    /// Deadline for the try-again hint after an incomplete gesture.
    pub(crate) hint_until: Option<Instant>,
    pub(crate) size: (u16, u16),
}

impl App {
    const HINT_DURATION: Duration = Duration::from_millis(2000);

    pub fn new(catalog: Catalog) -> Self {
        let pager = Pager::new(catalog.len());
        Self {
            catalog,
            screen: Screen::List,
            cursor: 0,
            scroll_top: 0,
            selection: Selection::new(),
            pager,
            door: DoorSelection::new(),
            door_control: DoorControl::new(),
            device: DeviceControl::new(),
            oplog: OperationLog::new(),
            slide: None,
            grab: None,
            hint_until: None,
            size: (80, 24),
        }
    }

    /// Rows currently presentable: the paged-in window of the catalog.
    pub(crate) fn shown(&self) -> usize {
        self.pager.visible_len().min(self.catalog.len())
    }

    /// True while something needs frame ticks: a timeline inside the slide
    /// control, a page load, or a hint waiting to expire.
    pub fn is_animating(&self) -> bool {
        self.pager.is_loading()
            || self.hint_until.is_some()
            || self.slide.as_ref().is_some_and(SlideToConfirm::is_animating)
    }

    pub fn handle_event(&mut self, event: AppEvent, now: Instant) -> Flow {
        if let AppEvent::Resize { width, height } = event {
            self.size = (width, height);
            return Flow::Continue;
        }
        if let AppEvent::Key {
            key: Key::Char('c'),
            modifiers,
        } = event
        {
            if modifiers.ctrl {
                return Flow::Quit;
            }
        }
        match self.screen {
            Screen::List => self.on_list_event(event, now),
            Screen::Detail => self.on_detail_event(event, now),
        }
    }

    /// Advance page loads, hint expiry, and the gesture timelines.
    pub fn tick(&mut self, now: Instant) {
        self.pager.poll(now);
        if let Some(until) = self.hint_until {
            if now >= until {
                self.hint_until = None;
            }
        }
        if let Some(slide) = &mut self.slide {
            if let Some(SlideOutcome::Success) = slide.tick(now) {
                self.finish_confirmation();
            }
        }
    }

    pub fn draw(&self, surface: &mut Surface, now: Instant) {
        let area = surface.area();
        surface.fill_rect(area, Style::new(theme::TEXT, theme::BG));
        match self.screen {
            Screen::List => list::draw(self, surface),
            Screen::Detail => detail::draw(self, surface, now),
        }
    }

    // ----- list screen -----

    fn on_list_event(&mut self, event: AppEvent, now: Instant) -> Flow {
        match event {
            AppEvent::Key { key, modifiers } if modifiers.none() => match key {
                Key::Char('q') => return Flow::Quit,
                Key::Char('j') | Key::Down => self.cursor_down(now),
                Key::Char('k') | Key::Up => self.cursor_up(),
                Key::Char('f') => self.toggle_favorite_at_cursor(),
                Key::Char('a') if self.selection.is_active() => self.toggle_select_all(),
                Key::Char('r') => self.refresh(),
                Key::Escape if self.selection.is_active() => self.selection.exit(),
                Key::Enter => {
                    if self.selection.is_active() {
                        self.toggle_at_cursor();
                    } else {
                        self.open_detail(self.cursor);
                    }
                }
                Key::Home => {
                    self.cursor = 0;
                    self.ensure_cursor_visible();
                }
                Key::End => {
                    self.cursor = self.shown().saturating_sub(1);
                    self.ensure_cursor_visible();
                }
                Key::PageUp => {
                    let page = list::geometry(self.size).capacity;
                    self.cursor = self.cursor.saturating_sub(page);
                    self.ensure_cursor_visible();
                }
                Key::PageDown => {
                    let page = list::geometry(self.size).capacity;
                    self.cursor = (self.cursor + page).min(self.shown().saturating_sub(1));
                    self.ensure_cursor_visible();
                }
                _ => {}
            },
            AppEvent::Scroll { delta } => {
                if delta > 0 {
                    self.cursor_down(now);
                } else {
                    self.cursor_up();
                }
            }
            AppEvent::Click { x: _, y, button } => {
                let geometry = list::geometry(self.size);
                let Some(row) = self.row_at(&geometry, y) else {
                    return Flow::Continue;
                };
                let Some(id) = self
                    .catalog
                    .fittings()
                    .get(row)
                    .map(|f| f.device_id.clone())
                else {
                    return Flow::Continue;
                };
                match button {
                    MouseButton::Right => {
                        self.cursor = row;
                        self.selection.begin(&id);
                        debug!("selection mode entered at {id}");
                    }
                    MouseButton::Left if self.selection.is_active() => {
                        self.cursor = row;
                        self.selection.toggle(&id);
                    }
                    MouseButton::Left => {
                        self.cursor = row;
                        self.open_detail(row);
                    }
                    MouseButton::Middle => {}
                }
            }
            _ => {}
        }
        Flow::Continue
    }

    fn row_at(&self, geometry: &ListGeometry, y: u16) -> Option<usize> {
        if y < geometry.rows_top || y >= geometry.footer_y {
            return None;
        }
        let index = self.scroll_top + usize::from(y - geometry.rows_top);
        (index < self.shown()).then_some(index)
    }

    fn cursor_down(&mut self, now: Instant) {
        if self.cursor + 1 < self.shown() {
            self.cursor += 1;
            self.ensure_cursor_visible();
        } else {
            self.pager.request_more(now);
        }
    }

    fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.ensure_cursor_visible();
    }

    fn ensure_cursor_visible(&mut self) {
        let capacity = list::geometry(self.size).capacity;
        if capacity == 0 {
            return;
        }
        if self.cursor < self.scroll_top {
            self.scroll_top = self.cursor;
        } else if self.cursor >= self.scroll_top + capacity {
            self.scroll_top = self.cursor + 1 - capacity;
        }
    }

    fn toggle_at_cursor(&mut self) {
        if let Some(id) = self
            .catalog
            .fittings()
            .get(self.cursor)
            .map(|f| f.device_id.clone())
        {
            self.selection.toggle(&id);
        }
    }

    fn toggle_select_all(&mut self) {
        let shown = self.shown();
        self.selection
            .toggle_all_visible(self.catalog.fittings()[..shown].iter().map(|f| f.device_id.as_str()));
    }

    fn toggle_favorite_at_cursor(&mut self) {
        let Some(id) = self
            .catalog
            .fittings()
            .get(self.cursor)
            .map(|f| f.device_id.clone())
        else {
            return;
        };
        if let Some(favorite) = self.catalog.toggle_favorite(&id) {
            debug!("favorite {id}: {favorite}");
        }
    }

    fn refresh(&mut self) {
        debug!("list refreshed");
        self.pager.reset(self.catalog.len());
        self.selection.exit();
        self.cursor = 0;
        self.scroll_top = 0;
    }

    fn open_detail(&mut self, index: usize) {
        let Some(fitting) = self.catalog.fittings().get(index).cloned() else {
            return;
        };
        debug!("operating {} ({})", fitting.fitting_name, fitting.device_id);
        self.door.select(&fitting, Utc::now());
        self.device = DeviceControl::new();
        self.door_control = DoorControl::new();
        self.screen = Screen::Detail;
    }

    // ----- detail screen -----

    fn on_detail_event(&mut self, event: AppEvent, now: Instant) -> Flow {
        if self.hint_until.is_some() {
            if matches!(event, AppEvent::Key { .. } | AppEvent::Click { .. }) {
                self.hint_until = None;
            }
            return Flow::Continue;
        }
        if self.door_control.pending().is_some() {
            self.on_overlay_event(event, now);
            return Flow::Continue;
        }
        match event {
            AppEvent::Key { key, modifiers } if modifiers.none() => match key {
                Key::Escape | Key::Backspace | Key::Char('q') => self.close_detail(),
                Key::Char('p') => self.toggle_power(),
                Key::Char('u') => self.press(DetailButton::MoveUp),
                Key::Char('s') => self.press(DetailButton::Stop),
                Key::Char('d') => self.press(DetailButton::MoveDown),
                Key::Char('o') => self.press(DetailButton::Open),
                Key::Char('c') => self.press(DetailButton::Close),
                _ => {}
            },
            AppEvent::Click {
                x,
                y,
                button: MouseButton::Left,
            } => {
                let Some(kind) = self.door.current().map(|d| d.kind) else {
                    return Flow::Continue;
                };
                let geometry = detail::geometry(self.size, kind, self.device.is_powered_on());
                if geometry.power.contains(x, y) {
                    self.toggle_power();
                } else if let Some(button) = geometry.button_at(x, y) {
                    self.press(button);
                } else if geometry.back.contains(x, y) {
                    self.close_detail();
                }
            }
            _ => {}
        }
        Flow::Continue
    }

    fn toggle_power(&mut self) {
        if self.device.is_powered_on() {
            self.device.turn_off();
        } else {
            self.device.turn_on();
        }
    }

    /// Run a control press, gated on power and the fitting's kind. Door
    /// actions arm the confirm overlay; shutter movement acts directly.
    fn press(&mut self, button: DetailButton) {
        if !self.device.is_powered_on() {
            return;
        }
        let Some(kind) = self.door.current().map(|d| d.kind) else {
            return;
        };
        match (kind, button) {
            (DoorKind::Shutter, DetailButton::MoveUp) => self.device.move_up(),
            (DoorKind::Shutter, DetailButton::Stop) => self.device.stop(),
            (DoorKind::Shutter, DetailButton::MoveDown) => self.device.move_down(),
            (DoorKind::Door, DetailButton::Open) => self.arm(DoorAction::Open),
            (DoorKind::Door, DetailButton::Close) => self.arm(DoorAction::Close),
            _ => {}
        }
    }

    fn arm(&mut self, action: DoorAction) {
        match SlideToConfirm::new(SlideConfig::new(f32::from(detail::TRACK_ROWS))) {
            Ok(control) => {
                debug!("confirm armed: {}", action.label());
                self.door_control.arm(action);
                self.slide = Some(control);
                self.grab = None;
            }
            Err(err) => error!("confirm control misconfigured: {err}"),
        }
    }

    fn close_detail(&mut self) {
        self.door.reset();
        self.door_control.reset();
        self.device = DeviceControl::new();
        self.slide = None;
        self.grab = None;
        self.hint_until = None;
        self.screen = Screen::List;
    }

    // ----- confirm overlay -----

    fn on_overlay_event(&mut self, event: AppEvent, now: Instant) {
        let geometry = detail::overlay_geometry(self.size);
        match event {
            AppEvent::Key {
                key: Key::Escape, ..
            } => self.cancel_confirmation(),
            AppEvent::Click {
                x,
                y,
                button: MouseButton::Left,
            } => {
                if geometry.track.contains(x, y) {
                    self.grab = Some(y);
                    if let Some(slide) = &mut self.slide {
                        slide.drag(0.0, now);
                    }
                } else if geometry.cancel.contains(x, y) || !geometry.panel.contains(x, y) {
                    self.cancel_confirmation();
                }
            }
            AppEvent::Drag {
                y,
                button: MouseButton::Left,
                ..
            } => {
                if let Some(origin) = self.grab {
                    if let Some(slide) = &mut self.slide {
                        slide.drag(f32::from(y) - f32::from(origin), now);
                    }
                }
            }
            AppEvent::Release {
                button: MouseButton::Left,
                ..
            } => {
                if self.grab.take().is_some() {
                    if let Some(slide) = &mut self.slide {
                        if let Some(SlideOutcome::Incomplete) = slide.release(now) {
                            self.hint_until = Some(now + Self::HINT_DURATION);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    fn cancel_confirmation(&mut self) {
        debug!("confirm cancelled");
        self.door_control.cancel();
        self.slide = None;
        self.grab = None;
        self.hint_until = None;
    }

    /// The success path: apply the confirmed action to the device, record
    /// it, and drop the overlay.
    fn finish_confirmation(&mut self) {
        let Some(action) = self.door_control.confirm() else {
            return;
        };
        self.device.apply(action);
        let at = Utc::now();
        if let Some(door) = self.door.current().cloned() {
            self.oplog.push(OperationRecord {
                fitting_id: door.fitting_id,
                fitting_name: door.fitting_name,
                device_id: door.device_id,
                action,
                at,
            });
        }
        self.door.touch(at);
        self.slide = None;
        self.grab = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Modifiers;
    use tategu_slide::Phase;

    const FIXTURE: &str = include_str!("../data/fittings.json");

    fn start() -> (App, Instant) {
        let catalog = Catalog::from_json(FIXTURE).expect("fixture parses");
        let mut app = App::new(catalog);
        let t0 = Instant::now();
        app.handle_event(
            AppEvent::Resize {
                width: 80,
                height: 24,
            },
            t0,
        );
        (app, t0)
    }

    fn key(ch: char) -> AppEvent {
        AppEvent::Key {
            key: Key::Char(ch),
            modifiers: Modifiers::default(),
        }
    }

    fn press(key: Key) -> AppEvent {
        AppEvent::Key {
            key,
            modifiers: Modifiers::default(),
        }
    }

    fn click(x: u16, y: u16) -> AppEvent {
        AppEvent::Click {
            x,
            y,
            button: MouseButton::Left,
        }
    }

    fn right_click(x: u16, y: u16) -> AppEvent {
        AppEvent::Click {
            x,
            y,
            button: MouseButton::Right,
        }
    }

    fn drag(x: u16, y: u16) -> AppEvent {
        AppEvent::Drag {
            x,
            y,
            button: MouseButton::Left,
        }
    }

    fn release(x: u16, y: u16) -> AppEvent {
        AppEvent::Release {
            x,
            y,
            button: MouseButton::Left,
        }
    }

    /// Open the detail screen for a list row and power the device on.
    fn open_powered(app: &mut App, row: usize, t0: Instant) {
        for _ in 0..row {
            app.handle_event(key('j'), t0);
        }
        app.handle_event(press(Key::Enter), t0);
        assert_eq!(app.screen, Screen::Detail);
        app.handle_event(key('p'), t0);
        assert!(app.device.is_powered_on());
    }

    /// Arm the open confirmation and grab the track at its top row.
    fn arm_and_grab(app: &mut App, t0: Instant) -> crate::screens::detail::OverlayGeometry {
        app.handle_event(key('o'), t0);
        assert_eq!(app.door_control.pending(), Some(DoorAction::Open));
        let overlay = detail::overlay_geometry(app.size);
        app.handle_event(click(overlay.track.x + 1, overlay.track.y), t0);
        assert_eq!(app.grab, Some(overlay.track.y));
        overlay
    }

    // ===== list screen =====

    #[test]
    fn test_first_page_is_visible() {
        let (app, _) = start();
        assert_eq!(app.catalog.len(), 24);
        assert_eq!(app.shown(), 10);
        assert!(app.pager.has_more());
    }

    #[test]
    fn test_cursor_at_end_requests_next_page() {
        let (mut app, t0) = start();
        for _ in 0..9 {
            app.handle_event(key('j'), t0);
        }
        assert_eq!(app.cursor, 9);

        app.handle_event(key('j'), t0);
        assert_eq!(app.cursor, 9);
        assert!(app.pager.is_loading());
        assert!(app.is_animating());

        app.tick(t0 + Pager::LOAD_DELAY);
        assert_eq!(app.shown(), 20);
        app.handle_event(key('j'), t0 + Pager::LOAD_DELAY);
        assert_eq!(app.cursor, 10);
    }

    #[test]
    fn test_scroll_events_move_cursor() {
        let (mut app, t0) = start();
        app.handle_event(AppEvent::Scroll { delta: 1 }, t0);
        app.handle_event(AppEvent::Scroll { delta: 1 }, t0);
        assert_eq!(app.cursor, 2);
        app.handle_event(AppEvent::Scroll { delta: -1 }, t0);
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn test_refresh_resets_paging_and_selection() {
        let (mut app, t0) = start();
        for _ in 0..10 {
            app.handle_event(key('j'), t0);
        }
        app.tick(t0 + Pager::LOAD_DELAY);
        assert_eq!(app.shown(), 20);
        app.handle_event(right_click(4, 2), t0);
        assert!(app.selection.is_active());

        app.handle_event(key('r'), t0);
        assert_eq!(app.shown(), 10);
        assert_eq!(app.cursor, 0);
        assert!(!app.selection.is_active());
        assert!(!app.pager.is_loading());
    }

    #[test]
    fn test_right_click_enters_selection_and_clicks_toggle() {
        let (mut app, t0) = start();
        let first = app.catalog.fittings()[0].device_id.clone();
        let second = app.catalog.fittings()[1].device_id.clone();

        app.handle_event(right_click(4, 2), t0);
        assert!(app.selection.is_active());
        assert!(app.selection.is_selected(&first));
        assert_eq!(app.selection.len(), 1);

        app.handle_event(click(4, 3), t0);
        assert!(app.selection.is_selected(&second));
        assert_eq!(app.selection.len(), 2);

        app.handle_event(click(4, 3), t0);
        assert!(!app.selection.is_selected(&second));
        assert_eq!(app.selection.len(), 1);
    }

    #[test]
    fn test_select_all_visible_toggles_between_all_and_none() {
        let (mut app, t0) = start();
        app.handle_event(right_click(4, 2), t0);
        app.handle_event(key('a'), t0);
        assert_eq!(app.selection.len(), app.shown());

        app.handle_event(key('a'), t0);
        assert_eq!(app.selection.len(), 0);
        assert!(app.selection.is_active());

        app.handle_event(press(Key::Escape), t0);
        assert!(!app.selection.is_active());
    }

    #[test]
    fn test_favorite_toggles_from_list() {
        let (mut app, t0) = start();
        let before = app.catalog.fittings()[0].favorite;
        app.handle_event(key('f'), t0);
        assert_eq!(app.catalog.fittings()[0].favorite, !before);
        app.handle_event(key('f'), t0);
        assert_eq!(app.catalog.fittings()[0].favorite, before);
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, t0) = start();
        assert_eq!(app.handle_event(key('q'), t0), Flow::Quit);
        let ctrl_c = AppEvent::Key {
            key: Key::Char('c'),
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
        };
        assert_eq!(app.handle_event(ctrl_c, t0), Flow::Quit);
    }

    // ===== detail screen =====

    #[test]
    fn test_enter_opens_detail_and_escape_returns() {
        let (mut app, t0) = start();
        app.handle_event(press(Key::Enter), t0);
        assert_eq!(app.screen, Screen::Detail);
        let door = app.door.current().expect("door selected");
        assert_eq!(door.kind, DoorKind::Door);
        assert_eq!(door.device_id, app.catalog.fittings()[0].device_id);

        app.handle_event(press(Key::Escape), t0);
        assert_eq!(app.screen, Screen::List);
        assert!(app.door.current().is_none());
    }

    #[test]
    fn test_controls_require_power() {
        let (mut app, t0) = start();
        app.handle_event(press(Key::Enter), t0);
        app.handle_event(key('o'), t0);
        assert_eq!(app.door_control.pending(), None);

        app.handle_event(key('p'), t0);
        app.handle_event(key('o'), t0);
        assert_eq!(app.door_control.pending(), Some(DoorAction::Open));
        assert!(app.slide.is_some());
    }

    #[test]
    fn test_clicking_buttons_through_geometry() {
        let (mut app, t0) = start();
        app.handle_event(press(Key::Enter), t0);

        let unpowered = detail::geometry(app.size, DoorKind::Door, false);
        app.handle_event(click(unpowered.power.x + 1, unpowered.power.y), t0);
        assert!(app.device.is_powered_on());

        let powered = detail::geometry(app.size, DoorKind::Door, true);
        let (button, rect) = powered.buttons[0];
        assert_eq!(button, DetailButton::Open);
        app.handle_event(click(rect.x + 1, rect.y), t0);
        assert_eq!(app.door_control.pending(), Some(DoorAction::Open));
    }

    #[test]
    fn test_shutter_controls_drive_device_directly() {
        let (mut app, t0) = start();
        open_powered(&mut app, 1, t0);
        let door = app.door.current().expect("door selected");
        assert_eq!(door.kind, DoorKind::Shutter);

        app.handle_event(key('d'), t0);
        assert!(app.device.is_running());
        assert_eq!(app.device.position(), Some(tategu_core::MoveDirection::Down));
        assert_eq!(app.door_control.pending(), None);

        app.handle_event(key('s'), t0);
        assert!(!app.device.is_running());
        assert_eq!(app.device.position(), None);

        app.handle_event(key('u'), t0);
        assert_eq!(app.device.position(), Some(tategu_core::MoveDirection::Up));
    }

    // ===== confirm overlay =====

    #[test]
    fn test_full_slide_confirms_after_flash() {
        let (mut app, t0) = start();
        open_powered(&mut app, 0, t0);
        let overlay = arm_and_grab(&mut app, t0);

        // drag the full travel in one move
        app.handle_event(
            drag(overlay.track.x + 1, overlay.track.y + detail::TRACK_ROWS),
            t0,
        );
        let slide = app.slide.as_ref().expect("control alive");
        assert_eq!(slide.phase(), Phase::Completed);

        // releasing after the latch produces no incomplete outcome
        app.handle_event(release(overlay.track.x + 1, overlay.track.y + 12), t0);
        assert!(app.hint_until.is_none());

        // before the flash finishes nothing is applied
        app.tick(t0 + Duration::from_millis(100));
        assert!(!app.device.is_open());
        assert!(app.oplog.is_empty());

        // flash rise 150ms + fall 400ms
        app.tick(t0 + Duration::from_millis(550));
        assert!(app.device.is_open());
        assert!(app.device.is_running());
        assert_eq!(app.oplog.len(), 1);
        let record = app.oplog.latest().expect("record");
        assert_eq!(record.action, DoorAction::Open);
        assert_eq!(record.device_id, app.catalog.fittings()[0].device_id);
        assert_eq!(app.door_control.pending(), None);
        assert_eq!(app.door_control.active(), Some(DoorAction::Open));
        assert!(app.slide.is_none());
        assert_eq!(app.screen, Screen::Detail);
    }

    #[test]
    fn test_incomplete_release_shows_hint_then_dismisses() {
        let (mut app, t0) = start();
        open_powered(&mut app, 0, t0);
        let overlay = arm_and_grab(&mut app, t0);

        app.handle_event(drag(overlay.track.x + 1, overlay.track.y + 6), t0);
        app.handle_event(release(overlay.track.x + 1, overlay.track.y + 6), t0);
        assert!(app.hint_until.is_some());
        assert_eq!(
            app.slide.as_ref().map(|s| s.phase()),
            Some(Phase::Resetting)
        );
        assert!(app.is_animating());

        // reset lands first, hint stays up to its own deadline
        app.tick(t0 + Duration::from_millis(450));
        assert_eq!(app.slide.as_ref().map(|s| s.phase()), Some(Phase::Idle));
        assert!(app.hint_until.is_some());

        app.tick(t0 + App::HINT_DURATION);
        assert!(app.hint_until.is_none());
        // overlay stays armed for another try
        assert_eq!(app.door_control.pending(), Some(DoorAction::Open));
        assert!(app.oplog.is_empty());
    }

    #[test]
    fn test_hint_swallows_and_dismisses_on_input() {
        let (mut app, t0) = start();
        open_powered(&mut app, 0, t0);
        let overlay = arm_and_grab(&mut app, t0);
        app.handle_event(drag(overlay.track.x + 1, overlay.track.y + 3), t0);
        app.handle_event(release(overlay.track.x + 1, overlay.track.y + 3), t0);
        assert!(app.hint_until.is_some());

        // the dismissing click does not start a new grab
        app.handle_event(click(overlay.track.x + 1, overlay.track.y), t0);
        assert!(app.hint_until.is_none());
        assert!(app.grab.is_none());
    }

    #[test]
    fn test_escape_cancels_confirmation() {
        let (mut app, t0) = start();
        open_powered(&mut app, 0, t0);
        app.handle_event(key('o'), t0);
        assert!(app.slide.is_some());

        app.handle_event(press(Key::Escape), t0);
        assert_eq!(app.door_control.pending(), None);
        assert!(app.slide.is_none());
        assert_eq!(app.screen, Screen::Detail);

        app.handle_event(press(Key::Escape), t0);
        assert_eq!(app.screen, Screen::List);
    }

    #[test]
    fn test_cancel_button_and_backdrop_close_overlay() {
        let (mut app, t0) = start();
        open_powered(&mut app, 0, t0);
        app.handle_event(key('o'), t0);
        let overlay = detail::overlay_geometry(app.size);

        app.handle_event(click(overlay.cancel.x + 1, overlay.cancel.y), t0);
        assert_eq!(app.door_control.pending(), None);

        app.handle_event(key('c'), t0);
        assert_eq!(app.door_control.pending(), Some(DoorAction::Close));
        app.handle_event(click(0, 0), t0);
        assert_eq!(app.door_control.pending(), None);
    }

    #[test]
    fn test_drag_without_grab_is_ignored() {
        let (mut app, t0) = start();
        open_powered(&mut app, 0, t0);
        app.handle_event(key('o'), t0);
        let overlay = detail::overlay_geometry(app.size);

        app.handle_event(drag(overlay.track.x + 1, overlay.track.y + 8), t0);
        let slide = app.slide.as_ref().expect("control alive");
        assert_eq!(slide.phase(), Phase::Idle);
        assert_eq!(slide.progress(), 0.0);
    }

    // ===== drawing =====

    #[test]
    fn test_draw_list_frame() {
        let (app, t0) = start();
        let mut surface = Surface::new(80, 24);
        app.draw(&mut surface, t0);
        assert!(surface.row_text(0).contains("建具一覧"));
        assert!(surface.row_text(2).contains(&app.catalog.fittings()[0].fitting_name));
        assert!(surface.row_text(23).contains("読み込み"));
    }

    #[test]
    fn test_draw_confirm_overlay_frame() {
        let (mut app, t0) = start();
        open_powered(&mut app, 0, t0);
        app.handle_event(key('o'), t0);

        let mut surface = Surface::new(80, 24);
        app.draw(&mut surface, t0);
        let overlay = detail::overlay_geometry(app.size);
        assert!(surface.row_text(overlay.panel.y + 1).contains("操作の確認: 開く"));
        assert!(
            surface
                .row_text(overlay.cancel.y)
                .contains("キャンセル")
        );
    }
}
