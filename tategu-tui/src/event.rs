//! Crossterm events mapped into the app's single-pointer event model.

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    Key {
        key: Key,
        modifiers: Modifiers,
    },
    /// Mouse button pressed.
    Click {
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Pointer moved with a button held.
    Drag {
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Mouse button released.
    Release {
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Wheel step: positive is down.
    Scroll {
        delta: i16,
    },
    Resize {
        width: u16,
        height: u16,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(button: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtButton;
        match button {
            CtButton::Left => MouseButton::Left,
            CtButton::Right => MouseButton::Right,
            CtButton::Middle => MouseButton::Middle,
        }
    }
}

/// Map one terminal event to an app event; `None` for events the app has
/// no use for (hover moves, focus changes, key repeats and releases).
pub fn map_event(event: &CrosstermEvent) -> Option<AppEvent> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
            map_key(key.code).map(|k| AppEvent::Key {
                key: k,
                modifiers: key.modifiers.into(),
            })
        }
        CrosstermEvent::Mouse(mouse) => {
            use crossterm::event::MouseEventKind;
            let (x, y) = (mouse.column, mouse.row);
            match mouse.kind {
                MouseEventKind::Down(button) => Some(AppEvent::Click {
                    x,
                    y,
                    button: button.into(),
                }),
                MouseEventKind::Drag(button) => Some(AppEvent::Drag {
                    x,
                    y,
                    button: button.into(),
                }),
                MouseEventKind::Up(button) => Some(AppEvent::Release {
                    x,
                    y,
                    button: button.into(),
                }),
                MouseEventKind::ScrollUp => Some(AppEvent::Scroll { delta: -1 }),
                MouseEventKind::ScrollDown => Some(AppEvent::Scroll { delta: 1 }),
                _ => None,
            }
        }
        CrosstermEvent::Resize(width, height) => Some(AppEvent::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        KeyCode::PageUp => Some(Key::PageUp),
        KeyCode::PageDown => Some(Key::PageDown),
        _ => None,
    }
}
