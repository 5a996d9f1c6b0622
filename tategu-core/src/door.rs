//! Door operation state.
//!
//! Explicit state objects for the operation screen: which door is being
//! operated, which action the confirm overlay is armed for, and the
//! device's own power and motion state. The screen that owns them passes
//! them where needed; there is no process-global store.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::fitting::Fitting;

/// The two confirmable door operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorAction {
    Open,
    Close,
}

impl DoorAction {
    pub fn label(self) -> &'static str {
        match self {
            DoorAction::Open => "open",
            DoorAction::Close => "close",
        }
    }
}

/// Which operation panel a fitting gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorKind {
    /// Open/close buttons.
    Door,
    /// Up/stop/down buttons.
    Shutter,
}

/// Travel direction of a shutter in motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// The door the operation screen is working on.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedDoor {
    pub kind: DoorKind,
    pub device_id: String,
    pub fitting_id: u32,
    pub fitting_name: String,
    /// Timestamp of the most recent operation on this door.
    pub logged_at: DateTime<Utc>,
}

/// Holds the door currently selected for operation, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoorSelection {
    current: Option<SelectedDoor>,
}

impl DoorSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a fitting for operation.
    pub fn select(&mut self, fitting: &Fitting, at: DateTime<Utc>) {
        self.current = Some(SelectedDoor {
            kind: fitting.kind.door_kind(),
            device_id: fitting.device_id.clone(),
            fitting_id: fitting.fitting_id,
            fitting_name: fitting.fitting_name.clone(),
            logged_at: at,
        });
    }

    pub fn current(&self) -> Option<&SelectedDoor> {
        self.current.as_ref()
    }

    /// Update the operation timestamp on the selected door.
    pub fn touch(&mut self, at: DateTime<Utc>) {
        if let Some(door) = &mut self.current {
            door.logged_at = at;
        }
    }

    pub fn reset(&mut self) {
        self.current = None;
    }
}

/// Which operation the confirm overlay is armed for, and which one last
/// ran. The overlay is visible exactly while an action is pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DoorControl {
    active: Option<DoorAction>,
    pending: Option<DoorAction>,
}

impl DoorControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the confirm overlay for an action.
    pub fn arm(&mut self, action: DoorAction) {
        self.pending = Some(action);
    }

    pub fn pending(&self) -> Option<DoorAction> {
        self.pending
    }

    /// Promote the pending action to active and close the overlay.
    ///
    /// Returns the confirmed action, or `None` when nothing was pending.
    pub fn confirm(&mut self) -> Option<DoorAction> {
        let action = self.pending.take();
        if action.is_some() {
            self.active = action;
        }
        action
    }

    /// Dismiss the overlay without running the action.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn active(&self) -> Option<DoorAction> {
        self.active
    }

    pub fn reset(&mut self) {
        self.active = None;
        self.pending = None;
    }
}

/// Power and motion state of the selected device.
///
/// `open` and the move commands begin the running state; `close` and
/// `stop` end it. Powering off leaves motion state in place; the panel
/// simply stops showing it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceControl {
    powered_on: bool,
    running: bool,
    open: bool,
    position: Option<MoveDirection>,
}

impl DeviceControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_powered_on(&self) -> bool {
        self.powered_on
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn position(&self) -> Option<MoveDirection> {
        self.position
    }

    pub fn turn_on(&mut self) {
        self.powered_on = true;
    }

    pub fn turn_off(&mut self) {
        self.powered_on = false;
    }

    pub fn open(&mut self) {
        self.running = true;
        self.open = true;
    }

    pub fn close(&mut self) {
        self.running = false;
        self.open = false;
    }

    pub fn move_up(&mut self) {
        self.running = true;
        self.position = Some(MoveDirection::Up);
    }

    pub fn move_down(&mut self) {
        self.running = true;
        self.position = Some(MoveDirection::Down);
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.position = None;
    }

    /// Run a confirmed door action against the device.
    pub fn apply(&mut self, action: DoorAction) {
        match action {
            DoorAction::Open => self.open(),
            DoorAction::Close => self.close(),
        }
    }
}
