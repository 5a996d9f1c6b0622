use std::time::Instant;

use log::debug;

use crate::color::Rgb;
use crate::config::{SlideConfig, SlideConfigError, SlideDirection};
use crate::easing::Easing;
use crate::tween::Tween;

/// Where the control is in its gesture lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No gesture in progress, track empty.
    Idle,
    /// Pointer down, progress following the drag.
    Dragging,
    /// Completion latched: flash overlay, then the re-arm hold.
    Completed,
    /// Progress animating back to zero.
    Resetting,
}

/// The outcome of a gesture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideOutcome {
    /// The gesture covered the full travel and the flash has finished.
    Success,
    /// The gesture was released short of the completion point.
    Incomplete,
}

/// Everything a host needs to draw the control, derived from one state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideVisuals {
    /// Filled share of the track, 0.0 to 1.0.
    pub fill_fraction: f32,
    /// Fill as a rounded whole percentage, 0 to 100.
    pub fill_percent: u8,
    /// Signed indicator translation along the drag axis, in layout units.
    /// Positive moves down, negative moves up.
    pub indicator_offset: f32,
    /// Track fill color at the current fill.
    pub track_color: Rgb,
    /// Indicator glyph color at the current fill.
    pub indicator_color: Rgb,
    /// Flash overlay opacity, 0.0 up to the configured peak.
    pub flash_opacity: f32,
}

/// A slide-to-confirm gesture control.
///
/// The host owns the pointer plumbing and the clock; the control owns the
/// gesture semantics. Feed it total drag displacement and release events,
/// call [`tick`](Self::tick) once per frame while
/// [`is_animating`](Self::is_animating), and draw whatever
/// [`visuals`](Self::visuals) returns.
///
/// A gesture session begins with the first [`drag`](Self::drag), latches
/// completion the instant progress covers the completion point, and ends
/// either through the success path (flash, re-arm hold, animated reset) or
/// through an incomplete release (animated reset straight away). At most one
/// outcome is produced per session.
#[derive(Debug, Clone)]
pub struct SlideToConfirm {
    config: SlideConfig,
    phase: Phase,
    /// The single owned progress value, always within [0, travel].
    progress: f32,
    /// Latch instant; `Some` exactly while `phase` is `Completed`.
    completed_at: Option<Instant>,
    success_emitted: bool,
    /// Carries progress from the latch point to full travel when the
    /// completion fraction is below 1.0.
    snap: Option<Tween>,
    reset: Option<Tween>,
}

impl SlideToConfirm {
    /// Create a control, rejecting unusable configurations up front.
    pub fn new(config: SlideConfig) -> Result<Self, SlideConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            phase: Phase::Idle,
            progress: 0.0,
            completed_at: None,
            success_emitted: false,
            snap: None,
            reset: None,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current progress along the track, in layout units.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn config(&self) -> &SlideConfig {
        &self.config
    }

    /// True while a timeline still needs [`tick`](Self::tick) calls to run
    /// to completion. Dragging itself is input-driven, not animated.
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Completed | Phase::Resetting)
    }

    /// Feed the total pointer displacement since the gesture began.
    ///
    /// Starts a session from `Idle` (or mid-`Resetting`, superseding the
    /// reset animation). Displacement maps through the configured direction
    /// and clamps to `[0, travel]`; the moment the mapped progress covers
    /// the completion point the session latches as completed and further
    /// drags are ignored until the control returns to idle.
    pub fn drag(&mut self, displacement: f32, now: Instant) {
        if !displacement.is_finite() {
            return;
        }
        if self.phase == Phase::Completed {
            return;
        }
        if self.phase == Phase::Resetting {
            debug!("slide: reset superseded by new gesture");
            self.reset = None;
        }
        if self.phase != Phase::Dragging {
            debug!("slide: gesture started");
        }
        self.phase = Phase::Dragging;
        self.progress = self.map_displacement(displacement);
        if self.progress >= self.config.travel * self.config.completion_fraction {
            self.latch(now);
        }
    }

    /// End the active drag.
    ///
    /// Returns `Some(Incomplete)` when the session ends short of the
    /// completion point; the progress then animates back to zero. Releases
    /// outside an active drag (including after a latched completion, where
    /// the success path governs) return `None`.
    pub fn release(&mut self, now: Instant) -> Option<SlideOutcome> {
        if self.phase != Phase::Dragging {
            return None;
        }
        debug!("slide: released short at progress {:.1}", self.progress);
        self.start_reset(now);
        Some(SlideOutcome::Incomplete)
    }

    /// Advance the timelines to `now`.
    ///
    /// Returns `Some(Success)` on exactly the tick at which the completion
    /// flash finishes, so a host acting on it always acts after the visual
    /// confirmation. All other ticks return `None`.
    pub fn tick(&mut self, now: Instant) -> Option<SlideOutcome> {
        match self.phase {
            Phase::Idle | Phase::Dragging => None,
            Phase::Completed => self.tick_completed(now),
            Phase::Resetting => {
                self.tick_resetting(now);
                None
            }
        }
    }

    /// Derive the drawable state at `now`.
    pub fn visuals(&self, now: Instant) -> SlideVisuals {
        let fill_fraction = (self.progress / self.config.travel).clamp(0.0, 1.0);
        let indicator_offset = match self.config.direction {
            SlideDirection::Down => self.progress,
            SlideDirection::Up => -self.progress,
        };
        SlideVisuals {
            fill_fraction,
            fill_percent: (fill_fraction * 100.0).round() as u8,
            indicator_offset,
            track_color: self.config.track_ramp.at(fill_fraction),
            indicator_color: self.config.indicator_ramp.at(fill_fraction),
            flash_opacity: self.flash_opacity(now),
        }
    }

    fn map_displacement(&self, displacement: f32) -> f32 {
        let along = match self.config.direction {
            SlideDirection::Down => displacement,
            SlideDirection::Up => -displacement,
        };
        along.clamp(0.0, self.config.travel)
    }

    fn latch(&mut self, now: Instant) {
        debug!("slide: completion latched at progress {:.1}", self.progress);
        self.phase = Phase::Completed;
        self.completed_at = Some(now);
        self.success_emitted = false;
        self.snap = if self.progress < self.config.travel {
            Some(Tween::new(
                self.progress,
                self.config.travel,
                now,
                self.config.snap_duration,
                Easing::EaseOut,
            ))
        } else {
            None
        };
    }

    fn tick_completed(&mut self, now: Instant) -> Option<SlideOutcome> {
        if let Some(snap) = self.snap {
            self.progress = snap.value_at(now);
            if snap.is_finished(now) {
                self.progress = snap.target();
                self.snap = None;
            }
        }

        let Some(completed_at) = self.completed_at else {
            return None;
        };
        let flash_done = completed_at + self.config.flash_rise + self.config.flash_fall;
        let rearm_done = flash_done + self.config.rearm_delay;

        let outcome = if !self.success_emitted && now >= flash_done {
            debug!("slide: success");
            self.success_emitted = true;
            Some(SlideOutcome::Success)
        } else {
            None
        };

        if self.success_emitted && now >= rearm_done {
            // Anchor the reset at the deadline itself so tick granularity
            // does not stretch the hold.
            self.progress = self.config.travel;
            self.completed_at = None;
            self.snap = None;
            self.start_reset(rearm_done);
        }

        outcome
    }

    fn tick_resetting(&mut self, now: Instant) {
        let Some(reset) = self.reset else {
            self.phase = Phase::Idle;
            return;
        };
        self.progress = reset.value_at(now);
        if reset.is_finished(now) {
            debug!("slide: reset to idle");
            self.progress = reset.target();
            self.reset = None;
            self.phase = Phase::Idle;
        }
    }

    fn start_reset(&mut self, started: Instant) {
        self.reset = Some(Tween::new(
            self.progress,
            0.0,
            started,
            self.config.reset_duration,
            Easing::EaseOut,
        ));
        self.phase = Phase::Resetting;
    }

    fn flash_opacity(&self, now: Instant) -> f32 {
        let Some(completed_at) = self.completed_at else {
            return 0.0;
        };
        let elapsed = now.duration_since(completed_at);
        let level = if elapsed < self.config.flash_rise {
            let t = elapsed.as_secs_f32() / self.config.flash_rise.as_secs_f32();
            Easing::EaseOut.apply(t)
        } else if elapsed < self.config.flash_rise + self.config.flash_fall {
            let t = (elapsed - self.config.flash_rise).as_secs_f32()
                / self.config.flash_fall.as_secs_f32();
            1.0 - Easing::EaseIn.apply(t)
        } else {
            0.0
        };
        level * self.config.flash_max_opacity
    }
}
