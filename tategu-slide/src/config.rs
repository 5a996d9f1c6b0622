use std::time::Duration;

use crate::color::{ColorRamp, Rgb};

/// Which physical drag direction fills the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideDirection {
    /// Dragging down (positive displacement) fills the track.
    #[default]
    Down,
    /// Dragging up (negative displacement) fills the track.
    Up,
}

/// Errors for unusable control configurations.
///
/// A bad travel distance would make every gesture complete instantly (or
/// never) with no visual hint of the mistake, so construction rejects it
/// outright instead of animating nonsense.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SlideConfigError {
    /// Travel must be a finite, positive distance in layout units.
    #[error("travel must be finite and positive, got {0}")]
    InvalidTravel(f32),
    /// Completion fraction must be in (0, 1].
    #[error("completion fraction must be in (0, 1], got {0}")]
    InvalidCompletionFraction(f32),
    /// Flash opacity must be in [0, 1].
    #[error("flash opacity must be in [0, 1], got {0}")]
    InvalidFlashOpacity(f32),
}

/// Configuration for a [`SlideToConfirm`](crate::SlideToConfirm) control.
///
/// `travel` is the one required value: the drag distance, in the host's
/// layout units, that counts as a full confirmation. Everything else has
/// defaults matching the stock appearance and can be overridden through the
/// builder methods.
///
/// # Example
///
/// ```ignore
/// let config = SlideConfig::new(250.0)
///     .direction(SlideDirection::Up)
///     .completion_fraction(0.95);
/// let control = SlideToConfirm::new(config)?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SlideConfig {
    /// Drag direction that fills the track.
    pub direction: SlideDirection,
    /// Full confirmation distance in layout units. Must be finite and > 0.
    pub travel: f32,
    /// Share of `travel` at which the gesture latches as complete, in
    /// (0, 1]. Below 1.0 the remaining distance is covered by a snap tween.
    pub completion_fraction: f32,
    /// Duration of the snap tween from the latch point to full travel.
    pub snap_duration: Duration,
    /// Flash overlay fade-in duration after completion.
    pub flash_rise: Duration,
    /// Flash overlay fade-out duration.
    pub flash_fall: Duration,
    /// Hold time at full travel after the flash, before the reset runs.
    pub rearm_delay: Duration,
    /// Duration of the animated reset back to zero progress.
    pub reset_duration: Duration,
    /// Track fill color from empty to full.
    pub track_ramp: ColorRamp,
    /// Indicator glyph color from empty to full.
    pub indicator_ramp: ColorRamp,
    /// Flash overlay color.
    pub flash_color: Rgb,
    /// Peak opacity of the flash overlay, in [0, 1].
    pub flash_max_opacity: f32,
}

impl SlideConfig {
    pub const TRACK_START: Rgb = Rgb::new(0x90, 0xca, 0xf9);
    pub const TRACK_END: Rgb = Rgb::new(0x15, 0x65, 0xc0);
    pub const INDICATOR_START: Rgb = Rgb::new(0x44, 0x44, 0x44);
    pub const INDICATOR_END: Rgb = Rgb::new(0x15, 0x65, 0xc0);
    pub const FLASH: Rgb = Rgb::new(0x00, 0xe6, 0x76);

    /// Create a configuration with the stock defaults for the given travel
    /// distance.
    pub fn new(travel: f32) -> Self {
        Self {
            direction: SlideDirection::Down,
            travel,
            completion_fraction: 1.0,
            snap_duration: Duration::from_millis(150),
            flash_rise: Duration::from_millis(150),
            flash_fall: Duration::from_millis(400),
            rearm_delay: Duration::from_millis(1000),
            reset_duration: Duration::from_millis(400),
            track_ramp: ColorRamp::new(Self::TRACK_START, Self::TRACK_END),
            indicator_ramp: ColorRamp::new(Self::INDICATOR_START, Self::INDICATOR_END),
            flash_color: Self::FLASH,
            flash_max_opacity: 0.9,
        }
    }

    // Individual property setters

    pub fn direction(mut self, direction: SlideDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn completion_fraction(mut self, fraction: f32) -> Self {
        self.completion_fraction = fraction;
        self
    }

    pub fn snap_duration(mut self, duration: Duration) -> Self {
        self.snap_duration = duration;
        self
    }

    pub fn flash_rise(mut self, duration: Duration) -> Self {
        self.flash_rise = duration;
        self
    }

    pub fn flash_fall(mut self, duration: Duration) -> Self {
        self.flash_fall = duration;
        self
    }

    pub fn rearm_delay(mut self, duration: Duration) -> Self {
        self.rearm_delay = duration;
        self
    }

    pub fn reset_duration(mut self, duration: Duration) -> Self {
        self.reset_duration = duration;
        self
    }

    pub fn track_ramp(mut self, ramp: ColorRamp) -> Self {
        self.track_ramp = ramp;
        self
    }

    pub fn indicator_ramp(mut self, ramp: ColorRamp) -> Self {
        self.indicator_ramp = ramp;
        self
    }

    pub fn flash_color(mut self, color: Rgb) -> Self {
        self.flash_color = color;
        self
    }

    pub fn flash_max_opacity(mut self, opacity: f32) -> Self {
        self.flash_max_opacity = opacity;
        self
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<(), SlideConfigError> {
        if !self.travel.is_finite() || self.travel <= 0.0 {
            return Err(SlideConfigError::InvalidTravel(self.travel));
        }
        if !self.completion_fraction.is_finite()
            || self.completion_fraction <= 0.0
            || self.completion_fraction > 1.0
        {
            return Err(SlideConfigError::InvalidCompletionFraction(
                self.completion_fraction,
            ));
        }
        if !self.flash_max_opacity.is_finite() || !(0.0..=1.0).contains(&self.flash_max_opacity) {
            return Err(SlideConfigError::InvalidFlashOpacity(self.flash_max_opacity));
        }
        Ok(())
    }
}
