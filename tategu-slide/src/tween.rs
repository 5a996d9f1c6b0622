use std::time::{Duration, Instant};

use crate::easing::Easing;

/// A scalar value moving between two endpoints over a fixed timeline.
///
/// The tween is anchored to an `Instant` and evaluated on demand; nothing
/// advances in the background. Callers decide what "now" is, which keeps
/// every timeline deterministic under test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, started: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            started,
            duration,
            easing,
        }
    }

    /// The interpolated value at `now`.
    ///
    /// Before the start this is `from`; after the timeline has elapsed it is
    /// exactly `to`. Zero-duration tweens land immediately.
    pub fn value_at(&self, now: Instant) -> f32 {
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            let elapsed = now.duration_since(self.started);
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        let eased = self.easing.apply(progress);
        self.from + (self.to - self.from) * eased
    }

    /// True once the timeline has fully elapsed at `now`.
    pub fn is_finished(&self, now: Instant) -> bool {
        now.duration_since(self.started) >= self.duration
    }

    /// The instant the timeline lands on its target.
    pub fn ends_at(&self) -> Instant {
        self.started + self.duration
    }

    /// The value the tween is heading towards.
    pub fn target(&self) -> f32 {
        self.to
    }
}
