//! Slide-to-confirm gesture control
//!
//! A headless drag-to-confirm control for pointer-driven UIs: the user drags
//! an indicator along a track, the track fills behind it, and the action is
//! confirmed only when the drag covers the full travel distance. Everything
//! here is driven by the host's event loop - feed pointer displacement into
//! [`SlideToConfirm::drag`], the release into [`SlideToConfirm::release`],
//! and clock ticks into [`SlideToConfirm::tick`]; read back
//! [`SlideToConfirm::visuals`] to draw. No timers or threads are involved,
//! so dropping the control discards anything still pending.

pub mod color;
pub mod config;
pub mod control;
pub mod easing;
pub mod tween;

pub use color::{ColorRamp, Rgb, blend_over};
pub use config::{SlideConfig, SlideConfigError, SlideDirection};
pub use control::{Phase, SlideOutcome, SlideToConfirm, SlideVisuals};
pub use easing::Easing;
pub use tween::Tween;
