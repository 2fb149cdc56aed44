//! Timing for transitions and looping animations.
//!
//! A [`FilterClock`] measures progress against a keyed timer in the shared
//! [`TimerRegistry`]. Reading progress never mutates the registry; looping
//! animations restart explicitly through [`FilterClock::restart_if_elapsed`].

use std::f32::consts::TAU;
use std::time::Duration;

use tracing::{debug, warn};
use verdant_core::{Color, TimerRegistry};

use crate::context::UiContext;
use crate::filter::Filter;

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation.
    #[default]
    Linear,
    /// Exponential ease-out (sharp snap to target).
    ExponentialOut,
    /// Exponential ease-in (accelerating).
    ExponentialIn,
    /// Exponential ease-in-out.
    ExponentialInOut,
    /// Jumps straight to the end.
    Instant,
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::ExponentialOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Self::ExponentialIn => {
                if t <= 0.0 {
                    0.0
                } else {
                    2.0_f32.powf(10.0 * (t - 1.0))
                }
            }
            Self::ExponentialInOut => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else if t < 0.5 {
                    2.0_f32.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2.0_f32.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Self::Instant => 1.0,
        }
    }
}

/// Progress of one keyed timer against a fixed interval.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterClock {
    /// Key into the timer table.
    key: String,
    /// Length of one cycle.
    interval: Duration,
}

impl FilterClock {
    /// Creates a clock. The timer is not started.
    #[must_use]
    pub fn new(key: impl Into<String>, interval: Duration) -> Self {
        let key = key.into();
        if interval.is_zero() {
            warn!(key = %key, "zero-length interval, progress will always read 1");
        }
        Self { key, interval }
    }

    /// Key into the timer table.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Rebinds the clock to another timer key.
    pub fn set_key(&mut self, key: &str) {
        key.clone_into(&mut self.key);
    }

    /// Length of one cycle.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Starts (or restarts) the timer at the current frame time.
    pub fn start(&self, timers: &TimerRegistry) {
        timers.start(&self.key);
    }

    /// Discards the timer; progress reads 0 until the next start.
    pub fn reset(&self, timers: &TimerRegistry) {
        timers.end(&self.key);
    }

    /// Elapsed time over interval, unclamped. 0 if the timer is not running.
    #[must_use]
    pub fn raw_progress(&self, timers: &TimerRegistry) -> f32 {
        let Some(elapsed) = timers.elapsed(&self.key) else {
            return 0.0;
        };
        if self.interval.is_zero() {
            return 1.0;
        }
        elapsed.as_secs_f32() / self.interval.as_secs_f32()
    }

    /// Progress clamped to `[0, 1]`.
    #[must_use]
    pub fn progress(&self, timers: &TimerRegistry) -> f32 {
        self.raw_progress(timers).clamp(0.0, 1.0)
    }

    /// Returns true once a running timer has covered the whole interval.
    #[must_use]
    pub fn is_finished(&self, timers: &TimerRegistry) -> bool {
        timers
            .elapsed(&self.key)
            .is_some_and(|elapsed| elapsed >= self.interval)
    }

    /// Restarts the timer if it has run past the interval.
    ///
    /// Returns true if a restart happened. Progress reads 0 from then on, so
    /// when this runs in the update tick the draw of the overrunning frame
    /// already shows the start of the new cycle. A frame that lands exactly
    /// on the interval reads 1 and does not restart.
    pub fn restart_if_elapsed(&self, timers: &TimerRegistry) -> bool {
        if self.raw_progress(timers) > 1.0 {
            timers.end(&self.key);
            timers.start(&self.key);
            debug!(key = %self.key, "animation cycle restarted");
            true
        } else {
            false
        }
    }
}

/// Looping opacity pulse.
///
/// Permanent filter: it starts its own timer on construction and restarts it
/// from the owning entity's update tick whenever a cycle completes.
#[derive(Debug, Clone)]
pub struct Pulse {
    clock: FilterClock,
    /// Opacity at the bottom of the pulse.
    min_opacity: f32,
}

impl Pulse {
    /// Creates a pulse with the given period and starts it.
    #[must_use]
    pub fn new(key: impl Into<String>, period: Duration, min_opacity: f32, timers: &TimerRegistry) -> Self {
        let clock = FilterClock::new(key, period);
        clock.start(timers);
        Self {
            clock,
            min_opacity: min_opacity.clamp(0.0, 1.0),
        }
    }

    /// Opacity at the given cycle progress: 1 at the ends, `min_opacity` halfway.
    #[must_use]
    pub fn opacity_at(&self, progress: f32) -> f32 {
        let wave = 0.5 + 0.5 * (TAU * progress).cos();
        self.min_opacity + (1.0 - self.min_opacity) * wave
    }
}

impl Filter for Pulse {
    fn name(&self) -> &str {
        "pulse"
    }

    fn key(&self) -> &str {
        self.clock.key()
    }

    fn apply_color(&self, ctx: &UiContext, color: Color) -> Color {
        color.fade(self.opacity_at(self.clock.progress(&ctx.timers)))
    }

    fn tick(&self, ctx: &UiContext) {
        self.clock.restart_if_elapsed(&ctx.timers);
    }
}
