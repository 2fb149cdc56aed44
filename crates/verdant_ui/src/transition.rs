//! Timed entering and exiting filters.
//!
//! A [`Transition`] is a [`Filter`] with a clock. Entities hold up to two of
//! them, one per slot, and rekey them to their own id before starting so that
//! each entity drives its own timer.

use std::time::Duration;

use verdant_core::{Color, TimerRegistry, Vec2};

use crate::animation::{Easing, FilterClock};
use crate::context::UiContext;
use crate::filter::Filter;

/// Borrow any filter as a trait object.
pub trait AsFilter {
    /// Returns `self` as a `&dyn Filter`.
    fn as_filter(&self) -> &dyn Filter;
}

impl<T: Filter> AsFilter for T {
    fn as_filter(&self) -> &dyn Filter {
        self
    }
}

/// A filter with temporal progress and a finished status.
pub trait Transition: Filter + AsFilter {
    /// The timer binding.
    fn clock(&self) -> &FilterClock;

    /// Mutable timer binding.
    fn clock_mut(&mut self) -> &mut FilterClock;

    /// Rebinds this transition to another timer key.
    fn set_key(&mut self, key: &str) {
        self.clock_mut().set_key(key);
    }

    /// Discards any running timer.
    fn reset(&self, timers: &TimerRegistry) {
        self.clock().reset(timers);
    }

    /// Starts the timer at the current frame time.
    fn start(&self, timers: &TimerRegistry) {
        self.clock().start(timers);
    }

    /// Returns true once the full interval has elapsed.
    fn is_finished(&self, timers: &TimerRegistry) -> bool {
        self.clock().is_finished(timers)
    }

    /// Linear progress in `[0, 1]`.
    fn progress(&self, timers: &TimerRegistry) -> f32 {
        self.clock().progress(timers)
    }
}

/// Whether a transition brings an entity in or takes it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Effect weight goes from 0 to 1.
    #[default]
    In,
    /// Effect weight goes from 1 to 0.
    Out,
}

impl Direction {
    /// Weight of the visual effect at eased progress `t`.
    #[must_use]
    pub fn weight(self, t: f32) -> f32 {
        match self {
            Self::In => t,
            Self::Out => 1.0 - t,
        }
    }
}

/// Eased effect weight for a clock.
fn eased_weight(clock: &FilterClock, easing: Easing, direction: Direction, ctx: &UiContext) -> f32 {
    direction.weight(easing.apply(clock.progress(&ctx.timers)))
}

/// Fades the tint in or out.
#[derive(Debug, Clone)]
pub struct Fade {
    clock: FilterClock,
    direction: Direction,
    easing: Easing,
}

impl Fade {
    /// Creates a fade lasting `duration`.
    #[must_use]
    pub fn new(direction: Direction, duration: Duration) -> Self {
        Self {
            clock: FilterClock::new("fade", duration),
            direction,
            easing: Easing::Linear,
        }
    }

    /// Fade in.
    #[must_use]
    pub fn fade_in(duration: Duration) -> Self {
        Self::new(Direction::In, duration)
    }

    /// Fade out.
    #[must_use]
    pub fn fade_out(duration: Duration) -> Self {
        Self::new(Direction::Out, duration)
    }

    /// Sets the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

impl Filter for Fade {
    fn name(&self) -> &str {
        "fade"
    }

    fn key(&self) -> &str {
        self.clock.key()
    }

    fn apply_color(&self, ctx: &UiContext, color: Color) -> Color {
        color.fade(eased_weight(&self.clock, self.easing, self.direction, ctx))
    }
}

impl Transition for Fade {
    fn clock(&self) -> &FilterClock {
        &self.clock
    }

    fn clock_mut(&mut self) -> &mut FilterClock {
        &mut self.clock
    }
}

/// Slides the destination from (or towards) an offset in virtual units.
#[derive(Debug, Clone)]
pub struct Slide {
    clock: FilterClock,
    direction: Direction,
    easing: Easing,
    /// Displacement at zero weight, in virtual units.
    offset: Vec2,
}

impl Slide {
    /// Creates a slide lasting `duration`.
    #[must_use]
    pub fn new(direction: Direction, offset: Vec2, duration: Duration) -> Self {
        Self {
            clock: FilterClock::new("slide", duration),
            direction,
            easing: Easing::ExponentialOut,
            offset,
        }
    }

    /// Sets the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Current displacement, in viewport pixels.
    #[must_use]
    pub fn displacement(&self, ctx: &UiContext) -> Vec2 {
        let weight = eased_weight(&self.clock, self.easing, self.direction, ctx);
        self.offset * ctx.screen.tile_scale() * (1.0 - weight)
    }
}

impl Filter for Slide {
    fn name(&self) -> &str {
        "slide"
    }

    fn key(&self) -> &str {
        self.clock.key()
    }

    fn apply_destination(&self, ctx: &UiContext, destination: Vec2) -> Vec2 {
        destination + self.displacement(ctx)
    }
}

impl Transition for Slide {
    fn clock(&self) -> &FilterClock {
        &self.clock
    }

    fn clock_mut(&mut self) -> &mut FilterClock {
        &mut self.clock
    }
}

/// Grows the scale from zero, or shrinks it to zero.
#[derive(Debug, Clone)]
pub struct Grow {
    clock: FilterClock,
    direction: Direction,
    easing: Easing,
}

impl Grow {
    /// Creates a grow lasting `duration`.
    #[must_use]
    pub fn new(direction: Direction, duration: Duration) -> Self {
        Self {
            clock: FilterClock::new("grow", duration),
            direction,
            easing: Easing::ExponentialOut,
        }
    }

    /// Sets the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

impl Filter for Grow {
    fn name(&self) -> &str {
        "grow"
    }

    fn key(&self) -> &str {
        self.clock.key()
    }

    fn apply_scale(&self, ctx: &UiContext, scale: f32) -> f32 {
        scale * eased_weight(&self.clock, self.easing, self.direction, ctx)
    }
}

impl Transition for Grow {
    fn clock(&self) -> &FilterClock {
        &self.clock
    }

    fn clock_mut(&mut self) -> &mut FilterClock {
        &mut self.clock
    }
}
