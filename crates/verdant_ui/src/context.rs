//! Per-frame context handed to entities, filters and drawers.
//!
//! Everything an entity needs from its host (screen measurements, the timer
//! table, pointer input) is reached through one [`UiContext`] passed by
//! reference. Split-screen hosts keep one context per screen.

use std::time::Duration;

use verdant_core::{CoreResult, ScreenConfig, ScreenMetrics, TimerRegistry};

use crate::input::InputState;

/// Host services for one screen.
#[derive(Debug, Default)]
pub struct UiContext {
    /// Virtual screen to viewport conversion.
    pub screen: ScreenMetrics,
    /// Named timers driving transitions.
    pub timers: TimerRegistry,
    /// Pointer input for this frame.
    pub input: InputState,
}

impl UiContext {
    /// Creates a context for the given screen.
    #[must_use]
    pub fn new(screen: ScreenMetrics) -> Self {
        Self {
            screen,
            timers: TimerRegistry::new(),
            input: InputState::new(),
        }
    }

    /// Creates a context from a screen configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration describes an invalid screen.
    pub fn from_config(config: &ScreenConfig) -> CoreResult<Self> {
        Ok(Self::new(ScreenMetrics::from_config(config)?))
    }

    /// Starts a frame: clears last frame's input edges and advances timers.
    pub fn begin_frame(&mut self, dt: Duration) {
        self.input.begin_frame();
        self.timers.advance(dt);
    }
}
