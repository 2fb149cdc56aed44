//! Named, frame-stepped timers.
//!
//! Transitions and looping animations measure their progress against a timer
//! looked up by key. The registry does not read the wall clock: the host
//! advances it once per frame with the frame delta, which keeps every
//! consumer in the same frame on the same timestamp.
//!
//! Keys are plain strings, normally the id of the entity that owns the
//! transition. Two owners sharing a key share a timer, so owners rekey before
//! starting.

use std::collections::HashMap;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::trace;

/// Start timestamps indexed by key.
#[derive(Debug, Default)]
struct TimerTable {
    /// Accumulated frame time.
    now: Duration,
    /// Timestamp at which each running timer was started.
    started: HashMap<String, Duration>,
}

/// Shared table of running timers.
///
/// Methods take `&self`; the table sits behind a lock so the registry can be
/// reached through the same shared context during both update and draw.
#[derive(Debug, Default)]
pub struct TimerRegistry {
    table: Mutex<TimerTable>,
}

impl TimerRegistry {
    /// Creates an empty registry at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the clock by one frame.
    pub fn advance(&self, dt: Duration) {
        let mut table = self.table.lock();
        table.now += dt;
    }

    /// Current accumulated time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.table.lock().now
    }

    /// Starts (or restarts) the timer for `key` at the current time.
    pub fn start(&self, key: &str) {
        let mut table = self.table.lock();
        let now = table.now;
        table.started.insert(key.to_owned(), now);
        trace!(key, "timer started");
    }

    /// Stops the timer for `key`. Returns true if it was running.
    pub fn end(&self, key: &str) -> bool {
        self.table.lock().started.remove(key).is_some()
    }

    /// Time elapsed since `key` was started, or `None` if it is not running.
    #[must_use]
    pub fn elapsed(&self, key: &str) -> Option<Duration> {
        let table = self.table.lock();
        table.started.get(key).map(|&start| table.now.saturating_sub(start))
    }

    /// Returns true if the timer for `key` is running.
    #[must_use]
    pub fn is_running(&self, key: &str) -> bool {
        self.table.lock().started.contains_key(key)
    }

    /// Number of running timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.lock().started.len()
    }

    /// Returns true if no timer is running.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
