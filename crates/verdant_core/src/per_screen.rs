//! State kept separately for each split-screen instance.
//!
//! Hosts that run several local screens at once give each one a
//! [`ScreenId`]. UI state that must not leak between screens lives in a
//! [`PerScreen`] map and is looked up with the id the caller passes in.

use std::collections::HashMap;

use parking_lot::RwLock;

/// Identifier of a local screen instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenId(pub u32);

impl ScreenId {
    /// The main screen.
    pub const MAIN: Self = Self(0);
}

/// One value per screen, created on first access.
#[derive(Debug)]
pub struct PerScreen<T> {
    values: RwLock<HashMap<ScreenId, T>>,
}

impl<T: Default> PerScreen<T> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::with_capacity(4)),
        }
    }

    /// Runs `f` with the value for `screen`, creating it if needed.
    pub fn with<R>(&self, screen: ScreenId, f: impl FnOnce(&mut T) -> R) -> R {
        let mut values = self.values.write();
        f(values.entry(screen).or_default())
    }

    /// Replaces the value for `screen`, returning the previous one.
    pub fn set(&self, screen: ScreenId, value: T) -> Option<T> {
        self.values.write().insert(screen, value)
    }

    /// Removes the value for `screen`, e.g. when that screen closes.
    pub fn remove(&self, screen: ScreenId) -> Option<T> {
        self.values.write().remove(&screen)
    }

    /// Returns true if `screen` has a value.
    #[must_use]
    pub fn contains(&self, screen: ScreenId) -> bool {
        self.values.read().contains_key(&screen)
    }

    /// Screens that currently hold a value.
    #[must_use]
    pub fn screens(&self) -> Vec<ScreenId> {
        self.values.read().keys().copied().collect()
    }
}

impl<T: Default + Clone> PerScreen<T> {
    /// Returns a copy of the value for `screen`, or the default if none exists.
    #[must_use]
    pub fn get(&self, screen: ScreenId) -> T {
        self.values.read().get(&screen).cloned().unwrap_or_default()
    }
}

impl<T: Default> Default for PerScreen<T> {
    fn default() -> Self {
        Self::new()
    }
}
