//! # VERDANT Core
//!
//! Leaf-level services for the Verdant UI engine:
//! - Geometry primitives and tint colors
//! - The coordinate helper mapping the fixed virtual screen onto the host
//!   viewport ([`ScreenMetrics`])
//! - Frame-stepped named timers for transitions ([`TimerRegistry`])
//! - Screen configuration loaded from TOML ([`ScreenConfig`])
//! - Split-screen state keyed by screen ([`PerScreen`])
//!
//! ## Example
//!
//! ```rust
//! use verdant_core::{ScreenConfig, ScreenMetrics, Vec2};
//!
//! let metrics = ScreenMetrics::from_config(&ScreenConfig::default()).unwrap();
//! let raw = metrics.to_raw(Vec2::new(150.0, 90.0));
//! assert_eq!(metrics.to_virtual(raw), Vec2::new(150.0, 90.0));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod per_screen;
pub mod screen;
pub mod timer;

pub use color::Color;
pub use config::ScreenConfig;
pub use error::{CoreError, CoreResult};
pub use geometry::{Rect, Size, SourceRect, Vec2};
pub use per_screen::{PerScreen, ScreenId};
pub use screen::ScreenMetrics;
pub use timer::TimerRegistry;
