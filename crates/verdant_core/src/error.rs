//! # Core Error Types
//!
//! All errors that can occur while configuring the screen or loading settings.

use thiserror::Error;

/// Errors that can occur in the core crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Zoom level must be strictly positive and finite.
    #[error("invalid zoom level: {0}")]
    InvalidZoom(f32),

    /// Tile units must be strictly positive and finite.
    #[error("invalid base tile units: {0}")]
    InvalidTileUnits(f32),

    /// Virtual screen dimensions must be strictly positive.
    #[error("invalid virtual screen size: {width}x{height}")]
    InvalidVirtualScreen {
        /// Configured width.
        width: f32,
        /// Configured height.
        height: f32,
    },

    /// Viewport dimensions must not be negative.
    #[error("invalid viewport size: {width}x{height}")]
    InvalidViewport {
        /// Reported width.
        width: f32,
        /// Reported height.
        height: f32,
    },

    /// Configuration file could not be read.
    #[error("failed to read configuration {path}: {reason}")]
    ConfigRead {
        /// Path that was read.
        path: String,
        /// Underlying I/O error message.
        reason: String,
    },

    /// Configuration text is not valid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
