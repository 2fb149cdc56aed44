//! # UI Error Types

use thiserror::Error;
use verdant_core::CoreError;

/// Errors that can occur while building or driving entities.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UiError {
    /// Entity extents must be finite and not negative.
    #[error("negative entity extent: {width}x{height}")]
    NegativeExtent {
        /// Requested width.
        width: f32,
        /// Requested height.
        height: f32,
    },

    /// A texture name was registered twice.
    #[error("texture already registered: {0}")]
    DuplicateTexture(String),

    /// Error from the core crate (configuration, screen metrics).
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for UI operations.
pub type UiResult<T> = Result<T, UiError>;
