//! Screen configuration.
//!
//! Loaded once at startup from TOML. Every field has a default, so an empty
//! document yields the stock 300x180 virtual screen.
//!
//! ```toml
//! virtual_width = 300.0
//! virtual_height = 180.0
//! base_tile_units = 4.0
//! tile_size = 30
//! zoom = 1.0
//! viewport_width = 1200.0
//! viewport_height = 800.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{CoreError, CoreResult};

/// Static description of the virtual screen and the initial host viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Logical width of the virtual screen, in design units.
    pub virtual_width: f32,
    /// Logical height of the virtual screen, in design units.
    pub virtual_height: f32,
    /// Pixels per design unit at zoom 1.
    pub base_tile_units: f32,
    /// Edge length of one tile on the texture sheets, in texels.
    pub tile_size: i32,
    /// Initial host zoom level.
    pub zoom: f32,
    /// Initial host viewport width, in pixels.
    pub viewport_width: f32,
    /// Initial host viewport height, in pixels.
    pub viewport_height: f32,
}

impl ScreenConfig {
    /// Default virtual screen width.
    pub const VIRTUAL_WIDTH: f32 = 300.0;
    /// Default virtual screen height.
    pub const VIRTUAL_HEIGHT: f32 = 180.0;
    /// Default pixels per design unit.
    pub const BASE_TILE_UNITS: f32 = 4.0;
    /// Default texture tile size.
    pub const TILE_SIZE: i32 = 30;

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] if the text is not valid TOML or
    /// does not describe a screen configuration.
    pub fn from_toml_str(text: &str) -> CoreResult<Self> {
        toml::from_str(text).map_err(|e| CoreError::InvalidConfig(e.to_string()))
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::ConfigRead`] if the file cannot be read, or
    /// [`CoreError::InvalidConfig`] if it cannot be parsed.
    pub fn from_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| CoreError::ConfigRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config = Self::from_toml_str(&text)?;
        info!(
            path = %path.display(),
            width = config.virtual_width,
            height = config.virtual_height,
            "loaded screen configuration"
        );
        Ok(config)
    }

    /// Serializes the configuration back to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] if serialization fails.
    pub fn to_toml_string(&self) -> CoreResult<String> {
        toml::to_string(self).map_err(|e| CoreError::InvalidConfig(e.to_string()))
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            virtual_width: Self::VIRTUAL_WIDTH,
            virtual_height: Self::VIRTUAL_HEIGHT,
            base_tile_units: Self::BASE_TILE_UNITS,
            tile_size: Self::TILE_SIZE,
            zoom: 1.0,
            viewport_width: 1200.0,
            viewport_height: 800.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = ScreenConfig::from_toml_str("").unwrap();
        assert_eq!(config, ScreenConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = ScreenConfig::from_toml_str("zoom = 0.5\nviewport_width = 1920.0").unwrap();

        assert_eq!(config.zoom, 0.5);
        assert_eq!(config.viewport_width, 1920.0);
        assert_eq!(config.virtual_width, ScreenConfig::VIRTUAL_WIDTH);
    }

    #[test]
    fn test_malformed_document() {
        let err = ScreenConfig::from_toml_str("zoom = \"high\"").unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfig(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ScreenConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, CoreError::ConfigRead { .. }));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ScreenConfig {
            zoom: 1.25,
            ..ScreenConfig::default()
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(ScreenConfig::from_toml_str(&text).unwrap(), config);
    }
}
