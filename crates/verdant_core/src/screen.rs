//! Virtual screen to viewport conversion.
//!
//! Entities are laid out on a fixed-size virtual ("adjusted") screen. The
//! host renders into a viewport of arbitrary pixel size. The virtual screen is
//! scaled by the tile scale and letterboxed in the middle of the viewport:
//!
//! ```text
//! ┌──────────────── viewport ────────────────┐
//! │        margin.y                          │
//! │  ┌──────── adjusted screen ─────────┐    │
//! │m │  virtual × tile_scale pixels     │    │
//! │  └──────────────────────────────────┘    │
//! └──────────────────────────────────────────┘
//! ```
//!
//! Nothing derived is cached. Hosts push zoom and viewport changes through
//! [`ScreenMetrics::set_zoom`] and [`ScreenMetrics::set_viewport`] and every
//! query recomputes from the current values, so live resizes apply on the
//! very next call.

use crate::config::ScreenConfig;
use crate::error::{CoreError, CoreResult};
use crate::geometry::{Rect, Size, Vec2};

/// Live screen measurements used by every coordinate conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenMetrics {
    /// Logical size of the virtual screen.
    virtual_size: Size,
    /// Pixels per design unit at zoom 1.
    base_tile_units: f32,
    /// Edge length of one texture tile, in texels.
    tile_size: i32,
    /// Host zoom level.
    zoom: f32,
    /// Host viewport size in pixels.
    viewport: Size,
}

impl ScreenMetrics {
    /// Builds metrics from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the zoom, tile units, virtual screen or viewport
    /// are out of range.
    pub fn from_config(config: &ScreenConfig) -> CoreResult<Self> {
        let virtual_size = Size::new(config.virtual_width, config.virtual_height);
        if !(is_positive(virtual_size.width) && is_positive(virtual_size.height)) {
            return Err(CoreError::InvalidVirtualScreen {
                width: virtual_size.width,
                height: virtual_size.height,
            });
        }
        if !is_positive(config.base_tile_units) {
            return Err(CoreError::InvalidTileUnits(config.base_tile_units));
        }

        let mut metrics = Self {
            virtual_size,
            base_tile_units: config.base_tile_units,
            tile_size: config.tile_size,
            zoom: 1.0,
            viewport: Size::default(),
        };
        metrics.set_zoom(config.zoom)?;
        metrics.set_viewport(config.viewport_width, config.viewport_height)?;
        Ok(metrics)
    }

    /// Updates the host zoom level.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidZoom`] for zero, negative or non-finite zoom.
    pub fn set_zoom(&mut self, zoom: f32) -> CoreResult<()> {
        if !is_positive(zoom) {
            return Err(CoreError::InvalidZoom(zoom));
        }
        self.zoom = zoom;
        Ok(())
    }

    /// Updates the host viewport size, e.g. after a window resize.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidViewport`] for negative or non-finite sizes.
    pub fn set_viewport(&mut self, width: f32, height: f32) -> CoreResult<()> {
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            return Err(CoreError::InvalidViewport { width, height });
        }
        self.viewport = Size::new(width, height);
        Ok(())
    }

    /// Current host zoom level.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Logical size of the virtual screen.
    #[must_use]
    pub fn virtual_size(&self) -> Size {
        self.virtual_size
    }

    /// Host viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Edge length of one texture tile, in texels.
    #[must_use]
    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    /// Compensation for the host zoom level.
    #[must_use]
    pub fn pixel_zoom_adjustment(&self) -> f32 {
        1.0 / self.zoom
    }

    /// Pixels per design unit after zoom compensation.
    #[must_use]
    pub fn tile_scale(&self) -> f32 {
        self.base_tile_units * self.pixel_zoom_adjustment()
    }

    /// Pixel size of the virtual screen.
    #[must_use]
    pub fn adjusted_size(&self) -> Size {
        let scale = self.tile_scale();
        Size::new(self.virtual_size.width * scale, self.virtual_size.height * scale)
    }

    /// Viewport size minus adjusted screen size, per axis.
    ///
    /// Negative when the adjusted screen overflows the viewport.
    #[must_use]
    pub fn difference(&self) -> Size {
        let adjusted = self.adjusted_size();
        Size::new(self.viewport.width - adjusted.width, self.viewport.height - adjusted.height)
    }

    /// Space between the viewport edge and the adjusted screen, per axis.
    #[must_use]
    pub fn margin(&self) -> Vec2 {
        self.difference().to_vec2() / 2.0
    }

    /// Top-left corner of the adjusted screen, in viewport pixels.
    #[must_use]
    pub fn north_west(&self) -> Vec2 {
        self.margin()
    }

    /// Top-right corner of the adjusted screen, in viewport pixels.
    #[must_use]
    pub fn north_east(&self) -> Vec2 {
        let margin = self.margin();
        Vec2::new(self.viewport.width - margin.x, margin.y)
    }

    /// Bottom-left corner of the adjusted screen, in viewport pixels.
    #[must_use]
    pub fn south_west(&self) -> Vec2 {
        let margin = self.margin();
        Vec2::new(margin.x, self.viewport.height - margin.y)
    }

    /// Bottom-right corner of the adjusted screen, in viewport pixels.
    #[must_use]
    pub fn south_east(&self) -> Vec2 {
        let margin = self.margin();
        Vec2::new(self.viewport.width - margin.x, self.viewport.height - margin.y)
    }

    /// Center of the adjusted screen, in viewport pixels.
    #[must_use]
    pub fn adjusted_center(&self) -> Vec2 {
        self.north_west() + self.adjusted_size().to_vec2() / 2.0
    }

    /// Center of the viewport.
    #[must_use]
    pub fn viewport_center(&self) -> Vec2 {
        self.viewport.to_vec2() / 2.0
    }

    /// Converts a virtual-screen point to viewport pixels.
    #[must_use]
    pub fn to_raw(&self, point: Vec2) -> Vec2 {
        point * self.tile_scale() + self.north_west()
    }

    /// Converts a viewport pixel to virtual-screen units.
    #[must_use]
    pub fn to_virtual(&self, point: Vec2) -> Vec2 {
        (point - self.north_west()) / self.tile_scale()
    }

    /// Converts a virtual-screen rectangle to viewport pixels.
    #[must_use]
    pub fn rect_to_raw(&self, rect: Rect) -> Rect {
        let scale = self.tile_scale();
        Rect::from_top_left(self.to_raw(rect.top_left()), rect.width * scale, rect.height * scale)
    }
}

impl Default for ScreenMetrics {
    fn default() -> Self {
        let config = ScreenConfig::default();
        Self {
            virtual_size: Size::new(config.virtual_width, config.virtual_height),
            base_tile_units: config.base_tile_units,
            tile_size: config.tile_size,
            zoom: config.zoom,
            viewport: Size::new(config.viewport_width, config.viewport_height),
        }
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
