//! The tablet backdrop every menu page is drawn onto.

use verdant_core::{ScreenMetrics, Size, SourceRect, Vec2};

use crate::entity::{Entity, EntityCore};
use crate::error::{UiError, UiResult};
use crate::textures::tablet;

/// Tablet screen entity.
#[derive(Debug)]
pub struct Tablet {
    core: EntityCore,
    size: Size,
}

impl Tablet {
    /// Layer depth of the backdrop.
    pub const LAYER_DEPTH: f32 = 0.1;

    /// Wraps prepared entity state with the given extents in virtual units.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::NegativeExtent`] if either extent is negative or
    /// not finite.
    pub fn new(core: EntityCore, size: Size) -> UiResult<Self> {
        let valid = |extent: f32| extent.is_finite() && extent >= 0.0;
        if !valid(size.width) || !valid(size.height) {
            return Err(UiError::NegativeExtent {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self { core, size })
    }

    /// Sizes the tablet to the whole virtual screen.
    ///
    /// The origin in `core` is kept; its anchor is moved so the tablet's
    /// top-left corner sits at the virtual origin.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::NegativeExtent`] for a degenerate virtual screen.
    pub fn covering(mut core: EntityCore, screen: &ScreenMetrics) -> UiResult<Self> {
        let size = screen.virtual_size();
        let (fx, fy) = core.origin().factors();
        core.set_anchor(Vec2::new(size.width * fx, size.height * fy));
        Self::new(core, size)
    }
}

impl Entity for Tablet {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn identifier(&self) -> &str {
        "tablet"
    }

    fn total_width(&self) -> f32 {
        self.size.width
    }

    fn total_height(&self) -> f32 {
        self.size.height
    }

    fn raw_source(&self) -> SourceRect {
        tablet::SCREEN
    }
}
