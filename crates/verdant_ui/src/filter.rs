//! Draw-call filters.
//!
//! A [`Filter`] rewrites the attributes of a draw call. Each `apply_*`
//! method receives the value produced so far and returns the next one; the
//! default for every method is the identity, so a filter only overrides the
//! attributes it touches.
//!
//! The filters in this module are permanent: they hold no timing state and
//! apply to every draw. Timed filters live in [`crate::transition`] and
//! [`crate::animation`].

use std::fmt;

use verdant_core::{Color, SourceRect, Vec2};

use crate::context::UiContext;

/// Sprite mirroring flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Flip(u32);

impl Flip {
    /// No mirroring.
    pub const NONE: Self = Self(0);
    /// Mirror along the vertical axis.
    pub const HORIZONTAL: Self = Self(1 << 0);
    /// Mirror along the horizontal axis.
    pub const VERTICAL: Self = Self(1 << 1);

    /// Returns true if every flag in `other` is set.
    #[inline]
    #[must_use]
    pub const fn has(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Returns these flags with `other` toggled.
    #[inline]
    #[must_use]
    pub const fn toggled(self, other: Self) -> Self {
        Self(self.0 ^ other.0)
    }

    /// Returns these flags with `other` set.
    #[inline]
    #[must_use]
    pub const fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Raw bit value.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }
}

/// A transform over the attributes of one draw call.
pub trait Filter: fmt::Debug {
    /// Human-readable name, used in logs.
    fn name(&self) -> &str;

    /// Correlation key into the timer table. Empty for untimed filters.
    fn key(&self) -> &str {
        ""
    }

    /// Rewrites the tint.
    fn apply_color(&self, _ctx: &UiContext, color: Color) -> Color {
        color
    }

    /// Rewrites the destination, in viewport pixels.
    fn apply_destination(&self, _ctx: &UiContext, destination: Vec2) -> Vec2 {
        destination
    }

    /// Rewrites the source rectangle.
    fn apply_source(&self, _ctx: &UiContext, source: SourceRect) -> SourceRect {
        source
    }

    /// Rewrites the rotation/scale origin offset.
    fn apply_origin(&self, _ctx: &UiContext, origin: Vec2) -> Vec2 {
        origin
    }

    /// Rewrites the scale.
    fn apply_scale(&self, _ctx: &UiContext, scale: f32) -> f32 {
        scale
    }

    /// Rewrites the rotation, in radians.
    fn apply_rotation(&self, _ctx: &UiContext, rotation: f32) -> f32 {
        rotation
    }

    /// Rewrites the mirroring flags.
    fn apply_effects(&self, _ctx: &UiContext, effects: Flip) -> Flip {
        effects
    }

    /// Rewrites the layer depth.
    fn apply_layer_depth(&self, _ctx: &UiContext, layer_depth: f32) -> f32 {
        layer_depth
    }

    /// Called once per update tick of the owning entity.
    fn tick(&self, _ctx: &UiContext) {}
}

/// Multiplies the tint by a color.
#[derive(Debug, Clone, Copy)]
pub struct Tint(pub Color);

impl Filter for Tint {
    fn name(&self) -> &str {
        "tint"
    }

    fn apply_color(&self, _ctx: &UiContext, color: Color) -> Color {
        color.multiply(self.0)
    }
}

/// Fades the tint to a fixed opacity.
#[derive(Debug, Clone, Copy)]
pub struct Opacity(pub f32);

impl Filter for Opacity {
    fn name(&self) -> &str {
        "opacity"
    }

    fn apply_color(&self, _ctx: &UiContext, color: Color) -> Color {
        color.fade(self.0)
    }
}

/// Moves the destination by an offset given in virtual-screen units.
///
/// This is the one parent offset the engine supports, e.g. the position of
/// the menu tab a page is drawn into.
#[derive(Debug, Clone, Copy)]
pub struct Translate(pub Vec2);

impl Filter for Translate {
    fn name(&self) -> &str {
        "translate"
    }

    fn apply_destination(&self, ctx: &UiContext, destination: Vec2) -> Vec2 {
        destination + self.0 * ctx.screen.tile_scale()
    }
}

/// Multiplies the scale.
#[derive(Debug, Clone, Copy)]
pub struct ScaleBy(pub f32);

impl Filter for ScaleBy {
    fn name(&self) -> &str {
        "scale"
    }

    fn apply_scale(&self, _ctx: &UiContext, scale: f32) -> f32 {
        scale * self.0
    }
}

/// Adds a rotation, in radians.
#[derive(Debug, Clone, Copy)]
pub struct Rotate(pub f32);

impl Filter for Rotate {
    fn name(&self) -> &str {
        "rotate"
    }

    fn apply_rotation(&self, _ctx: &UiContext, rotation: f32) -> f32 {
        rotation + self.0
    }
}

/// Toggles mirroring flags.
#[derive(Debug, Clone, Copy)]
pub struct Mirror(pub Flip);

impl Filter for Mirror {
    fn name(&self) -> &str {
        "mirror"
    }

    fn apply_effects(&self, _ctx: &UiContext, effects: Flip) -> Flip {
        effects.toggled(self.0)
    }
}

/// Shifts the layer depth.
#[derive(Debug, Clone, Copy)]
pub struct DepthBias(pub f32);

impl Filter for DepthBias {
    fn name(&self) -> &str {
        "depth-bias"
    }

    fn apply_layer_depth(&self, _ctx: &UiContext, layer_depth: f32) -> f32 {
        layer_depth + self.0
    }
}

/// Moves the source rectangle across the texture sheet, in texels.
#[derive(Debug, Clone, Copy)]
pub struct SourceOffset {
    /// Horizontal texel offset.
    pub dx: i32,
    /// Vertical texel offset.
    pub dy: i32,
}

impl Filter for SourceOffset {
    fn name(&self) -> &str {
        "source-offset"
    }

    fn apply_source(&self, _ctx: &UiContext, source: SourceRect) -> SourceRect {
        source.offset(self.dx, self.dy)
    }
}
