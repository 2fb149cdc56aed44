//! Filter-chain draw resolution.
//!
//! A [`Drawer`] borrows one entity for the duration of a draw. For each of
//! the eight filterable attributes it starts from the per-call override or
//! the entity's raw value and folds the active filter list over it, then
//! hands a single [`DrawCall`] to the host's [`DrawSink`].

use verdant_core::{Color, Rect, SourceRect, Vec2};

use crate::context::UiContext;
use crate::entity::{Entity, TransitionState};
use crate::filter::{Filter, Flip};
use crate::textures::TextureId;

/// Scale substituted when the filter chain resolves to exactly zero.
pub const SCALE_EPSILON: f32 = 0.001;

/// One fully resolved sprite draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    /// Texture to sample.
    pub texture: TextureId,
    /// Top-left corner, in viewport pixels.
    pub destination: Vec2,
    /// Texture region, in texels.
    pub source: SourceRect,
    /// Tint.
    pub color: Color,
    /// Rotation in radians, about `origin`.
    pub rotation: f32,
    /// Rotation/scale origin, in texels relative to the source.
    pub origin: Vec2,
    /// Uniform scale, in viewport pixels per texel.
    pub scale: f32,
    /// Mirroring.
    pub effects: Flip,
    /// Sort hint; larger draws on top.
    pub layer_depth: f32,
}

/// A solid rectangle in viewport pixels, used for debug geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// Bounds before rotation; rotation is about the top-left corner.
    pub rect: Rect,
    /// Fill color.
    pub color: Color,
    /// Rotation in radians.
    pub rotation: f32,
    /// Sort hint; larger draws on top.
    pub layer_depth: f32,
}

/// Receives resolved draws. Implemented by the host's sprite batch.
pub trait DrawSink {
    /// Draws one sprite.
    fn draw(&mut self, call: DrawCall);

    /// Fills one rectangle with the pixel texture.
    fn fill(&mut self, quad: Quad);
}

/// Per-call attribute overrides. `None` means use the entity's raw value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DrawOverrides {
    /// Destination, in viewport pixels.
    pub destination: Option<Vec2>,
    /// Texture region.
    pub source: Option<SourceRect>,
    /// Tint.
    pub color: Option<Color>,
    /// Rotation in radians.
    pub rotation: Option<f32>,
    /// Rotation/scale origin.
    pub origin: Option<Vec2>,
    /// Scale in virtual units per texel; multiplied by the tile scale.
    pub scale: Option<f32>,
    /// Mirroring.
    pub effects: Option<Flip>,
    /// Layer depth.
    pub layer_depth: Option<f32>,
}

impl DrawOverrides {
    /// No overrides.
    pub const NONE: Self = Self {
        destination: None,
        source: None,
        color: None,
        rotation: None,
        origin: None,
        scale: None,
        effects: None,
        layer_depth: None,
    };
}

/// Resolves draw calls for one entity.
#[derive(Debug, Clone, Copy)]
pub struct Drawer<'a, E: Entity + ?Sized> {
    entity: &'a E,
}

impl<'a, E: Entity + ?Sized> Drawer<'a, E> {
    /// Binds a drawer to an entity.
    #[must_use]
    pub fn new(entity: &'a E) -> Self {
        Self { entity }
    }

    /// The bound entity.
    #[must_use]
    pub fn entity(&self) -> &'a E {
        self.entity
    }

    /// False once the entity is dead.
    #[must_use]
    pub fn should_draw(&self) -> bool {
        self.entity.core().transition_state() != TransitionState::Dead
    }

    /// Resolves every attribute through the active filter chain.
    #[must_use]
    pub fn resolve(&self, ctx: &UiContext, overrides: &DrawOverrides) -> DrawCall {
        let entity = self.entity;
        let chain = entity.core().active_filters();

        let color = fold(chain.clone(), overrides.color.unwrap_or_else(|| entity.raw_color()), |f, v| {
            f.apply_color(ctx, v)
        });
        let destination = fold(
            chain.clone(),
            overrides.destination.unwrap_or_else(|| entity.raw_destination(ctx)),
            |f, v| f.apply_destination(ctx, v),
        );
        let source = fold(chain.clone(), overrides.source.unwrap_or_else(|| entity.raw_source()), |f, v| {
            f.apply_source(ctx, v)
        });
        let origin = fold(chain.clone(), overrides.origin.unwrap_or_else(|| entity.raw_origin()), |f, v| {
            f.apply_origin(ctx, v)
        });
        let rotation = fold(chain.clone(), overrides.rotation.unwrap_or_else(|| entity.raw_rotation()), |f, v| {
            f.apply_rotation(ctx, v)
        });
        let effects = fold(chain.clone(), overrides.effects.unwrap_or_else(|| entity.raw_effects()), |f, v| {
            f.apply_effects(ctx, v)
        });
        let layer_depth = fold(
            chain.clone(),
            overrides.layer_depth.unwrap_or_else(|| entity.raw_layer_depth()),
            |f, v| f.apply_layer_depth(ctx, v),
        );

        let raw_scale = overrides
            .scale
            .map_or_else(|| entity.raw_scale(ctx), |scale| scale * ctx.screen.tile_scale());
        let mut scale = fold(chain, raw_scale, |f, v| f.apply_scale(ctx, v));
        if scale == 0.0 {
            scale = SCALE_EPSILON;
        }

        DrawCall {
            texture: entity.tileset(),
            destination,
            source,
            color,
            rotation,
            origin,
            scale,
            effects,
            layer_depth,
        }
    }

    /// Resolves and issues one draw. Returns false, drawing nothing, once the
    /// entity is dead.
    pub fn draw(&self, ctx: &UiContext, sink: &mut dyn DrawSink, overrides: &DrawOverrides) -> bool {
        if !self.should_draw() {
            return false;
        }
        sink.draw(self.resolve(ctx, overrides));
        true
    }
}

/// Folds `chain` over `initial` in order.
#[inline]
fn fold<'f, T>(
    chain: impl Iterator<Item = &'f dyn Filter>,
    initial: T,
    apply: impl Fn(&dyn Filter, T) -> T,
) -> T {
    chain.fold(initial, |value, filter| apply(filter, value))
}
