//! Entities and their transition state machine.
//!
//! An entity is a rectangle on the virtual screen. It is positioned by an
//! anchor and an [`Origin`], carries permanent filters and up to two
//! transitions, and moves through [`TransitionState`]:
//!
//! ```text
//! Entering ──finished──▶ Present ──set_transition_state(Exiting)──▶ Exiting ──finished──▶ Dead
//! ```
//!
//! Concrete entities embed an [`EntityCore`] and implement [`Entity`], which
//! supplies everything else as provided methods.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;
use verdant_core::{Color, Rect, ScreenMetrics, SourceRect, TimerRegistry, Vec2};

use crate::context::UiContext;
use crate::filter::{Filter, Flip};
use crate::origin::Origin;
use crate::textures::TextureId;
use crate::transition::Transition;

static NEXT_ENTITY_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique entity identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl EntityId {
    /// Allocates the next id.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_ENTITY_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity-{}", self.0)
    }
}

/// Lifecycle stage of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionState {
    /// Entering transition running.
    Entering,
    /// Fully shown; the only state that accepts hover.
    Present,
    /// Exiting transition running.
    Exiting,
    /// Finished; no longer drawn. Terminal.
    Dead,
}

/// State shared by every entity.
#[derive(Debug)]
pub struct EntityCore {
    id: EntityId,
    /// Timer key for this entity's transitions.
    timer_key: String,
    /// Position in virtual units.
    anchor: Vec2,
    origin: Origin,
    layer_depth: f32,
    transition_state: TransitionState,
    entering: Option<Box<dyn Transition>>,
    exiting: Option<Box<dyn Transition>>,
    /// Permanent filters, applied after the active transition in insertion order.
    filters: Vec<Box<dyn Filter>>,
    hovered: bool,
}

impl EntityCore {
    /// Creates the shared state.
    ///
    /// With an entering transition the entity starts `Entering` and the
    /// transition is rekeyed to the entity id and started; otherwise it
    /// starts `Present`.
    #[must_use]
    pub fn new(
        origin: Origin,
        anchor: Vec2,
        layer_depth: f32,
        entering: Option<Box<dyn Transition>>,
        exiting: Option<Box<dyn Transition>>,
        timers: &TimerRegistry,
    ) -> Self {
        let id = EntityId::next();
        let mut core = Self {
            id,
            timer_key: id.to_string(),
            anchor,
            origin,
            layer_depth,
            transition_state: TransitionState::Present,
            entering,
            exiting,
            filters: Vec::new(),
            hovered: false,
        };

        if let Some(entering) = core.entering.as_mut() {
            entering.set_key(&core.timer_key);
            entering.start(timers);
            core.transition_state = TransitionState::Entering;
        }
        core
    }

    /// Entity id.
    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Timer key owned by this entity.
    #[must_use]
    pub fn timer_key(&self) -> &str {
        &self.timer_key
    }

    /// Anchor, in virtual units.
    #[must_use]
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Moves the anchor.
    pub fn set_anchor(&mut self, anchor: Vec2) {
        self.anchor = anchor;
    }

    /// Which point of the box the anchor designates.
    #[must_use]
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Layer depth hint.
    #[must_use]
    pub fn layer_depth(&self) -> f32 {
        self.layer_depth
    }

    /// Current lifecycle stage.
    #[must_use]
    pub fn transition_state(&self) -> TransitionState {
        self.transition_state
    }

    /// True while the cursor is over a present entity.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Entering transition, if any.
    #[must_use]
    pub fn entering_transition(&self) -> Option<&dyn Transition> {
        self.entering.as_deref()
    }

    /// Exiting transition, if any.
    #[must_use]
    pub fn exiting_transition(&self) -> Option<&dyn Transition> {
        self.exiting.as_deref()
    }

    /// Replaces the entering transition. A transition already running is
    /// dropped as is; the new one starts on the next `set_transition_state`.
    pub fn set_entering_transition(&mut self, transition: Option<Box<dyn Transition>>) {
        self.entering = transition;
    }

    /// Replaces the exiting transition.
    pub fn set_exiting_transition(&mut self, transition: Option<Box<dyn Transition>>) {
        self.exiting = transition;
    }

    /// Appends a permanent filter.
    pub fn add_filter(&mut self, filter: Box<dyn Filter>) {
        self.filters.push(filter);
    }

    /// Permanent filters in application order.
    #[must_use]
    pub fn filters(&self) -> &[Box<dyn Filter>] {
        &self.filters
    }

    /// Sets the lifecycle stage.
    ///
    /// With `start`, the transition for the target state (if any) is reset,
    /// rekeyed to this entity and started. Without it only the state changes.
    pub fn set_transition_state(&mut self, state: TransitionState, start: bool, timers: &TimerRegistry) {
        debug!(id = %self.id, from = ?self.transition_state, to = ?state, start, "transition state set");
        self.transition_state = state;
        if !start {
            return;
        }

        let slot = match state {
            TransitionState::Entering => self.entering.as_mut(),
            TransitionState::Exiting => self.exiting.as_mut(),
            TransitionState::Present | TransitionState::Dead => None,
        };
        if let Some(transition) = slot {
            transition.reset(timers);
            transition.set_key(&self.timer_key);
            transition.start(timers);
        }
    }

    /// Filters applying this frame: the running transition, then the
    /// permanent filters.
    #[must_use]
    pub fn active_filters(&self) -> impl Iterator<Item = &dyn Filter> + Clone + '_ {
        let transition = match self.transition_state {
            TransitionState::Exiting => self.exiting.as_deref(),
            TransitionState::Entering => self.entering.as_deref(),
            TransitionState::Present | TransitionState::Dead => None,
        };

        transition
            .map(|transition| transition.as_filter())
            .into_iter()
            .chain(self.filters.iter().map(|filter| -> &dyn Filter { filter.as_ref() }))
    }

    /// Advances the state machine.
    ///
    /// `Entering` becomes `Present` once an entering transition exists and
    /// has finished; without one the entity stays `Entering`. `Exiting`
    /// becomes `Dead` once the exiting transition finishes, and a missing
    /// exiting transition counts as finished.
    pub fn update_transition_state(&mut self, timers: &TimerRegistry) {
        let next = match self.transition_state {
            TransitionState::Entering
                if self.entering.as_ref().is_some_and(|transition| transition.is_finished(timers)) =>
            {
                TransitionState::Present
            }
            TransitionState::Exiting
                if self.exiting.as_ref().map_or(true, |transition| transition.is_finished(timers)) =>
            {
                TransitionState::Dead
            }
            _ => return,
        };
        debug!(id = %self.id, from = ?self.transition_state, to = ?next, "transition finished");
        self.transition_state = next;
    }

    /// Records whether the cursor is inside. Returns true on the rising edge.
    pub fn update_hover(&mut self, inside: bool) -> bool {
        let entered = inside && !self.hovered;
        self.hovered = inside;
        entered
    }
}

/// A drawable rectangle on the virtual screen.
///
/// Implementors provide the shared [`EntityCore`], their extents and their
/// texture region; geometry, raw draw attributes and the per-frame update
/// are provided.
pub trait Entity: fmt::Debug {
    /// Shared entity state.
    fn core(&self) -> &EntityCore;

    /// Mutable shared entity state.
    fn core_mut(&mut self) -> &mut EntityCore;

    /// Stable human-readable identifier, e.g. `"tablet"`.
    fn identifier(&self) -> &str;

    /// Width in virtual units. Never negative.
    fn total_width(&self) -> f32;

    /// Height in virtual units. Never negative.
    fn total_height(&self) -> f32;

    /// Region of the tileset to draw.
    fn raw_source(&self) -> SourceRect;

    /// Texture to draw from.
    fn tileset(&self) -> TextureId {
        TextureId::DEFAULT
    }

    /// Tint before filters.
    fn raw_color(&self) -> Color {
        Color::WHITE
    }

    /// Destination before filters: the top-left corner in viewport pixels.
    fn raw_destination(&self, ctx: &UiContext) -> Vec2 {
        ctx.screen.to_raw(self.top_left())
    }

    /// Rotation/scale origin before filters, in texels.
    fn raw_origin(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Rotation before filters, in radians.
    fn raw_rotation(&self) -> f32 {
        0.0
    }

    /// Scale before filters: one texel per virtual unit.
    fn raw_scale(&self, ctx: &UiContext) -> f32 {
        ctx.screen.tile_scale()
    }

    /// Mirroring before filters.
    fn raw_effects(&self) -> Flip {
        Flip::NONE
    }

    /// Layer depth before filters.
    fn raw_layer_depth(&self) -> f32 {
        self.core().layer_depth()
    }

    /// Top-left corner in virtual units.
    fn top_left(&self) -> Vec2 {
        let core = self.core();
        core.origin().top_left(core.anchor(), self.total_width(), self.total_height())
    }

    /// Center of the bounding box in virtual units.
    fn center(&self) -> Vec2 {
        let core = self.core();
        core.origin().center(core.anchor(), self.total_width(), self.total_height())
    }

    /// Bounding box in virtual units.
    fn boundary(&self) -> Rect {
        Rect::from_top_left(self.top_left(), self.total_width(), self.total_height())
    }

    /// Bounding box in viewport pixels.
    fn raw_boundary(&self, screen: &ScreenMetrics) -> Rect {
        screen.rect_to_raw(self.boundary())
    }

    /// Called once when the cursor starts hovering a present entity.
    fn on_hover(&mut self, _ctx: &UiContext) {}

    /// Called by the input collaborator when the entity is clicked.
    fn on_click(&mut self, _ctx: &UiContext) {}

    /// Per-frame update: state machine, filter ticks, then hover.
    fn update(&mut self, ctx: &UiContext) {
        self.core_mut().update_transition_state(&ctx.timers);

        for filter in self.core().active_filters() {
            filter.tick(ctx);
        }

        let inside = self.core().transition_state() == TransitionState::Present
            && self.raw_boundary(&ctx.screen).contains(ctx.input.cursor());
        if self.core_mut().update_hover(inside) {
            self.on_hover(ctx);
        }
    }
}
