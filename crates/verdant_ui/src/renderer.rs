//! Entity collection driven once per frame.

use tracing::debug;

use crate::context::UiContext;
use crate::drawer::{DrawOverrides, DrawSink, Drawer};
use crate::entity::{Entity, EntityId, TransitionState};
use crate::input::MouseButton;

/// Owns entities and runs update, draw and click dispatch over them.
#[derive(Debug, Default)]
pub struct Renderer {
    entities: Vec<Box<dyn Entity>>,
}

impl Renderer {
    /// Creates an empty renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(64),
        }
    }

    /// Takes ownership of an entity. Returns its id.
    pub fn add(&mut self, entity: Box<dyn Entity>) -> EntityId {
        let id = entity.core().id();
        self.entities.push(entity);
        id
    }

    /// Number of owned entities, dead ones included until removed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if no entity is owned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Looks up an entity by id.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&dyn Entity> {
        self.entities
            .iter()
            .find(|entity| entity.core().id() == id)
            .map(|entity| &**entity)
    }

    /// Looks up an entity by id for mutation.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut dyn Entity> {
        self.entities
            .iter_mut()
            .find(|entity| entity.core().id() == id)
            .map(|entity| -> &mut dyn Entity { &mut **entity })
    }

    /// Iterates over the entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Entity> {
        self.entities.iter().map(|entity| &**entity)
    }

    /// Updates every entity.
    pub fn update(&mut self, ctx: &UiContext) {
        for entity in &mut self.entities {
            entity.update(ctx);
        }
    }

    /// Draws every live entity in insertion order. Returns the draw count.
    pub fn draw(&self, ctx: &UiContext, sink: &mut dyn DrawSink) -> usize {
        let mut drawn = 0;
        for entity in &self.entities {
            if Drawer::new(&**entity).draw(ctx, sink, &DrawOverrides::NONE) {
                drawn += 1;
            }
        }
        drawn
    }

    /// Delivers a left click to the topmost hovered entity.
    ///
    /// Only entities that are present and hovered are candidates; among
    /// them the greatest layer depth wins, later insertion breaking ties.
    pub fn dispatch_click(&mut self, ctx: &UiContext) -> Option<EntityId> {
        if !ctx.input.clicked(MouseButton::Left) {
            return None;
        }

        let target = self
            .entities
            .iter_mut()
            .filter(|entity| {
                let core = entity.core();
                core.is_hovered() && core.transition_state() == TransitionState::Present
            })
            .max_by(|a, b| a.core().layer_depth().total_cmp(&b.core().layer_depth()))?;

        target.on_click(ctx);
        let id = target.core().id();
        debug!(id = %id, identifier = target.identifier(), "click dispatched");
        Some(id)
    }

    /// Drops dead entities. Returns how many were removed.
    pub fn remove_dead(&mut self) -> usize {
        let before = self.entities.len();
        self.entities
            .retain(|entity| entity.core().transition_state() != TransitionState::Dead);
        let removed = before - self.entities.len();
        if removed > 0 {
            debug!(removed, "dead entities removed");
        }
        removed
    }
}
