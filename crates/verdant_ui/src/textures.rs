//! Texture handles and sheet layout.
//!
//! The engine never touches pixel data. Entities name a texture by
//! [`TextureId`] and the host maps ids to GPU textures; the
//! [`TextureRegistry`] records which asset name each id was registered for.

use std::collections::HashMap;

use tracing::info;
use verdant_core::SourceRect;

use crate::error::{UiError, UiResult};

/// Edge length of one sheet tile, in texels.
pub const TILE_SIZE: i32 = 30;

/// Opaque handle to a host texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureId(pub u32);

impl TextureId {
    /// Main sprite sheet.
    pub const DEFAULT: Self = Self(0);
    /// Font sheet.
    pub const FONT: Self = Self(1);
    /// 1x1 white pixel used for debug primitives.
    pub const PIXEL: Self = Self(2);

    /// Returns the raw id.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Maps asset names to texture handles.
#[derive(Debug, Clone)]
pub struct TextureRegistry {
    by_name: HashMap<String, TextureId>,
    next_id: u32,
}

impl TextureRegistry {
    /// Creates a registry holding the built-in handles.
    #[must_use]
    pub fn new() -> Self {
        let mut by_name = HashMap::with_capacity(8);
        by_name.insert("default".to_owned(), TextureId::DEFAULT);
        by_name.insert("font".to_owned(), TextureId::FONT);
        by_name.insert("pixel".to_owned(), TextureId::PIXEL);
        Self {
            by_name,
            next_id: TextureId::PIXEL.0 + 1,
        }
    }

    /// Registers an asset name and hands out a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::DuplicateTexture`] if the name is already taken.
    pub fn register(&mut self, name: &str) -> UiResult<TextureId> {
        if self.by_name.contains_key(name) {
            return Err(UiError::DuplicateTexture(name.to_owned()));
        }
        let id = TextureId(self.next_id);
        self.next_id += 1;
        self.by_name.insert(name.to_owned(), id);
        info!(name, id = id.0, "texture registered");
        Ok(id)
    }

    /// Looks up the id registered for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<TextureId> {
        self.by_name.get(name).copied()
    }

    /// Number of registered textures, built-ins included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Always false; the built-ins are registered on construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Source rectangles of the tablet on the main sheet.
pub mod tablet {
    use super::{SourceRect, TILE_SIZE};

    /// Tablet screen background, 10x6 tiles at the sheet origin.
    pub const SCREEN: SourceRect = SourceRect::new(0, 0, 10 * TILE_SIZE, 6 * TILE_SIZE);
}
