//! Recorded draw lists.
//!
//! [`DrawList`] is a [`DrawSink`] that keeps the frame's draws in memory,
//! orders them by layer depth and flattens them into GPU-ready
//! [`SpriteInstance`] records.

use crate::drawer::{DrawCall, DrawSink, Quad};
use crate::textures::TextureId;

/// One recorded draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Textured sprite.
    Sprite(DrawCall),
    /// Solid rectangle.
    Fill(Quad),
}

impl DrawCommand {
    /// Sort hint of the command.
    #[must_use]
    pub fn layer_depth(&self) -> f32 {
        match self {
            Self::Sprite(call) => call.layer_depth,
            Self::Fill(quad) => quad.layer_depth,
        }
    }
}

/// Draw commands collected over one frame.
#[derive(Debug, Clone)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(256),
        }
    }

    /// Begins a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    /// Recorded commands, in submission order until sorted.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if nothing was drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Orders commands back to front. Ties keep submission order.
    pub fn sort_by_depth(&mut self) {
        self.commands
            .sort_by(|a, b| a.layer_depth().total_cmp(&b.layer_depth()));
    }

    /// Flattens the commands into instance records, in current order.
    #[must_use]
    pub fn instances(&self) -> Vec<SpriteInstance> {
        self.commands.iter().map(SpriteInstance::from_command).collect()
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSink for DrawList {
    fn draw(&mut self, call: DrawCall) {
        self.commands.push(DrawCommand::Sprite(call));
    }

    fn fill(&mut self, quad: Quad) {
        self.commands.push(DrawCommand::Fill(quad));
    }
}

/// Per-instance sprite data for an instanced quad shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpriteInstance {
    /// Texture handle.
    pub texture: u32,
    /// Mirroring bits.
    pub flip: u32,
    /// Top-left corner, in viewport pixels.
    pub destination: [f32; 2],
    /// Texture region (x, y, width, height), in texels.
    pub source: [f32; 4],
    /// Tint (RGBA).
    pub color: [f32; 4],
    /// Rotation/scale origin, in texels.
    pub origin: [f32; 2],
    /// Scale per axis, in pixels per texel.
    pub scale: [f32; 2],
    /// Rotation in radians.
    pub rotation: f32,
    /// Layer depth.
    pub layer_depth: f32,
}

impl SpriteInstance {
    /// Flattens one command.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_command(command: &DrawCommand) -> Self {
        match command {
            DrawCommand::Sprite(call) => Self {
                texture: call.texture.raw(),
                flip: call.effects.bits(),
                destination: [call.destination.x, call.destination.y],
                source: [
                    call.source.x as f32,
                    call.source.y as f32,
                    call.source.width as f32,
                    call.source.height as f32,
                ],
                color: call.color.to_array(),
                origin: [call.origin.x, call.origin.y],
                scale: [call.scale, call.scale],
                rotation: call.rotation,
                layer_depth: call.layer_depth,
            },
            DrawCommand::Fill(quad) => Self {
                texture: TextureId::PIXEL.raw(),
                flip: 0,
                destination: [quad.rect.x, quad.rect.y],
                source: [0.0, 0.0, 1.0, 1.0],
                color: quad.color.to_array(),
                origin: [0.0, 0.0],
                scale: [quad.rect.width, quad.rect.height],
                rotation: quad.rotation,
                layer_depth: quad.layer_depth,
            },
        }
    }
}
