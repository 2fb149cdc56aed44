//! # VERDANT UI
//!
//! Entities on a fixed virtual screen, animated in and out by keyed
//! transitions and drawn through filter chains:
//! - [`Entity`] / [`EntityCore`]: anchor and origin positioning, the
//!   Entering → Present → Exiting → Dead state machine, hover detection
//! - [`Filter`] and [`Transition`]: per-attribute rewrites of a draw call
//! - [`Drawer`]: folds the active filters over raw attributes into one
//!   [`DrawCall`] for a host [`DrawSink`]
//! - [`Renderer`]: per-frame update, draw, click dispatch and cleanup
//!
//! Every call that needs screen measurements, timers or input takes a
//! [`UiContext`]; there is no global state.
//!
//! ## Frame loop
//!
//! ```rust
//! use std::time::Duration;
//! use verdant_core::{Size, Vec2};
//! use verdant_ui::{DrawList, EntityCore, Fade, Origin, Renderer, Tablet, UiContext};
//!
//! let mut ctx = UiContext::default();
//! let core = EntityCore::new(
//!     Origin::CenterCenter,
//!     Vec2::new(150.0, 90.0),
//!     Tablet::LAYER_DEPTH,
//!     Some(Box::new(Fade::fade_in(Duration::from_millis(200)))),
//!     None,
//!     &ctx.timers,
//! );
//! let mut renderer = Renderer::new();
//! renderer.add(Box::new(Tablet::new(core, Size::new(300.0, 180.0)).unwrap()));
//!
//! let mut list = DrawList::new();
//! ctx.begin_frame(Duration::from_millis(16));
//! renderer.update(&ctx);
//! renderer.draw(&ctx, &mut list);
//! assert_eq!(list.len(), 1);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod batch;
pub mod context;
pub mod debug;
pub mod drawer;
pub mod entity;
pub mod error;
pub mod filter;
pub mod input;
pub mod origin;
pub mod renderer;
pub mod tablet;
pub mod textures;
pub mod transition;

pub use animation::{Easing, FilterClock, Pulse};
pub use batch::{DrawCommand, DrawList, SpriteInstance};
pub use context::UiContext;
pub use debug::{debug_circle, debug_line, debug_point};
pub use drawer::{DrawCall, DrawOverrides, DrawSink, Drawer, Quad, SCALE_EPSILON};
pub use entity::{Entity, EntityCore, EntityId, TransitionState};
pub use error::{UiError, UiResult};
pub use filter::{DepthBias, Filter, Flip, Mirror, Opacity, Rotate, ScaleBy, SourceOffset, Tint, Translate};
pub use input::{InputState, MouseButton};
pub use origin::Origin;
pub use renderer::Renderer;
pub use tablet::Tablet;
pub use textures::{TextureId, TextureRegistry, TILE_SIZE};
pub use transition::{AsFilter, Direction, Fade, Grow, Slide, Transition};
