//! # Renderer Tests
//!
//! Per-frame update, draw, click dispatch and dead-entity cleanup over a
//! mixed set of entities.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use verdant_core::{ScreenConfig, Size, SourceRect, Vec2};
use verdant_ui::{
    DrawCommand, DrawList, Entity, EntityCore, EntityId, Fade, MouseButton, Origin, Pulse, Renderer, Tablet, TextureId,
    TransitionState, UiContext,
};

const FRAME: Duration = Duration::from_millis(16);

/// Square tile button that counts clicks.
#[derive(Debug)]
struct Tile {
    core: EntityCore,
    clicks: Rc<Cell<u32>>,
}

impl Tile {
    fn boxed(ctx: &UiContext, anchor: Vec2, layer_depth: f32) -> Box<Self> {
        Box::new(Self {
            core: EntityCore::new(Origin::TopLeft, anchor, layer_depth, None, None, &ctx.timers),
            clicks: Rc::default(),
        })
    }
}

impl Entity for Tile {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn identifier(&self) -> &str {
        "tile"
    }

    fn total_width(&self) -> f32 {
        30.0
    }

    fn total_height(&self) -> f32 {
        30.0
    }

    fn raw_source(&self) -> SourceRect {
        SourceRect::tile(1, 0, 30)
    }

    fn on_click(&mut self, _ctx: &UiContext) {
        self.clicks.set(self.clicks.get() + 1);
    }
}

fn context() -> UiContext {
    UiContext::from_config(&ScreenConfig::default()).unwrap()
}

/// Test: Draw skips dead entities and remove_dead drops them.
#[test]
fn test_draw_and_remove_dead() {
    let mut ctx = context();
    let mut renderer = Renderer::new();
    let kept = renderer.add(Tile::boxed(&ctx, Vec2::new(0.0, 0.0), 0.5));
    let doomed = renderer.add(Tile::boxed(&ctx, Vec2::new(60.0, 0.0), 0.5));
    assert_eq!(renderer.len(), 2);

    renderer
        .get_mut(doomed)
        .unwrap()
        .core_mut()
        .set_transition_state(TransitionState::Exiting, true, &ctx.timers);
    ctx.begin_frame(FRAME);
    renderer.update(&ctx);

    let mut list = DrawList::new();
    assert_eq!(renderer.draw(&ctx, &mut list), 1);
    assert_eq!(list.len(), 1);

    assert_eq!(renderer.remove_dead(), 1);
    assert_eq!(renderer.len(), 1);
    assert!(renderer.get(kept).is_some());
    assert!(renderer.get(doomed).is_none());
    assert_eq!(renderer.remove_dead(), 0);
}

/// Test: Entities moved through get_mut are seen by get and by hit-testing.
#[test]
fn test_get_mut_moves_entity() {
    let mut ctx = context();
    let mut renderer = Renderer::new();
    let tile = Tile::boxed(&ctx, Vec2::ZERO, 0.5);
    let clicks = Rc::clone(&tile.clicks);
    let id = renderer.add(tile);
    assert!(renderer.get_mut(EntityId(u64::MAX)).is_none());

    let entity: &mut dyn Entity = renderer.get_mut(id).unwrap();
    entity.core_mut().set_anchor(Vec2::new(90.0, 60.0));
    assert_eq!(renderer.get(id).unwrap().top_left(), Vec2::new(90.0, 60.0));

    ctx.input.set_cursor(ctx.screen.to_raw(Vec2::new(100.0, 70.0)));
    ctx.begin_frame(FRAME);
    renderer.update(&ctx);
    ctx.input.record_click(MouseButton::Left);
    assert_eq!(renderer.dispatch_click(&ctx), Some(id));
    assert_eq!(clicks.get(), 1);
}

/// Test: A click goes to the topmost hovered entity only.
#[test]
fn test_click_goes_to_topmost() {
    let mut ctx = context();
    let mut renderer = Renderer::new();
    let tiles = [
        Tile::boxed(&ctx, Vec2::new(0.0, 0.0), 0.3),
        Tile::boxed(&ctx, Vec2::new(10.0, 10.0), 0.7),
        Tile::boxed(&ctx, Vec2::new(200.0, 100.0), 0.9),
    ];
    let counters: Vec<_> = tiles.iter().map(|tile| Rc::clone(&tile.clicks)).collect();
    let ids: Vec<_> = tiles.into_iter().map(|tile| renderer.add(tile)).collect();

    // (20, 20) virtual lies inside both overlapping tiles.
    ctx.input.set_cursor(ctx.screen.to_raw(Vec2::new(20.0, 20.0)));
    ctx.begin_frame(FRAME);
    renderer.update(&ctx);
    assert_eq!(renderer.dispatch_click(&ctx), None, "no click this frame");

    ctx.input.record_click(MouseButton::Left);
    assert_eq!(renderer.dispatch_click(&ctx), Some(ids[1]));

    let counts: Vec<u32> = counters.iter().map(|counter| counter.get()).collect();
    assert_eq!(counts, [0, 1, 0]);
}

/// Test: Entities still entering cannot be clicked.
#[test]
fn test_click_ignores_entering() {
    let mut ctx = context();
    let mut renderer = Renderer::new();
    let core = EntityCore::new(
        Origin::CenterCenter,
        Vec2::new(150.0, 90.0),
        Tablet::LAYER_DEPTH,
        Some(Box::new(Fade::fade_in(Duration::from_millis(200)))),
        None,
        &ctx.timers,
    );
    renderer.add(Box::new(Tablet::new(core, Size::new(300.0, 180.0)).unwrap()));

    ctx.input.set_cursor(ctx.screen.viewport_center());
    ctx.begin_frame(FRAME);
    renderer.update(&ctx);
    ctx.input.record_click(MouseButton::Left);
    assert_eq!(renderer.dispatch_click(&ctx), None);
}

/// Test: Recorded draws sort back to front and flatten to instances.
#[test]
fn test_draw_list_ordering() {
    let mut ctx = context();
    let mut renderer = Renderer::new();
    let core = EntityCore::new(Origin::TopLeft, Vec2::ZERO, Tablet::LAYER_DEPTH, None, None, &ctx.timers);
    renderer.add(Tile::boxed(&ctx, Vec2::new(30.0, 30.0), 0.6));
    renderer.add(Box::new(Tablet::covering(core, &ctx.screen).unwrap()));

    ctx.begin_frame(FRAME);
    renderer.update(&ctx);
    let mut list = DrawList::new();
    renderer.draw(&ctx, &mut list);
    list.sort_by_depth();

    let sources: Vec<SourceRect> = list
        .commands()
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Sprite(call) => Some(call.source),
            DrawCommand::Fill(_) => None,
        })
        .collect();
    assert_eq!(sources, [verdant_ui::textures::tablet::SCREEN, SourceRect::tile(1, 0, 30)]);

    let instances = list.instances();
    assert_eq!(instances.len(), 2);
    assert!(instances.iter().all(|instance| instance.texture == TextureId::DEFAULT.raw()));
}

/// Test: A pulse keeps looping across renderer updates.
///
/// A 128 ms period over 16 ms frames bottoms out at frame 4, peaks at frame 8
/// and restarts in the update of frame 9, before that frame is drawn.
#[test]
fn test_pulse_loops_through_updates() {
    let mut ctx = context();
    let mut renderer = Renderer::new();
    let mut tile = Tile::boxed(&ctx, Vec2::ZERO, 0.5);
    let key = format!("{}-pulse", tile.core().timer_key());
    tile.core_mut()
        .add_filter(Box::new(Pulse::new(key.clone(), Duration::from_millis(128), 0.0, &ctx.timers)));
    renderer.add(tile);

    let mut list = DrawList::new();
    let mut alphas = Vec::new();
    for _ in 0..13 {
        ctx.begin_frame(FRAME);
        renderer.update(&ctx);
        let elapsed = ctx.timers.elapsed(&key).unwrap();
        assert!(elapsed <= Duration::from_millis(128), "pulse overran: {elapsed:?}");

        list.begin_frame();
        renderer.draw(&ctx, &mut list);
        match list.commands()[0] {
            DrawCommand::Sprite(call) => alphas.push(call.color.a),
            DrawCommand::Fill(_) => panic!("expected a sprite"),
        }
    }

    for (frame, expected) in [(4, 0.0), (8, 1.0), (9, 1.0), (13, 0.0)] {
        let alpha = alphas[frame - 1];
        assert!((alpha - expected).abs() < 1e-5, "frame {frame}: alpha {alpha}, expected {expected}");
    }
    assert!((alphas[1] - 0.5).abs() < 1e-5, "quarter period reads half opacity");
    assert_eq!(ctx.timers.elapsed(&key), Some(Duration::from_millis(64)));
}
