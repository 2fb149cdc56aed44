//! Benchmark for draw resolution through filter chains.
//!
//! Run with: cargo bench --package verdant_ui --bench drawer_benchmark

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use verdant_core::{Color, SourceRect, Vec2};
use verdant_ui::{
    Direction, DrawList, DrawOverrides, Drawer, Entity, EntityCore, Fade, Flip, Mirror, Origin, Renderer, Slide,
    Tint, Translate, UiContext,
};

#[derive(Debug)]
struct Sprite {
    core: EntityCore,
}

impl Entity for Sprite {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn identifier(&self) -> &str {
        "sprite"
    }

    fn total_width(&self) -> f32 {
        30.0
    }

    fn total_height(&self) -> f32 {
        30.0
    }

    fn raw_source(&self) -> SourceRect {
        SourceRect::tile(0, 0, 30)
    }
}

fn create_sprite(ctx: &UiContext, i: u16) -> Sprite {
    let slide = Slide::new(Direction::In, Vec2::new(0.0, 20.0), Duration::from_millis(300));
    let mut core = EntityCore::new(
        Origin::CenterCenter,
        Vec2::new(f32::from(i % 10) * 30.0, f32::from(i / 10) * 30.0),
        0.5,
        Some(Box::new(slide)),
        Some(Box::new(Fade::fade_out(Duration::from_millis(300)))),
        &ctx.timers,
    );

    // Typical page element: tab offset, tint, mirror
    core.add_filter(Box::new(Translate(Vec2::new(12.0, 0.0))));
    core.add_filter(Box::new(Tint(Color::hex(0xE0F0_C0FF))));
    core.add_filter(Box::new(Mirror(Flip::HORIZONTAL)));
    Sprite { core }
}

fn benchmark_resolve(c: &mut Criterion) {
    let ctx = UiContext::default();
    let sprite = create_sprite(&ctx, 0);
    ctx.timers.advance(Duration::from_millis(150));

    c.bench_function("resolve_entering_four_filters", |b| {
        b.iter(|| black_box(Drawer::new(&sprite).resolve(&ctx, &DrawOverrides::NONE)));
    });
}

fn benchmark_frame(c: &mut Criterion) {
    let mut ctx = UiContext::default();
    let mut renderer = Renderer::new();
    for i in 0..60 {
        renderer.add(Box::new(create_sprite(&ctx, i)));
    }
    let mut list = DrawList::new();

    c.bench_function("frame_60_entities", |b| {
        b.iter(|| {
            ctx.begin_frame(Duration::from_millis(16));
            renderer.update(&ctx);
            list.begin_frame();
            renderer.draw(&ctx, &mut list);
            list.sort_by_depth();
            black_box(list.instances())
        });
    });
}

criterion_group!(benches, benchmark_resolve, benchmark_frame);
criterion_main!(benches);
