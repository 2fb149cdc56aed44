//! # Entity Lifecycle Tests
//!
//! Drives entities through the transition state machine frame by frame and
//! checks what the drawer resolves at each step.

use std::time::Duration;

use verdant_core::{Color, Rect, SourceRect, Vec2};
use verdant_ui::{
    Direction, DrawOverrides, Drawer, Entity, EntityCore, Fade, Filter, Grow, Origin, ScaleBy, Slide,
    Transition, TransitionState, Translate, UiContext, SCALE_EPSILON,
};

const FRAME: Duration = Duration::from_millis(16);

/// 40x20 test entity counting its hover callbacks.
#[derive(Debug)]
struct Button {
    core: EntityCore,
    hovers: u32,
}

impl Button {
    fn new(ctx: &UiContext, entering: Option<Box<dyn Transition>>, exiting: Option<Box<dyn Transition>>) -> Self {
        Self {
            core: EntityCore::new(Origin::CenterCenter, Vec2::new(150.0, 90.0), 0.5, entering, exiting, &ctx.timers),
            hovers: 0,
        }
    }
}

impl Entity for Button {
    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn identifier(&self) -> &str {
        "button"
    }

    fn total_width(&self) -> f32 {
        40.0
    }

    fn total_height(&self) -> f32 {
        20.0
    }

    fn raw_source(&self) -> SourceRect {
        SourceRect::new(0, 0, 40, 20)
    }

    fn on_hover(&mut self, _ctx: &UiContext) {
        self.hovers += 1;
    }
}

/// Doubles the destination, to make chain order observable.
#[derive(Debug)]
struct Double;

impl Filter for Double {
    fn name(&self) -> &str {
        "double"
    }

    fn apply_destination(&self, _ctx: &UiContext, destination: Vec2) -> Vec2 {
        destination * 2.0
    }
}

fn state(button: &Button) -> TransitionState {
    button.core().transition_state()
}

/// Test: Example layout from the reference screen.
#[test]
fn test_reference_layout() {
    let ctx = UiContext::default();
    let button = Button::new(&ctx, None, None);

    assert_eq!(ctx.screen.tile_scale(), 4.0);
    assert_eq!(ctx.screen.margin(), Vec2::new(0.0, 40.0));
    assert_eq!(button.top_left(), Vec2::new(130.0, 80.0));
    assert_eq!(button.raw_boundary(&ctx.screen), Rect::new(520.0, 360.0, 160.0, 80.0));
}

/// Test: Raw geometry follows a live zoom change.
#[test]
fn test_zoom_applies_live() {
    let mut ctx = UiContext::default();
    let button = Button::new(&ctx, None, None);

    ctx.screen.set_zoom(2.0).unwrap();
    assert_eq!(ctx.screen.tile_scale(), 2.0);
    assert_eq!(ctx.screen.margin(), Vec2::new(300.0, 220.0));
    assert_eq!(button.raw_boundary(&ctx.screen), Rect::new(560.0, 380.0, 80.0, 40.0));
}

/// Test: Without an entering transition an entity starts present.
#[test]
fn test_starts_present_without_transition() {
    let ctx = UiContext::default();
    let button = Button::new(&ctx, None, None);

    assert_eq!(state(&button), TransitionState::Present);
    assert!(ctx.timers.is_empty());
}

/// Test: Entering becomes present on the first update after the transition finishes.
#[test]
fn test_entering_then_present() {
    let mut ctx = UiContext::default();
    let mut button = Button::new(&ctx, Some(Box::new(Fade::fade_in(Duration::from_millis(100)))), None);
    assert_eq!(state(&button), TransitionState::Entering);

    ctx.begin_frame(Duration::from_millis(50));
    button.update(&ctx);
    assert_eq!(state(&button), TransitionState::Entering);
    let half = Drawer::new(&button).resolve(&ctx, &DrawOverrides::NONE);
    assert!((half.color.a - 0.5).abs() < 1e-5);

    ctx.begin_frame(Duration::from_millis(50));
    button.update(&ctx);
    assert_eq!(state(&button), TransitionState::Present);
    let full = Drawer::new(&button).resolve(&ctx, &DrawOverrides::NONE);
    assert_eq!(full.color, Color::WHITE);
}

/// Test: Exiting with no exit transition is dead after the next update.
#[test]
fn test_exit_without_transition_dies_next_update() {
    let mut ctx = UiContext::default();
    let mut button = Button::new(&ctx, None, None);

    button.core_mut().set_transition_state(TransitionState::Exiting, true, &ctx.timers);
    assert_eq!(state(&button), TransitionState::Exiting);
    assert!(Drawer::new(&button).should_draw());

    ctx.begin_frame(FRAME);
    button.update(&ctx);
    assert_eq!(state(&button), TransitionState::Dead);
    assert!(!Drawer::new(&button).should_draw());
}

/// Test: Entering with no entering transition stays entering.
#[test]
fn test_entering_without_transition_stays_entering() {
    let mut ctx = UiContext::default();
    let mut button = Button::new(&ctx, None, None);

    button.core_mut().set_transition_state(TransitionState::Entering, true, &ctx.timers);
    for _ in 0..3 {
        ctx.begin_frame(FRAME);
        button.update(&ctx);
        assert_eq!(state(&button), TransitionState::Entering);
    }
    assert!(!button.core().is_hovered());
}

/// Test: Exiting waits for the exit transition, then dies for good.
#[test]
fn test_exit_transition_runs_to_dead() {
    let mut ctx = UiContext::default();
    let mut button = Button::new(&ctx, None, Some(Box::new(Fade::fade_out(Duration::from_millis(100)))));

    button.core_mut().set_transition_state(TransitionState::Exiting, true, &ctx.timers);

    ctx.begin_frame(Duration::from_millis(99));
    button.update(&ctx);
    assert_eq!(state(&button), TransitionState::Exiting);

    ctx.begin_frame(Duration::from_millis(1));
    button.update(&ctx);
    assert_eq!(state(&button), TransitionState::Dead);

    for _ in 0..3 {
        ctx.begin_frame(FRAME);
        button.update(&ctx);
    }
    assert_eq!(state(&button), TransitionState::Dead);
}

/// Test: Re-entering restarts the entering transition from zero.
#[test]
fn test_restart_entering_transition() {
    let mut ctx = UiContext::default();
    let mut button = Button::new(&ctx, Some(Box::new(Fade::fade_in(Duration::from_millis(100)))), None);

    ctx.begin_frame(Duration::from_millis(200));
    button.update(&ctx);
    assert_eq!(state(&button), TransitionState::Present);

    button.core_mut().set_transition_state(TransitionState::Entering, true, &ctx.timers);
    let call = Drawer::new(&button).resolve(&ctx, &DrawOverrides::NONE);
    assert_eq!(call.color.a, 0.0);
}

/// Test: Transition first, then permanent filters in insertion order.
#[test]
fn test_filter_chain_order() {
    let ctx = UiContext::default();
    let slide = Slide::new(Direction::In, Vec2::new(0.0, 10.0), Duration::from_millis(100));
    let mut button = Button::new(&ctx, Some(Box::new(slide)), None);
    button.core_mut().add_filter(Box::new(Double));
    button.core_mut().add_filter(Box::new(Translate(Vec2::new(1.0, 0.0))));

    let call = Drawer::new(&button).resolve(&ctx, &DrawOverrides::NONE);
    assert_eq!(call.destination, Vec2::new(520.0 * 2.0 + 4.0, (360.0 + 40.0) * 2.0));
}

/// Test: A scale resolving to zero is drawn at epsilon.
#[test]
fn test_grow_from_zero_scale() {
    let ctx = UiContext::default();
    let mut button = Button::new(&ctx, Some(Box::new(Grow::new(Direction::In, Duration::from_millis(100)))), None);
    assert_eq!(Drawer::new(&button).resolve(&ctx, &DrawOverrides::NONE).scale, SCALE_EPSILON);

    button.core_mut().add_filter(Box::new(ScaleBy(0.5)));
    ctx.timers.advance(Duration::from_millis(100));
    assert_eq!(Drawer::new(&button).resolve(&ctx, &DrawOverrides::NONE).scale, 2.0);
}

/// Test: Hover fires once per entry and only while present.
#[test]
fn test_hover_edge_trigger() {
    let mut ctx = UiContext::default();
    let mut button = Button::new(&ctx, Some(Box::new(Fade::fade_in(Duration::from_millis(100)))), None);
    ctx.input.set_cursor(Vec2::new(600.0, 400.0));

    ctx.begin_frame(FRAME);
    button.update(&ctx);
    assert_eq!(button.hovers, 0, "entering entities ignore the cursor");

    ctx.begin_frame(Duration::from_millis(100));
    button.update(&ctx);
    assert_eq!(button.hovers, 1);
    assert!(button.core().is_hovered());

    ctx.begin_frame(FRAME);
    button.update(&ctx);
    assert_eq!(button.hovers, 1);

    ctx.input.set_cursor(Vec2::new(10.0, 10.0));
    ctx.begin_frame(FRAME);
    button.update(&ctx);
    assert!(!button.core().is_hovered());

    ctx.input.set_cursor(Vec2::new(521.0, 361.0));
    ctx.begin_frame(FRAME);
    button.update(&ctx);
    assert_eq!(button.hovers, 2);
}

/// Test: Leaving the present state clears hover.
#[test]
fn test_hover_cleared_on_exit() {
    let mut ctx = UiContext::default();
    let mut button = Button::new(&ctx, None, Some(Box::new(Fade::fade_out(Duration::from_millis(100)))));
    ctx.input.set_cursor(Vec2::new(600.0, 400.0));

    ctx.begin_frame(FRAME);
    button.update(&ctx);
    assert!(button.core().is_hovered());

    button.core_mut().set_transition_state(TransitionState::Exiting, true, &ctx.timers);
    ctx.begin_frame(FRAME);
    button.update(&ctx);
    assert!(!button.core().is_hovered());
    assert_eq!(button.hovers, 1);
}
