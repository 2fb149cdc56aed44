//! Debug geometry.
//!
//! Points, lines and circles drawn as solid quads over everything else.
//! Positions are virtual units unless `raw` is set, in which case they are
//! viewport pixels.

use std::f32::consts::TAU;

use verdant_core::{Color, Rect, ScreenMetrics, Vec2};

use crate::drawer::{DrawSink, Quad};

/// Layer depth of debug points.
pub const POINT_DEPTH: f32 = 0.9;
/// Layer depth of debug lines.
pub const LINE_DEPTH: f32 = 1.0;
/// Longest straight segment used to approximate a circle, in pixels.
const MAX_SEGMENT_LENGTH: f32 = 3.0;

fn to_raw(screen: &ScreenMetrics, point: Vec2, raw: bool) -> Vec2 {
    if raw {
        point
    } else {
        screen.to_raw(point)
    }
}

/// Draws a `size` x `size` pixel square centered on `point`.
///
/// Defaults to green-yellow.
pub fn debug_point(
    sink: &mut dyn DrawSink,
    screen: &ScreenMetrics,
    point: Vec2,
    color: Option<Color>,
    size: f32,
    raw: bool,
) {
    let point = to_raw(screen, point, raw);
    let half = size / 2.0;
    sink.fill(Quad {
        rect: Rect::new((point.x - half).round(), (point.y - half).round(), size, size),
        color: color.unwrap_or(Color::GREEN_YELLOW),
        rotation: 0.0,
        layer_depth: POINT_DEPTH,
    });
}

/// Draws a line of thickness `size` pixels from `from` to `to`.
///
/// Defaults to yellow.
pub fn debug_line(
    sink: &mut dyn DrawSink,
    screen: &ScreenMetrics,
    from: Vec2,
    to: Vec2,
    color: Option<Color>,
    size: f32,
    raw: bool,
) {
    let from = to_raw(screen, from, raw);
    let to = to_raw(screen, to, raw);
    let half = size / 2.0;
    sink.fill(Quad {
        rect: Rect::new(
            (from.x - half).round(),
            (from.y - half).round(),
            from.distance(to).round(),
            size,
        ),
        color: color.unwrap_or(Color::YELLOW),
        rotation: (to - from).angle(),
        layer_depth: LINE_DEPTH,
    });
}

/// Draws a circle outline as a closed polygon of short segments.
///
/// `radius` is in the same space as `center`. Returns the number of segments
/// drawn.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn debug_circle(
    sink: &mut dyn DrawSink,
    screen: &ScreenMetrics,
    center: Vec2,
    radius: f32,
    color: Option<Color>,
    size: f32,
    raw: bool,
) -> usize {
    let segments = ((radius * TAU / MAX_SEGMENT_LENGTH).floor() as usize).max(3);
    let step = TAU / segments as f32;

    let first = center + Vec2::new(radius, 0.0);
    let mut last = first;
    for i in 1..segments {
        let next = center + Vec2::from_angle(step * i as f32) * radius;
        debug_line(sink, screen, last, next, color, size, raw);
        last = next;
    }
    debug_line(sink, screen, last, first, color, size, raw);
    segments
}
