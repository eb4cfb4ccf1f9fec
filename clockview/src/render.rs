//! Renderer - paints a [`ClockGeometry`] onto an abstract drawing surface
//!
//! The draw order is fixed: border, shadow, background disc, decorative
//! circles, labels, then the hour, minute and second hands. Every stage but
//! the background is skipped when its visibility flag is off. Hands missing
//! from the geometry are skipped too.

use crate::geometry::{ClockGeometry, Hand, Point, Rect};
use crate::style::{Color, Paints, ShadowPaint, StrokePaint, StyleConfig, TextPaint};

/// Ink bounds of a run of text relative to its baseline origin
///
/// `top` is negative for glyphs rising above the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextBounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl TextBounds {
    /// Approximate bounds of lining digits in a typical sans-serif face
    pub fn estimate(text: &str, size: f32) -> Self {
        let glyphs = text.chars().count() as f32;
        Self {
            left: 0.0,
            top: -(size * 0.72).round(),
            right: (size * 0.56 * glyphs).round(),
            bottom: 0.0,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Immediate-mode 2D drawing target
///
/// Coordinates are viewport pixels, y-down, origin top-left. Rotations are
/// clockwise degrees and stack until popped.
pub trait Surface {
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    fn stroke_circle(&mut self, center: Point, radius: f32, paint: &StrokePaint);

    /// Blurred disc drawn outside `radius` only
    fn shadow_circle(&mut self, center: Point, radius: f32, paint: &ShadowPaint);

    fn stroke_round_rect(&mut self, rect: Rect, corner_radius: f32, paint: &StrokePaint);

    fn fill_polygon(&mut self, points: &[Point], color: Color);

    fn push_rotation(&mut self, degrees: f32, pivot: Point);

    fn pop_transform(&mut self);

    fn text_bounds(&self, text: &str, size: f32) -> TextBounds;

    /// Draw `text` with its baseline starting at `origin`
    fn fill_text(&mut self, text: &str, origin: Point, paint: &TextPaint);
}

/// Paint one frame
pub fn render<S: Surface + ?Sized>(
    geometry: &ClockGeometry,
    style: &StyleConfig,
    paints: &Paints,
    surface: &mut S,
) {
    let center = geometry.center();
    let radius = geometry.face_radius();

    if style.show_rectangle {
        surface.stroke_round_rect(geometry.border, geometry.border_corner_radius, &paints.border);
    }
    if style.show_shadow {
        surface.shadow_circle(center, radius, &paints.shadow);
    }
    surface.fill_circle(center, radius, paints.background);
    if style.show_circles {
        for rect in &geometry.inner_circles {
            surface.stroke_circle(rect.center(), rect.width() / 2.0, &paints.circles);
        }
    }
    if style.show_hour_labels {
        for label in &geometry.labels {
            draw_label(surface, label.text, label.anchor, &paints.labels);
        }
    }
    let hands = [
        (style.show_hour_arrow, &geometry.hour_hand),
        (style.show_minute_arrow, &geometry.minute_hand),
        (style.show_second_arrow, &geometry.second_hand),
    ];
    for (show, hand) in hands {
        if let (true, Some(hand)) = (show, hand) {
            draw_hand(surface, hand, center, paints.arrows);
        }
    }
}

fn draw_hand<S: Surface + ?Sized>(surface: &mut S, hand: &Hand, pivot: Point, color: Color) {
    if hand.is_empty() {
        return;
    }
    surface.push_rotation(hand.angle, pivot);
    surface.fill_polygon(&hand.polygon, color);
    surface.pop_transform();
}

/// Centre the ink box of `text` on `anchor`
fn draw_label<S: Surface + ?Sized>(surface: &mut S, text: &str, anchor: Point, paint: &TextPaint) {
    let bounds = surface.text_bounds(text, paint.size);
    let origin = Point::new(
        anchor.x - bounds.width() / 2.0 - bounds.left,
        anchor.y + bounds.height() / 2.0 - bounds.bottom,
    );
    surface.fill_text(text, origin, paint);
}

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillCircle {
        center: Point,
        radius: f32,
        color: Color,
    },
    StrokeCircle {
        center: Point,
        radius: f32,
        paint: StrokePaint,
    },
    ShadowCircle {
        center: Point,
        radius: f32,
        paint: ShadowPaint,
    },
    StrokeRoundRect {
        rect: Rect,
        corner_radius: f32,
        paint: StrokePaint,
    },
    FillPolygon {
        points: Vec<Point>,
        color: Color,
    },
    PushRotation {
        degrees: f32,
        pivot: Point,
    },
    PopTransform,
    FillText {
        text: String,
        origin: Point,
        paint: TextPaint,
    },
}

/// Surface that records calls instead of drawing
///
/// Text is measured with [`TextBounds::estimate`].
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn polygons(&self) -> impl Iterator<Item = &[Point]> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillPolygon { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.ops.push(DrawOp::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, paint: &StrokePaint) {
        self.ops.push(DrawOp::StrokeCircle {
            center,
            radius,
            paint: *paint,
        });
    }

    fn shadow_circle(&mut self, center: Point, radius: f32, paint: &ShadowPaint) {
        self.ops.push(DrawOp::ShadowCircle {
            center,
            radius,
            paint: *paint,
        });
    }

    fn stroke_round_rect(&mut self, rect: Rect, corner_radius: f32, paint: &StrokePaint) {
        self.ops.push(DrawOp::StrokeRoundRect {
            rect,
            corner_radius,
            paint: *paint,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.ops.push(DrawOp::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn push_rotation(&mut self, degrees: f32, pivot: Point) {
        self.ops.push(DrawOp::PushRotation { degrees, pivot });
    }

    fn pop_transform(&mut self) {
        self.ops.push(DrawOp::PopTransform);
    }

    fn text_bounds(&self, text: &str, size: f32) -> TextBounds {
        TextBounds::estimate(text, size)
    }

    fn fill_text(&mut self, text: &str, origin: Point, paint: &TextPaint) {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            origin,
            paint: *paint,
        });
    }
}
