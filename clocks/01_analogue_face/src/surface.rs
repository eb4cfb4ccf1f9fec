//! Drawing module - adapts the clock's drawing surface to nannou's Draw API
//!
//! Clock coordinates are y-down pixels from the top-left of the clock square;
//! nannou is y-up from the window centre.

use clockview::{Color, Point, Rect, ShadowPaint, StrokePaint, Surface, TextBounds, TextPaint};
use nannou::prelude::*;

/// Segments used to approximate circles and corners
const RING_SEGMENTS: usize = 120;
const CORNER_SEGMENTS: usize = 12;
/// Rings used to fake the outer blur of the shadow
const SHADOW_STEPS: usize = 12;

pub struct NannouSurface {
    /// Transform stack; the last entry is current
    draws: Vec<Draw>,
    /// Top-left corner of the clock square in window coordinates
    origin: Point2,
}

impl NannouSurface {
    pub fn new(draw: &Draw, origin: Point2) -> Self {
        Self {
            draws: vec![draw.clone()],
            origin,
        }
    }

    fn draw(&self) -> &Draw {
        // The base entry is never popped
        &self.draws[self.draws.len() - 1]
    }

    fn to_window(&self, p: Point) -> Point2 {
        pt2(self.origin.x + p.x, self.origin.y - p.y)
    }
}

fn to_srgba(color: Color) -> Srgba<u8> {
    srgba(color.red, color.green, color.blue, color.alpha)
}

fn with_alpha(color: Color, alpha: f32) -> Srgba<u8> {
    let alpha = (color.alpha as f32 * alpha).round().clamp(0.0, 255.0) as u8;
    srgba(color.red, color.green, color.blue, alpha)
}

/// Draw a ring (circle outline) using line segments
fn draw_ring(draw: &Draw, center: Point2, radius: f32, weight: f32, color: Srgba<u8>) {
    let points: Vec<Point2> = (0..=RING_SEGMENTS)
        .map(|i| {
            let angle = (i as f32 / RING_SEGMENTS as f32) * TAU;
            center + vec2(angle.cos(), angle.sin()) * radius
        })
        .collect();

    draw.polyline().weight(weight).color(color).points(points);
}

/// Outline of a rounded rectangle, clockwise from the top-right corner
fn round_rect_points(rect: Rect, corner_radius: f32) -> Vec<Point> {
    let r = corner_radius.clamp(0.0, rect.width().min(rect.height()) / 2.0);
    // Corner centres with the angle each quarter arc starts at (y-down)
    let corners = [
        (Point::new(rect.right - r, rect.top + r), -90.0_f32),
        (Point::new(rect.right - r, rect.bottom - r), 0.0),
        (Point::new(rect.left + r, rect.bottom - r), 90.0),
        (Point::new(rect.left + r, rect.top + r), 180.0),
    ];
    let mut points = Vec::with_capacity(corners.len() * (CORNER_SEGMENTS + 1) + 1);
    for (center, start) in corners {
        for i in 0..=CORNER_SEGMENTS {
            let angle = (start + 90.0 * i as f32 / CORNER_SEGMENTS as f32).to_radians();
            points.push(Point::new(center.x + r * angle.cos(), center.y + r * angle.sin()));
        }
    }
    if let Some(&first) = points.first() {
        points.push(first);
    }
    points
}

impl Surface for NannouSurface {
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.draw()
            .ellipse()
            .xy(self.to_window(center))
            .radius(radius)
            .color(to_srgba(color));
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, paint: &StrokePaint) {
        draw_ring(
            self.draw(),
            self.to_window(center),
            radius,
            paint.width.max(1.0),
            to_srgba(paint.color),
        );
    }

    fn shadow_circle(&mut self, center: Point, radius: f32, paint: &ShadowPaint) {
        if paint.blur_radius <= 0.0 {
            return;
        }
        let center = self.to_window(center);
        let step = paint.blur_radius / SHADOW_STEPS as f32;
        for i in 0..SHADOW_STEPS {
            let t = (i as f32 + 0.5) / SHADOW_STEPS as f32;
            let falloff = (1.0 - t) * (1.0 - t);
            draw_ring(
                self.draw(),
                center,
                radius + t * paint.blur_radius,
                step + 0.5,
                with_alpha(paint.color, falloff),
            );
        }
    }

    fn stroke_round_rect(&mut self, rect: Rect, corner_radius: f32, paint: &StrokePaint) {
        let points: Vec<Point2> = round_rect_points(rect, corner_radius)
            .into_iter()
            .map(|p| self.to_window(p))
            .collect();
        self.draw()
            .polyline()
            .weight(paint.width.max(1.0))
            .color(to_srgba(paint.color))
            .points(points);
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        let points: Vec<Point2> = points.iter().map(|&p| self.to_window(p)).collect();
        self.draw().polygon().color(to_srgba(color)).points(points);
    }

    fn push_rotation(&mut self, degrees: f32, pivot: Point) {
        let pivot = self.to_window(pivot);
        // Clockwise on screen is negative in nannou's y-up space
        let rotated = self
            .draw()
            .xy(pivot)
            .rotate(-degrees.to_radians())
            .xy(-pivot);
        self.draws.push(rotated);
    }

    fn pop_transform(&mut self) {
        if self.draws.len() > 1 {
            self.draws.pop();
        }
    }

    fn text_bounds(&self, text: &str, size: f32) -> TextBounds {
        TextBounds::estimate(text, size)
    }

    fn fill_text(&mut self, text: &str, origin: Point, paint: &TextPaint) {
        // nannou centres text in its box, so place the box over the ink bounds
        let bounds = self.text_bounds(text, paint.size);
        let center = Point::new(
            origin.x + bounds.left + bounds.width() / 2.0,
            origin.y + bounds.top + bounds.height() / 2.0,
        );
        self.draw()
            .text(text)
            .xy(self.to_window(center))
            .color(to_srgba(paint.color))
            .font_size(paint.size.round().max(1.0) as u32)
            .w(bounds.width() * 2.0 + paint.size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_window_flips_y() {
        let surface = NannouSurface::new(&Draw::new(), pt2(-150.0, 150.0));
        assert_eq!(surface.to_window(Point::new(0.0, 0.0)), pt2(-150.0, 150.0));
        assert_eq!(surface.to_window(Point::new(150.0, 150.0)), pt2(0.0, 0.0));
        assert_eq!(surface.to_window(Point::new(300.0, 300.0)), pt2(150.0, -150.0));
    }

    #[test]
    fn test_transform_stack_keeps_base() {
        let mut surface = NannouSurface::new(&Draw::new(), pt2(0.0, 0.0));
        surface.push_rotation(90.0, Point::new(10.0, 10.0));
        assert_eq!(surface.draws.len(), 2);
        surface.pop_transform();
        surface.pop_transform();
        assert_eq!(surface.draws.len(), 1);
    }

    #[test]
    fn test_round_rect_is_closed_and_inside() {
        let rect = Rect::new(10.0, 10.0, 110.0, 60.0);
        let points = round_rect_points(rect, 8.0);
        assert_eq!(points.first(), points.last());
        for p in &points {
            assert!(p.x >= rect.left - 1e-3 && p.x <= rect.right + 1e-3);
            assert!(p.y >= rect.top - 1e-3 && p.y <= rect.bottom + 1e-3);
        }
    }
}
