//! Geometry module - layout of the clock face for a square viewport
//!
//! Pure functions from viewport side length and [`ClockTime`] to the shapes the
//! renderer draws. Coordinates are viewport pixels with the origin at the
//! top-left corner and y growing downwards. Angles are degrees, clockwise from
//! 12 o'clock.
//!
//! Hands are built as upright kites pointing at 12 o'clock and carry their
//! rotation angle; the renderer rotates them about the face centre.

use crate::clock_time::ClockTime;

/// Outer margin of the border rectangle, as a fraction of the side per side
pub const BORDER_MARGIN: f32 = 0.025;
/// Extra margin of the face inside a visible border rectangle
pub const FRAMED_FACE_MARGIN: f32 = 0.10;
/// Decorative circle margins, as fractions of the face width
pub const INNER_CIRCLE_MARGINS: [f32; 2] = [0.165, 0.33];
/// Label circle radius as a fraction of the face width
pub const LABEL_RADIUS: f32 = 0.425;
/// Border corner radius as a fraction of the border width
pub const BORDER_CORNER_RADIUS: f32 = 0.05;

/// Hand widths as fractions of the face width
pub const HOUR_ARROW_WIDTH: f32 = 0.05;
pub const MINUTE_ARROW_WIDTH: f32 = 0.03;
pub const SECOND_ARROW_WIDTH: f32 = 0.02;
/// Hand lengths as fractions of the face radius
pub const HOUR_ARROW_LENGTH: f32 = 0.55;
pub const MINUTE_ARROW_LENGTH: f32 = 0.75;
pub const SECOND_ARROW_LENGTH: f32 = 0.35;
/// Length of the kite's tail behind the centre, relative to its length
pub const ARROW_TAIL: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Rotate clockwise (on a y-down surface) about `pivot`
    pub fn rotate_about(self, pivot: Point, degrees: f32) -> Point {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        Point::new(pivot.x + dx * cos - dy * sin, pivot.y + dx * sin + dy * cos)
    }
}

/// Axis-aligned rectangle in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }

    /// Shrink by `margin` on every side
    pub fn inset(&self, margin: f32) -> Rect {
        Rect::new(
            self.left + margin,
            self.top + margin,
            self.right - margin,
            self.bottom - margin,
        )
    }
}

/// A numeral drawn on the face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Label {
    pub text: &'static str,
    pub anchor: Point,
}

/// A hand polygon and the rotation to draw it with
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    /// Kite pointing at 12 o'clock; empty when degenerate
    pub polygon: Vec<Point>,
    /// Clockwise rotation about the face centre, in degrees
    pub angle: f32,
}

impl Hand {
    pub fn is_empty(&self) -> bool {
        self.polygon.is_empty()
    }

    /// The polygon as it appears on the face
    pub fn placed(&self, pivot: Point) -> Vec<Point> {
        self.polygon
            .iter()
            .map(|p| p.rotate_about(pivot, self.angle))
            .collect()
    }
}

/// Margins that place the face inside the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRatios {
    /// Border rectangle margin, fraction of the side
    pub border_margin: f32,
    /// Face margin inside the border rectangle, fraction of the side
    pub face_margin: f32,
}

impl LayoutRatios {
    /// Face fills the border rectangle
    pub const PLAIN: LayoutRatios = LayoutRatios {
        border_margin: BORDER_MARGIN,
        face_margin: 0.0,
    };
    /// Face nested inside a visible border rectangle
    pub const FRAMED: LayoutRatios = LayoutRatios {
        border_margin: BORDER_MARGIN,
        face_margin: FRAMED_FACE_MARGIN,
    };

    pub fn for_rectangle(show_rectangle: bool) -> Self {
        if show_rectangle {
            Self::FRAMED
        } else {
            Self::PLAIN
        }
    }
}

/// Which hands a layout pass builds polygons for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandSelection {
    pub hour: bool,
    pub minute: bool,
    pub second: bool,
}

impl HandSelection {
    pub const ALL: HandSelection = HandSelection {
        hour: true,
        minute: true,
        second: true,
    };
}

impl Default for HandSelection {
    fn default() -> Self {
        Self::ALL
    }
}

/// Every shape of one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ClockGeometry {
    pub side: f32,
    pub border: Rect,
    pub border_corner_radius: f32,
    pub face: Rect,
    pub inner_circles: [Rect; 2],
    /// 12, 3, 6 and 9, in that order
    pub labels: [Label; 4],
    /// `None` when the hand was not selected for this pass
    pub hour_hand: Option<Hand>,
    pub minute_hand: Option<Hand>,
    pub second_hand: Option<Hand>,
}

impl ClockGeometry {
    /// Lay out a square viewport of `side` pixels with all three hands
    ///
    /// Returns `None` for a non-positive or non-finite side.
    pub fn compute(side: f32, time: &ClockTime, ratios: LayoutRatios) -> Option<Self> {
        Self::compute_hands(side, time, ratios, HandSelection::ALL)
    }

    /// Lay out a square viewport, building only the selected hands
    pub fn compute_hands(
        side: f32,
        time: &ClockTime,
        ratios: LayoutRatios,
        hands: HandSelection,
    ) -> Option<Self> {
        if !side.is_finite() || side <= 0.0 {
            return None;
        }

        let viewport = Rect::new(0.0, 0.0, side, side);
        let border = viewport.inset((side * ratios.border_margin).trunc());
        let face = border.inset((side * ratios.face_margin).trunc());
        let face_width = face.width();
        let center = face.center();

        let inner_circles =
            INNER_CIRCLE_MARGINS.map(|margin| face.inset((face_width * margin).trunc()));

        let label_radius = (face_width * LABEL_RADIUS).trunc();
        let labels = [("12", 270.0), ("3", 0.0), ("6", 90.0), ("9", 180.0)].map(|(text, angle)| {
            Label {
                text,
                anchor: circle_point(center, label_radius, angle),
            }
        });

        let radius = face_width / 2.0;
        let hand = |selected: bool, width: f32, length: f32, angle: f32| {
            selected.then(|| Hand {
                polygon: hand_polygon(
                    center,
                    (face_width * width).trunc(),
                    (radius * length).trunc(),
                ),
                angle,
            })
        };

        Some(Self {
            side,
            border,
            border_corner_radius: border.width() * BORDER_CORNER_RADIUS,
            face,
            inner_circles,
            labels,
            hour_hand: hand(
                hands.hour,
                HOUR_ARROW_WIDTH,
                HOUR_ARROW_LENGTH,
                time.hour_angle(),
            ),
            minute_hand: hand(
                hands.minute,
                MINUTE_ARROW_WIDTH,
                MINUTE_ARROW_LENGTH,
                time.minute_angle(),
            ),
            second_hand: hand(
                hands.second,
                SECOND_ARROW_WIDTH,
                SECOND_ARROW_LENGTH,
                time.second_angle(),
            ),
        })
    }

    pub fn center(&self) -> Point {
        self.face.center()
    }

    pub fn face_radius(&self) -> f32 {
        self.face.width() / 2.0
    }
}

/// Kite with its tip `length` above `center` and a short tail below it
///
/// Degenerate sizes give an empty polygon.
pub fn hand_polygon(center: Point, width: f32, length: f32) -> Vec<Point> {
    if width <= 0.0 || length <= 0.0 {
        return Vec::new();
    }
    let half = width / 2.0;
    vec![
        Point::new(center.x + half, center.y),
        Point::new(center.x, center.y - length),
        Point::new(center.x - half, center.y),
        Point::new(center.x, center.y + length * ARROW_TAIL),
    ]
}

/// Point at `angle` degrees on a circle, rounded to whole pixels
///
/// 0° points right and angles grow clockwise on a y-down surface.
pub fn circle_point(center: Point, radius: f32, angle: f32) -> Point {
    let (sin, cos) = angle.to_radians().sin_cos();
    Point::new(
        (center.x + radius * cos).round(),
        (center.y + radius * sin).round(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    #[test]
    fn test_plain_layout_300() {
        let geometry = ClockGeometry::compute(300.0, &ClockTime::new(3, 0, 0), LayoutRatios::PLAIN).unwrap();
        assert_eq!(geometry.face, Rect::new(7.0, 7.0, 293.0, 293.0));
        assert_eq!(geometry.border, geometry.face);
        assert_eq!(geometry.center(), Point::new(150.0, 150.0));
        assert_eq!(geometry.face.width(), geometry.face.height());

        // 286 * 0.165 = 47.19, 286 * 0.33 = 94.38
        assert_eq!(geometry.inner_circles[0], Rect::new(54.0, 54.0, 246.0, 246.0));
        assert_eq!(geometry.inner_circles[1], Rect::new(101.0, 101.0, 199.0, 199.0));
    }

    #[test]
    fn test_labels_at_cardinal_points() {
        let geometry = ClockGeometry::compute(300.0, &ClockTime::new(3, 0, 0), LayoutRatios::PLAIN).unwrap();
        let texts: Vec<_> = geometry.labels.iter().map(|l| l.text).collect();
        assert_eq!(texts, ["12", "3", "6", "9"]);

        // 286 * 0.425 = 121.55 -> 121
        let three = geometry.labels[1].anchor;
        assert_eq!(three, Point::new(271.0, 150.0));
        assert!(geometry.labels.iter().all(|l| l.anchor.x <= three.x));
        assert_eq!(geometry.labels[0].anchor, Point::new(150.0, 29.0));
        assert_eq!(geometry.labels[2].anchor, Point::new(150.0, 271.0));
        assert_eq!(geometry.labels[3].anchor, Point::new(29.0, 150.0));
    }

    #[test]
    fn test_framed_layout_nests_face() {
        let geometry = ClockGeometry::compute(300.0, &ClockTime::new(0, 0, 0), LayoutRatios::FRAMED).unwrap();
        assert_eq!(geometry.border, Rect::new(7.0, 7.0, 293.0, 293.0));
        assert_eq!(geometry.face, Rect::new(37.0, 37.0, 263.0, 263.0));
        assert_eq!(geometry.face.center(), geometry.border.center());
    }

    /// (width, length) of a kite built by `hand_polygon`
    fn hand_size(hand: &Option<Hand>) -> (f32, f32) {
        let polygon = &hand.as_ref().unwrap().polygon;
        (polygon[0].x - polygon[2].x, polygon[0].y - polygon[1].y)
    }

    #[test]
    fn test_hand_sizes_scale_with_face() {
        let geometry = ClockGeometry::compute(300.0, &ClockTime::new(3, 0, 0), LayoutRatios::PLAIN).unwrap();
        // Hour: width 286 * 0.05 = 14.3 -> 14, length 143 * 0.55 = 78.65 -> 78
        let expected = vec![
            Point::new(157.0, 150.0),
            Point::new(150.0, 72.0),
            Point::new(143.0, 150.0),
            Point::new(150.0, 157.8),
        ];
        let hour = geometry.hour_hand.as_ref().unwrap();
        assert_eq!(hour.polygon.len(), expected.len());
        for (actual, expected) in hour.polygon.iter().zip(&expected) {
            assert!(close(*actual, *expected), "{:?} != {:?}", actual, expected);
        }
        assert_eq!(hour.angle, 90.0);
        assert_eq!(geometry.minute_hand.as_ref().unwrap().angle, 0.0);
        assert_eq!(geometry.second_hand.as_ref().unwrap().angle, 0.0);

        assert_eq!(hand_size(&geometry.minute_hand), (8.0, 107.0));
        assert_eq!(hand_size(&geometry.second_hand), (5.0, 50.0));

        // 600px: face 15..585, width 570, radius 285
        let large = ClockGeometry::compute(600.0, &ClockTime::new(3, 0, 0), LayoutRatios::PLAIN).unwrap();
        assert_eq!(large.face, Rect::new(15.0, 15.0, 585.0, 585.0));
        assert_eq!(hand_size(&large.hour_hand), (28.0, 156.0));
        assert_eq!(hand_size(&large.minute_hand), (17.0, 213.0));
        assert_eq!(hand_size(&large.second_hand), (11.0, 99.0));
    }

    #[test]
    fn test_three_oclock_hand_points_right() {
        let geometry = ClockGeometry::compute(300.0, &ClockTime::new(3, 0, 0), LayoutRatios::PLAIN).unwrap();
        let placed = geometry.hour_hand.as_ref().unwrap().placed(geometry.center());
        assert!(close(placed[1], Point::new(228.0, 150.0)));
    }

    #[test]
    fn test_unselected_hands_are_not_built() {
        let hands = HandSelection {
            hour: true,
            minute: false,
            second: false,
        };
        let geometry =
            ClockGeometry::compute_hands(300.0, &ClockTime::new(3, 0, 0), LayoutRatios::PLAIN, hands)
                .unwrap();
        assert!(geometry.hour_hand.is_some());
        assert!(geometry.minute_hand.is_none());
        assert!(geometry.second_hand.is_none());

        let all = ClockGeometry::compute(300.0, &ClockTime::new(3, 0, 0), LayoutRatios::PLAIN).unwrap();
        assert_eq!(geometry.face, all.face);
        assert_eq!(geometry.labels, all.labels);
        assert_eq!(geometry.hour_hand, all.hour_hand);
    }

    #[test]
    fn test_degenerate_hands_are_empty() {
        // Face of 20px: second hand width 20 * 0.02 = 0.4 -> 0
        let geometry = ClockGeometry::compute(20.0, &ClockTime::new(0, 0, 0), LayoutRatios::PLAIN).unwrap();
        assert!(geometry.second_hand.unwrap().is_empty());
        assert!(hand_polygon(Point::default(), 0.0, 10.0).is_empty());
        assert!(hand_polygon(Point::default(), 10.0, 0.0).is_empty());
    }

    #[test]
    fn test_invalid_side() {
        let time = ClockTime::new(0, 0, 0);
        assert!(ClockGeometry::compute(0.0, &time, LayoutRatios::PLAIN).is_none());
        assert!(ClockGeometry::compute(-5.0, &time, LayoutRatios::PLAIN).is_none());
        assert!(ClockGeometry::compute(f32::NAN, &time, LayoutRatios::PLAIN).is_none());
    }

    #[test]
    fn test_compute_is_idempotent() {
        let time = ClockTime::new(10, 8, 37);
        for side in [1.0, 99.0, 300.0, 1079.0] {
            let first = ClockGeometry::compute(side, &time, LayoutRatios::FRAMED);
            let second = ClockGeometry::compute(side, &time, LayoutRatios::FRAMED);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_rotate_about_is_clockwise() {
        let pivot = Point::new(10.0, 10.0);
        let up = Point::new(10.0, 0.0);
        assert!(close(up.rotate_about(pivot, 90.0), Point::new(20.0, 10.0)));
        assert!(close(up.rotate_about(pivot, 180.0), Point::new(10.0, 20.0)));
    }
}
