//! The shape model: a closed set of shape variants sharing a style.
//!
//! Box shapes (rectangles and ellipses) are stored as a normalized origin
//! plus a non-negative width/height. Lines keep their raw endpoints and
//! polygons keep the literal click sequence.

use egui::{Color32, Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

mod common;

pub use common::MIN_SHAPE_SIZE;
use common::{calculate_bounds, normalized_box};

use crate::geometry::{distance_to_segment, point_in_polygon};

/// Fill, stroke and stroke width applied to a shape at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub fill: Color32,
    pub stroke: Color32,
    pub stroke_width: f32,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: crate::palette::LIGHT_BLUE,
            stroke: Color32::BLACK,
            stroke_width: 2.0,
        }
    }
}

/// Discriminant of [`Shape`], used in events, logs and SVG diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Line,
    Polygon,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Line => "line",
            ShapeKind::Polygon => "polygon",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Geometry of a rectangle or ellipse: the ellipse is inscribed in the box.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxShape {
    pub origin: Pos2,
    pub width: f32,
    pub height: f32,
    pub fill: Color32,
    pub stroke: Color32,
    pub stroke_width: f32,
}

impl BoxShape {
    fn at(anchor: Pos2, style: ShapeStyle) -> Self {
        Self {
            origin: anchor,
            width: 0.0,
            height: 0.0,
            fill: style.fill,
            stroke: style.stroke,
            stroke_width: style.stroke_width,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.origin, Vec2::new(self.width, self.height))
    }

    pub fn center(&self) -> Pos2 {
        self.rect().center()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineShape {
    pub start: Pos2,
    pub end: Pos2,
    pub stroke: Color32,
    pub stroke_width: f32,
}

/// A closed polygon. After completion the first and last points are equal.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    pub points: Vec<Pos2>,
    pub fill: Color32,
    pub stroke: Color32,
    pub stroke_width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(BoxShape),
    Ellipse(BoxShape),
    Line(LineShape),
    Polygon(PolygonShape),
}

impl Shape {
    /// A zero-sized rectangle anchored at `anchor`.
    pub fn rectangle_at(anchor: Pos2, style: ShapeStyle) -> Self {
        Shape::Rectangle(BoxShape::at(anchor, style))
    }

    /// A zero-sized ellipse anchored at `anchor`.
    pub fn ellipse_at(anchor: Pos2, style: ShapeStyle) -> Self {
        Shape::Ellipse(BoxShape::at(anchor, style))
    }

    /// A zero-length line starting and ending at `anchor`. Lines carry no fill.
    pub fn line_at(anchor: Pos2, style: ShapeStyle) -> Self {
        Shape::Line(LineShape {
            start: anchor,
            end: anchor,
            stroke: style.stroke,
            stroke_width: style.stroke_width,
        })
    }

    pub fn polygon(points: Vec<Pos2>, style: ShapeStyle) -> Self {
        Shape::Polygon(PolygonShape {
            points,
            fill: style.fill,
            stroke: style.stroke,
            stroke_width: style.stroke_width,
        })
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    /// Updates the shape while it is being dragged out from `anchor`.
    ///
    /// Box shapes get a normalized origin and non-negative size whatever the
    /// drag direction; lines move their end point; polygons are unaffected.
    pub fn resize_to(&mut self, anchor: Pos2, current: Pos2) {
        match self {
            Shape::Rectangle(b) | Shape::Ellipse(b) => {
                let (origin, width, height) = normalized_box(anchor, current);
                b.origin = origin;
                b.width = width;
                b.height = height;
            }
            Shape::Line(l) => l.end = current,
            Shape::Polygon(_) => {}
        }
    }

    /// Whether a freshly dragged shape is big enough to keep on pointer-up.
    /// Lines are always kept, whatever their length.
    pub fn exceeds_click_threshold(&self) -> bool {
        match self {
            Shape::Rectangle(b) | Shape::Ellipse(b) => {
                b.width > MIN_SHAPE_SIZE || b.height > MIN_SHAPE_SIZE
            }
            Shape::Line(_) => true,
            Shape::Polygon(p) => p.points.len() >= 3,
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Rectangle(b) | Shape::Ellipse(b) => b.origin += delta,
            Shape::Line(l) => {
                l.start += delta;
                l.end += delta;
            }
            Shape::Polygon(p) => {
                for point in &mut p.points {
                    *point += delta;
                }
            }
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rectangle(b) | Shape::Ellipse(b) => b.rect(),
            Shape::Line(l) => Rect::from_two_pos(l.start, l.end),
            Shape::Polygon(p) => calculate_bounds(&p.points),
        }
    }

    /// Tests whether `pos` lands on the shape. `tolerance` is the minimum
    /// grab distance for thin outlines.
    pub fn hit_test(&self, pos: Pos2, tolerance: f32) -> bool {
        let half_stroke = self.stroke_width() / 2.0;
        match self {
            Shape::Rectangle(b) => b.rect().expand(half_stroke).contains(pos),
            Shape::Ellipse(b) => {
                let rx = b.width / 2.0 + half_stroke;
                let ry = b.height / 2.0 + half_stroke;
                if rx <= 0.0 || ry <= 0.0 {
                    return false;
                }
                let d = pos - b.center();
                (d.x / rx).powi(2) + (d.y / ry).powi(2) <= 1.0
            }
            Shape::Line(l) => {
                distance_to_segment(pos, l.start, l.end) <= half_stroke.max(tolerance)
            }
            Shape::Polygon(p) => {
                point_in_polygon(pos, &p.points)
                    || p.points.windows(2).any(|edge| {
                        distance_to_segment(pos, edge[0], edge[1]) <= half_stroke.max(tolerance)
                    })
            }
        }
    }

    /// Fill colour, or `None` for lines.
    pub fn fill(&self) -> Option<Color32> {
        match self {
            Shape::Rectangle(b) | Shape::Ellipse(b) => Some(b.fill),
            Shape::Line(_) => None,
            Shape::Polygon(p) => Some(p.fill),
        }
    }

    /// Replaces the fill and returns the previous one. Lines reject the
    /// change and return `None`.
    pub fn set_fill(&mut self, color: Color32) -> Option<Color32> {
        match self {
            Shape::Rectangle(b) | Shape::Ellipse(b) => Some(std::mem::replace(&mut b.fill, color)),
            Shape::Line(_) => None,
            Shape::Polygon(p) => Some(std::mem::replace(&mut p.fill, color)),
        }
    }

    pub fn stroke(&self) -> Color32 {
        match self {
            Shape::Rectangle(b) | Shape::Ellipse(b) => b.stroke,
            Shape::Line(l) => l.stroke,
            Shape::Polygon(p) => p.stroke,
        }
    }

    /// Replaces the stroke colour and returns the previous one.
    pub fn set_stroke(&mut self, color: Color32) -> Color32 {
        let slot = match self {
            Shape::Rectangle(b) | Shape::Ellipse(b) => &mut b.stroke,
            Shape::Line(l) => &mut l.stroke,
            Shape::Polygon(p) => &mut p.stroke,
        };
        std::mem::replace(slot, color)
    }

    pub fn stroke_width(&self) -> f32 {
        match self {
            Shape::Rectangle(b) | Shape::Ellipse(b) => b.stroke_width,
            Shape::Line(l) => l.stroke_width,
            Shape::Polygon(p) => p.stroke_width,
        }
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        match self {
            Shape::Rectangle(b) | Shape::Ellipse(b) => b.stroke_width = width,
            Shape::Line(l) => l.stroke_width = width,
            Shape::Polygon(p) => p.stroke_width = width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn box_starts_empty_at_anchor() {
        let shape = Shape::rectangle_at(pos2(5.0, 6.0), ShapeStyle::default());
        assert_eq!(shape.bounds(), Rect::from_min_size(pos2(5.0, 6.0), Vec2::ZERO));
        assert!(!shape.exceeds_click_threshold());
    }

    #[test]
    fn resize_never_produces_negative_size() {
        let anchor = pos2(100.0, 100.0);
        let mut shape = Shape::ellipse_at(anchor, ShapeStyle::default());
        for current in [pos2(40.0, 160.0), pos2(130.0, 20.0), pos2(99.0, 99.0)] {
            shape.resize_to(anchor, current);
            let Shape::Ellipse(b) = &shape else { unreachable!() };
            assert!(b.width >= 0.0 && b.height >= 0.0);
            assert_eq!(b.origin, pos2(anchor.x.min(current.x), anchor.y.min(current.y)));
        }
    }

    #[test]
    fn line_keeps_raw_endpoints() {
        let mut line = Shape::line_at(pos2(10.0, 10.0), ShapeStyle::default());
        line.resize_to(pos2(10.0, 10.0), pos2(2.0, 3.0));
        let Shape::Line(l) = &line else { unreachable!() };
        assert_eq!((l.start, l.end), (pos2(10.0, 10.0), pos2(2.0, 3.0)));
        assert!(line.exceeds_click_threshold());
    }

    #[test]
    fn translate_moves_every_polygon_point() {
        let mut poly = Shape::polygon(
            vec![pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(10.0, 10.0), pos2(0.0, 0.0)],
            ShapeStyle::default(),
        );
        poly.translate(vec2(5.0, -1.0));
        let Shape::Polygon(p) = &poly else { unreachable!() };
        assert_eq!(p.points[0], pos2(5.0, -1.0));
        assert_eq!(p.points[2], pos2(15.0, 9.0));
    }

    #[test]
    fn lines_reject_fill() {
        let mut line = Shape::line_at(pos2(0.0, 0.0), ShapeStyle::default());
        assert_eq!(line.set_fill(Color32::RED), None);
        assert_eq!(line.fill(), None);
        assert_eq!(line.stroke(), Color32::BLACK);
    }

    #[test]
    fn line_hit_uses_tolerance() {
        let mut line = Shape::line_at(pos2(0.0, 0.0), ShapeStyle::default());
        line.resize_to(pos2(0.0, 0.0), pos2(100.0, 0.0));
        assert!(line.hit_test(pos2(50.0, 3.0), 4.0));
        assert!(!line.hit_test(pos2(50.0, 6.0), 4.0));
    }
}
