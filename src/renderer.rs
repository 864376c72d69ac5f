use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

use crate::shape::{BoxShape, Shape};
use crate::state::{EditorContext, PolygonDraft};

const ELLIPSE_SEGMENTS: usize = 64;

/// Paints the scene, the selection highlight and the unfinished polygon onto
/// the canvas.
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
    selection_color: Color32,
    draft_color: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            selection_color: Color32::from_rgb(0x1E, 0x90, 0xFF),
            draft_color: Color32::DARK_GRAY,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the current frame
    ///
    /// Shapes are stored in canvas-local coordinates; `canvas_rect` places
    /// them on screen. `hover` is the canvas-local pointer position, used to
    /// preview the next polygon edge.
    pub fn render(
        &self,
        painter: &Painter,
        canvas_rect: Rect,
        editor: &EditorContext,
        hover: Option<Pos2>,
    ) {
        painter.rect_filled(canvas_rect, 0.0, self.background);

        let offset = canvas_rect.min.to_vec2();
        for (_, shape) in editor.scene().iter() {
            self.draw_shape(painter, shape, offset);
        }

        if let Some(shape) = editor.selected_shape() {
            let bounds = shape.bounds().translate(offset).expand(3.0);
            painter.rect_stroke(bounds, 0.0, Stroke::new(1.0, self.selection_color));
        }

        if let PolygonDraft::Collecting { points } = editor.state().polygon() {
            self.draw_draft(painter, points, hover, offset);
        }
    }

    fn draw_shape(&self, painter: &Painter, shape: &Shape, offset: Vec2) {
        match shape {
            Shape::Rectangle(rect) => {
                painter.rect(
                    rect.rect().translate(offset),
                    0.0,
                    rect.fill,
                    Stroke::new(rect.stroke_width, rect.stroke),
                );
            }
            Shape::Ellipse(ellipse) => {
                painter.add(egui::Shape::convex_polygon(
                    ellipse_outline(ellipse, offset),
                    ellipse.fill,
                    Stroke::new(ellipse.stroke_width, ellipse.stroke),
                ));
            }
            Shape::Line(line) => {
                painter.line_segment(
                    [line.start + offset, line.end + offset],
                    Stroke::new(line.stroke_width, line.stroke),
                );
            }
            Shape::Polygon(polygon) => {
                let mut points: Vec<Pos2> = polygon.points.iter().map(|p| *p + offset).collect();
                if points.len() > 1 && points.first() == points.last() {
                    points.pop();
                }
                // Concave outlines fill approximately; the stroke is exact.
                painter.add(egui::Shape::convex_polygon(
                    points.clone(),
                    polygon.fill,
                    Stroke::NONE,
                ));
                painter.add(egui::Shape::closed_line(
                    points,
                    Stroke::new(polygon.stroke_width, polygon.stroke),
                ));
            }
        }
    }

    fn draw_draft(&self, painter: &Painter, points: &[Pos2], hover: Option<Pos2>, offset: Vec2) {
        let stroke = Stroke::new(1.0, self.draft_color);
        let mut path: Vec<Pos2> = points.iter().map(|p| *p + offset).collect();
        for point in &path {
            painter.circle_filled(*point, 2.5, self.draft_color);
        }
        if let Some(hover) = hover {
            path.push(hover + offset);
        }
        if path.len() > 1 {
            painter.extend(egui::Shape::dashed_line(&path, stroke, 6.0, 4.0));
        }
    }
}

fn ellipse_outline(ellipse: &BoxShape, offset: Vec2) -> Vec<Pos2> {
    let center = ellipse.center() + offset;
    let radii = Vec2::new(ellipse.width / 2.0, ellipse.height / 2.0);
    (0..ELLIPSE_SEGMENTS)
        .map(|i| {
            let angle = i as f32 / ELLIPSE_SEGMENTS as f32 * std::f32::consts::TAU;
            center + Vec2::new(radii.x * angle.cos(), radii.y * angle.sin())
        })
        .collect()
}
