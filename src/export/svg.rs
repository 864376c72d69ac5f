use std::fmt::Write;

use egui::Pos2;

use crate::error::ShapeExportError;
use crate::palette::to_hex;
use crate::shape::{BoxShape, LineShape, PolygonShape, Shape, ShapeKind};

pub(crate) fn write_header(out: &mut String, width: f32, height: f32) {
    let _ = writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(
        out,
        r#"<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">"#
    );
    let _ = writeln!(out, r#"<rect width="100%" height="100%" fill="white"/>"#);
}

pub(crate) fn write_footer(out: &mut String) {
    let _ = writeln!(out, "</svg>");
}

/// Converts one shape into a single SVG element.
///
/// Returns `Ok(None)` for shapes with nothing to draw: box shapes with a
/// zero width or height and polygons with fewer than three points.
pub fn shape_to_svg(shape: &Shape) -> Result<Option<String>, ShapeExportError> {
    let kind = shape.kind();
    if !shape.stroke_width().is_finite() {
        return Err(ShapeExportError::NonFiniteStrokeWidth { kind });
    }

    match shape {
        Shape::Rectangle(b) => rect_element(b),
        Shape::Ellipse(b) => ellipse_element(b),
        Shape::Line(l) => line_element(l).map(Some),
        Shape::Polygon(p) => polygon_element(p),
    }
}

/// Rounds half away from zero; `{:.0}` alone would round halves to even.
fn round(value: f32) -> f32 {
    // Adding zero turns -0 into 0.
    value.round() + 0.0
}

fn ensure_finite(kind: ShapeKind, values: &[f32]) -> Result<(), ShapeExportError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ShapeExportError::NonFiniteCoordinate { kind })
    }
}

fn rect_element(b: &BoxShape) -> Result<Option<String>, ShapeExportError> {
    ensure_finite(ShapeKind::Rectangle, &[b.origin.x, b.origin.y, b.width, b.height])?;
    if b.width <= 0.0 || b.height <= 0.0 {
        return Ok(None);
    }
    Ok(Some(format!(
        r#"<rect x="{:.0}" y="{:.0}" width="{:.0}" height="{:.0}" fill="{}" stroke="{}" stroke-width="{:.0}"/>"#,
        round(b.origin.x),
        round(b.origin.y),
        round(b.width),
        round(b.height),
        to_hex(b.fill),
        to_hex(b.stroke),
        round(b.stroke_width),
    )))
}

fn ellipse_element(b: &BoxShape) -> Result<Option<String>, ShapeExportError> {
    ensure_finite(ShapeKind::Ellipse, &[b.origin.x, b.origin.y, b.width, b.height])?;
    if b.width <= 0.0 || b.height <= 0.0 {
        return Ok(None);
    }
    let rx = b.width / 2.0;
    let ry = b.height / 2.0;
    Ok(Some(format!(
        r#"<ellipse cx="{:.0}" cy="{:.0}" rx="{:.0}" ry="{:.0}" fill="{}" stroke="{}" stroke-width="{:.0}"/>"#,
        round(b.origin.x + rx),
        round(b.origin.y + ry),
        round(rx),
        round(ry),
        to_hex(b.fill),
        to_hex(b.stroke),
        round(b.stroke_width),
    )))
}

fn line_element(l: &LineShape) -> Result<String, ShapeExportError> {
    ensure_finite(ShapeKind::Line, &[l.start.x, l.start.y, l.end.x, l.end.y])?;
    Ok(format!(
        r#"<line x1="{:.0}" y1="{:.0}" x2="{:.0}" y2="{:.0}" stroke="{}" stroke-width="{:.0}"/>"#,
        round(l.start.x),
        round(l.start.y),
        round(l.end.x),
        round(l.end.y),
        to_hex(l.stroke),
        round(l.stroke_width),
    ))
}

fn polygon_element(p: &PolygonShape) -> Result<Option<String>, ShapeExportError> {
    if p.points.len() < 3 {
        return Ok(None);
    }
    if !p.points.iter().all(|pt: &Pos2| pt.x.is_finite() && pt.y.is_finite()) {
        return Err(ShapeExportError::NonFiniteCoordinate {
            kind: ShapeKind::Polygon,
        });
    }
    let points = p
        .points
        .iter()
        .map(|pt| format!("{:.0},{:.0}", round(pt.x), round(pt.y)))
        .collect::<Vec<_>>()
        .join(" ");
    Ok(Some(format!(
        r#"<polygon points="{}" fill="{}" stroke="{}" stroke-width="{:.0}"/>"#,
        points,
        to_hex(p.fill),
        to_hex(p.stroke),
        round(p.stroke_width),
    )))
}
