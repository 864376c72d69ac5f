//! Scene-to-SVG export.
//!
//! Shapes are written in scene order, one element per line. A shape that
//! fails to convert is logged and left out; the rest of the document is
//! still written.

mod svg;

use std::io::Write;
use std::path::Path;

pub use svg::shape_to_svg;

use crate::error::ExportError;
use crate::scene::Scene;

/// Outcome of an export, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportReport {
    /// Shapes written as SVG elements.
    pub written: usize,
    /// Shapes left out because they were degenerate or malformed.
    pub skipped: usize,
}

/// Renders the live shapes of `scene` into an SVG document.
pub fn scene_to_svg(scene: &Scene, width: f32, height: f32) -> (String, ExportReport) {
    let mut out = String::new();
    let mut report = ExportReport::default();

    svg::write_header(&mut out, width, height);
    for (id, shape) in scene.iter() {
        match shape_to_svg(shape) {
            Ok(Some(element)) => {
                out.push_str(&element);
                out.push('\n');
                report.written += 1;
            }
            Ok(None) => {
                log::debug!("Skipping empty {} {}", shape.kind(), id);
                report.skipped += 1;
            }
            Err(err) => {
                log::warn!("Skipping shape {} during SVG export: {}", id, err);
                report.skipped += 1;
            }
        }
    }
    svg::write_footer(&mut out);

    (out, report)
}

/// Writes the SVG document for `scene` to `out`.
pub fn write_svg<W: Write>(
    scene: &Scene,
    width: f32,
    height: f32,
    out: &mut W,
) -> Result<ExportReport, ExportError> {
    let (document, report) = scene_to_svg(scene, width, height);
    out.write_all(document.as_bytes())?;
    out.flush()?;
    Ok(report)
}

/// Writes the SVG document for `scene` to the file at `path`.
pub fn export_to_path(
    scene: &Scene,
    width: f32,
    height: f32,
    path: &Path,
) -> Result<ExportReport, ExportError> {
    let (document, report) = scene_to_svg(scene, width, height);
    std::fs::write(path, document)?;
    log::info!("Saved {} shapes to {}", report.written, path.display());
    Ok(report)
}
