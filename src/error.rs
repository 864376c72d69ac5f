use thiserror::Error;

use crate::shape::ShapeKind;

/// Failure to deliver an SVG document to its destination.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write SVG: {0}")]
    Io(#[from] std::io::Error),
}

/// A single shape that could not be converted to SVG. The exporter logs it
/// and carries on with the next shape.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShapeExportError {
    #[error("{kind} has a non-finite coordinate")]
    NonFiniteCoordinate { kind: ShapeKind },

    #[error("{kind} has a non-finite stroke width")]
    NonFiniteStrokeWidth { kind: ShapeKind },
}

/// Errors surfaced by editor commands. Every other condition (empty undo
/// stack, nothing selected, too few polygon points...) is a silent no-op.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Export(#[from] ExportError),
}
