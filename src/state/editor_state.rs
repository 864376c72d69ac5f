//! Session-wide editor state: tool, mode, default style, selection and the
//! pointer interaction currently in flight.
//!
//! Drawing mode interprets the pointer according to the current tool. The
//! rectangle, ellipse and line tools use a single press-drag-release
//! gesture. The polygon tool runs its own multi-click machine:
//!
//! ```text
//!            first click               click (no crossing): append point
//!  ┌──────┐ ───────────► ┌────────────┐ ◄────────────────┐
//!  │ Idle │              │ Collecting │ ─────────────────┘
//!  └──────┘ ◄─────────── └────────────┘
//!      completion (double-click, or a click whose segment
//!      crosses an earlier one) with at least 3 points
//! ```
//!
//! Editing mode uses the pointer to select the topmost shape and drag it.

use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::scene::ShapeId;
use crate::shape::{ShapeKind, ShapeStyle};

/// The shape kind that a Drawing-mode press will create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Rectangle,
    Ellipse,
    Line,
    Polygon,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Rectangle, Tool::Ellipse, Tool::Line, Tool::Polygon];

    pub fn shape_kind(self) -> ShapeKind {
        match self {
            Tool::Rectangle => ShapeKind::Rectangle,
            Tool::Ellipse => ShapeKind::Ellipse,
            Tool::Line => ShapeKind::Line,
            Tool::Polygon => ShapeKind::Polygon,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tool::Rectangle => "▭ Rectangle",
            Tool::Ellipse => "◯ Ellipse",
            Tool::Line => "╱ Line",
            Tool::Polygon => "⬠ Polygon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Pointer presses create new shapes.
    #[default]
    Drawing,
    /// Pointer presses select and move existing shapes.
    Editing,
}

/// A press-drag-release gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// A box shape or line being dragged out from `anchor`.
    Drawing { shape: ShapeId, anchor: Pos2 },
    /// The selected shape being dragged; `last` is the previous pointer position.
    Moving { shape: ShapeId, last: Pos2 },
}

/// The polygon tool's click collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PolygonDraft {
    #[default]
    Idle,
    Collecting { points: Vec<Pos2> },
}

impl PolygonDraft {
    pub fn points(&self) -> &[Pos2] {
        match self {
            PolygonDraft::Idle => &[],
            PolygonDraft::Collecting { points } => points,
        }
    }

    pub fn is_collecting(&self) -> bool {
        matches!(self, PolygonDraft::Collecting { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub(crate) tool: Tool,
    pub(crate) mode: Mode,
    /// Style applied to newly created shapes.
    pub(crate) style: ShapeStyle,
    pub(crate) interaction: Interaction,
    pub(crate) selected: Option<ShapeId>,
    pub(crate) polygon: PolygonDraft,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(ShapeStyle::default())
    }
}

impl EditorState {
    pub fn new(style: ShapeStyle) -> Self {
        Self {
            tool: Tool::default(),
            mode: Mode::default(),
            style,
            interaction: Interaction::Idle,
            selected: None,
            polygon: PolygonDraft::Idle,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn style(&self) -> ShapeStyle {
        self.style
    }

    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    pub fn polygon(&self) -> &PolygonDraft {
        &self.polygon
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.interaction, Interaction::Idle) && !self.polygon.is_collecting()
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.interaction, Interaction::Drawing { .. })
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.interaction, Interaction::Moving { .. })
    }

    /// The shape held by the in-flight gesture, if any.
    pub(crate) fn interaction_target(&self) -> Option<ShapeId> {
        match self.interaction {
            Interaction::Idle => None,
            Interaction::Drawing { shape, .. } | Interaction::Moving { shape, .. } => Some(shape),
        }
    }
}
