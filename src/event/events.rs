use crate::command::ActionKind;
use crate::scene::ShapeId;
use crate::selection::StyleIndicator;
use crate::shape::ShapeKind;
use crate::state::{Mode, Tool};

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    ToolChanged {
        old: Tool,
        new: Tool,
    },
    ModeChanged {
        old: Mode,
        new: Mode,
    },
    SelectionChanged {
        selected: Option<ShapeId>,
    },
    /// The fill/stroke indicator should be redrawn.
    StyleIndicatorRefresh(StyleIndicator),
    ShapeCommitted {
        id: ShapeId,
        kind: ShapeKind,
    },
    /// A press-release too small to count as a shape.
    ShapeDiscarded {
        kind: ShapeKind,
    },
    PolygonCompleted {
        id: ShapeId,
        points: usize,
    },
    Undone(ActionKind),
    Exported {
        written: usize,
    },
}
