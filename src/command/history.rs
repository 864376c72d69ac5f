use std::collections::VecDeque;

use egui::Color32;

use crate::scene::ShapeId;

/// Maximum number of actions kept on the undo stack.
pub const HISTORY_CAPACITY: usize = 5;
/// Maximum number of shapes kept for "restore last deleted".
pub const DELETED_CAPACITY: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Create,
    Delete,
    Move,
    ModifyFill,
    ModifyStroke,
}

/// The style attribute an action changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleProperty {
    FillColor,
    StrokeColor,
}

/// One completed, undoable edit. Records hold the shape handle and copies of
/// the colours involved, never the shape itself.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    Create { target: ShapeId },
    Delete { target: ShapeId },
    /// The pre-move position is not captured; undoing a move only deselects.
    Move { target: ShapeId },
    ModifyFill { target: ShapeId, old: Color32, new: Color32 },
    ModifyStroke { target: ShapeId, old: Color32, new: Color32 },
}

impl EditorAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            EditorAction::Create { .. } => ActionKind::Create,
            EditorAction::Delete { .. } => ActionKind::Delete,
            EditorAction::Move { .. } => ActionKind::Move,
            EditorAction::ModifyFill { .. } => ActionKind::ModifyFill,
            EditorAction::ModifyStroke { .. } => ActionKind::ModifyStroke,
        }
    }

    pub fn target(&self) -> ShapeId {
        match self {
            EditorAction::Create { target }
            | EditorAction::Delete { target }
            | EditorAction::Move { target }
            | EditorAction::ModifyFill { target, .. }
            | EditorAction::ModifyStroke { target, .. } => *target,
        }
    }

    pub fn old_value(&self) -> Option<Color32> {
        match self {
            EditorAction::ModifyFill { old, .. } | EditorAction::ModifyStroke { old, .. } => {
                Some(*old)
            }
            _ => None,
        }
    }

    pub fn new_value(&self) -> Option<Color32> {
        match self {
            EditorAction::ModifyFill { new, .. } | EditorAction::ModifyStroke { new, .. } => {
                Some(*new)
            }
            _ => None,
        }
    }

    pub fn affected_property(&self) -> Option<StyleProperty> {
        match self {
            EditorAction::ModifyFill { .. } => Some(StyleProperty::FillColor),
            EditorAction::ModifyStroke { .. } => Some(StyleProperty::StrokeColor),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self.kind() {
            ActionKind::Create => "Create",
            ActionKind::Delete => "Delete",
            ActionKind::Move => "Move",
            ActionKind::ModifyFill => "Modify fill",
            ActionKind::ModifyStroke => "Modify stroke",
        }
    }
}

/// Bounded undo stack. Once full, recording evicts the oldest action.
#[derive(Debug)]
pub struct History {
    /// Oldest at the front, most recent at the back.
    actions: VecDeque<EditorAction>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            actions: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Pushes an action, returning whatever fell off the bottom of the stack.
    pub fn record(&mut self, action: EditorAction) -> Vec<EditorAction> {
        self.actions.push_back(action);
        let excess = self.actions.len().saturating_sub(self.capacity);
        self.actions.drain(..excess).collect()
    }

    /// Pops the most recent action, if any.
    pub fn pop(&mut self) -> Option<EditorAction> {
        self.actions.pop_back()
    }

    pub fn can_undo(&self) -> bool {
        !self.actions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Actions from the most recent to the oldest.
    pub fn iter(&self) -> impl Iterator<Item = &EditorAction> {
        self.actions.iter().rev()
    }

    pub fn references(&self, id: ShapeId) -> bool {
        self.actions.iter().any(|action| action.target() == id)
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }
}

/// Shapes removed by explicit delete commands, independent of the undo stack.
#[derive(Debug)]
pub struct DeletedShapes {
    shapes: VecDeque<ShapeId>,
    capacity: usize,
}

impl Default for DeletedShapes {
    fn default() -> Self {
        Self::with_capacity(DELETED_CAPACITY)
    }
}

impl DeletedShapes {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            shapes: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Remembers a deleted shape, evicting the oldest one beyond capacity so
    /// the most recent deletions always stay restorable.
    pub fn push(&mut self, id: ShapeId) -> Option<ShapeId> {
        self.shapes.push_back(id);
        if self.shapes.len() > self.capacity {
            self.shapes.pop_front()
        } else {
            None
        }
    }

    /// The most recently deleted shape.
    pub fn pop(&mut self) -> Option<ShapeId> {
        self.shapes.pop_back()
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;
    use crate::shape::{Shape, ShapeStyle};
    use egui::pos2;

    fn ids(n: usize) -> Vec<ShapeId> {
        let mut scene = Scene::new();
        (0..n)
            .map(|_| scene.insert(Shape::line_at(pos2(0.0, 0.0), ShapeStyle::default())))
            .collect()
    }

    #[test]
    fn keeps_only_the_most_recent_five() {
        let ids = ids(7);
        let mut history = History::new();
        let mut evicted = Vec::new();
        for id in &ids {
            evicted.extend(history.record(EditorAction::Create { target: *id }));
        }
        assert_eq!(history.len(), 5);
        assert_eq!(
            evicted,
            vec![
                EditorAction::Create { target: ids[0] },
                EditorAction::Create { target: ids[1] },
            ]
        );
        let popped: Vec<_> = std::iter::from_fn(|| history.pop()).map(|a| a.target()).collect();
        assert_eq!(popped, vec![ids[6], ids[5], ids[4], ids[3], ids[2]]);
        assert!(history.pop().is_none());
    }

    #[test]
    fn style_actions_expose_their_values() {
        let id = ids(1)[0];
        let action = EditorAction::ModifyFill {
            target: id,
            old: Color32::RED,
            new: Color32::BLUE,
        };
        assert_eq!(action.kind(), ActionKind::ModifyFill);
        assert_eq!(action.old_value(), Some(Color32::RED));
        assert_eq!(action.new_value(), Some(Color32::BLUE));
        assert_eq!(action.affected_property(), Some(StyleProperty::FillColor));
        assert_eq!(EditorAction::Move { target: id }.affected_property(), None);
    }

    #[test]
    fn deleted_buffer_pops_latest_and_evicts_oldest() {
        let ids = ids(6);
        let mut deleted = DeletedShapes::default();
        for id in &ids[..5] {
            assert_eq!(deleted.push(*id), None);
        }
        assert_eq!(deleted.push(ids[5]), Some(ids[0]));
        assert_eq!(deleted.pop(), Some(ids[5]));
        assert_eq!(deleted.len(), 4);
    }
}
