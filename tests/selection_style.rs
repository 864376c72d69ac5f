use egui::{Color32, PointerButton, Pos2, pos2};
use vector_editor::command::{ActionKind, Command};
use vector_editor::event::{EditorEvent, EventLog};
use vector_editor::selection::StyleTarget;
use vector_editor::shape::ShapeKind;
use vector_editor::state::{EditorContext, Mode, Tool};

fn drag(editor: &mut EditorContext, from: Pos2, to: Pos2) {
    editor.pointer_down(from, PointerButton::Primary, 1);
    editor.pointer_move(to);
    editor.pointer_up(to);
}

#[test]
fn test_line_rejects_fill_change() {
    let mut editor = EditorContext::default();
    editor.select_tool(Tool::Line);
    drag(&mut editor, pos2(0.0, 0.0), pos2(50.0, 0.0));
    editor.select_mode(Mode::Editing);

    editor.execute(Command::SetFillColor(Color32::RED)).unwrap();

    let line = editor.selected_shape().unwrap();
    assert_eq!(line.fill(), None);
    assert_eq!(line.stroke(), Color32::BLACK);
    assert!(
        editor
            .history()
            .iter()
            .all(|action| action.kind() != ActionKind::ModifyFill)
    );
}

#[test]
fn test_drawing_mode_changes_only_defaults() {
    let mut editor = EditorContext::default();
    drag(&mut editor, pos2(0.0, 0.0), pos2(20.0, 20.0));
    let existing = editor.scene().ids()[0];

    editor.set_fill_color(Color32::YELLOW);
    editor.set_stroke_color(Color32::RED);

    assert_eq!(editor.state().style().fill, Color32::YELLOW);
    assert_eq!(editor.state().style().stroke, Color32::RED);
    assert_ne!(editor.scene().get(existing).unwrap().fill(), Some(Color32::YELLOW));
    assert_eq!(editor.history().len(), 1);

    drag(&mut editor, pos2(40.0, 40.0), pos2(60.0, 60.0));
    let shape = editor.selected_shape().unwrap();
    assert_eq!(shape.fill(), Some(Color32::YELLOW));
    assert_eq!(shape.stroke(), Color32::RED);
}

#[test]
fn test_editing_without_selection_changes_defaults() {
    let mut editor = EditorContext::default();
    editor.select_mode(Mode::Editing);
    editor.set_fill_color(Color32::GOLD);

    assert_eq!(editor.state().style().fill, Color32::GOLD);
    assert!(editor.history().is_empty());
    assert_eq!(editor.style_indicator().target, StyleTarget::Defaults);
}

#[test]
fn test_select_shape_is_idempotent() {
    let mut editor = EditorContext::default();
    drag(&mut editor, pos2(0.0, 0.0), pos2(20.0, 20.0));
    let id = editor.selected().unwrap();

    let log = EventLog::new();
    editor.event_bus.subscribe(Box::new(log.clone()));
    editor.select_shape(id);
    assert!(log.take().is_empty());

    editor.deselect_shape();
    editor.deselect_shape();
    let events = log.take();
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, EditorEvent::SelectionChanged { .. }))
            .count(),
        1
    );
}

#[test]
fn test_events_follow_the_editing_session() {
    let mut editor = EditorContext::default();
    let log = EventLog::new();
    editor.event_bus.subscribe(Box::new(log.clone()));

    editor.select_tool(Tool::Ellipse);
    drag(&mut editor, pos2(0.0, 0.0), pos2(30.0, 20.0));
    let id = editor.selected().unwrap();
    editor.select_mode(Mode::Editing);
    editor.undo();

    let events = log.take();
    assert!(events.contains(&EditorEvent::ToolChanged {
        old: Tool::Rectangle,
        new: Tool::Ellipse,
    }));
    assert!(events.contains(&EditorEvent::SelectionChanged { selected: Some(id) }));
    assert!(events.contains(&EditorEvent::ShapeCommitted {
        id,
        kind: ShapeKind::Ellipse,
    }));
    assert!(events.contains(&EditorEvent::ModeChanged {
        old: Mode::Drawing,
        new: Mode::Editing,
    }));
    assert_eq!(events.last(), Some(&EditorEvent::Undone(ActionKind::Create)));
}

#[test]
fn test_indicator_tracks_selection_in_editing_mode() {
    let mut editor = EditorContext::default();
    drag(&mut editor, pos2(0.0, 0.0), pos2(20.0, 20.0));
    assert_eq!(editor.style_indicator().target, StyleTarget::Defaults);

    editor.select_mode(Mode::Editing);
    assert_eq!(editor.style_indicator().target, StyleTarget::Selection);
}

#[test]
fn test_stroke_width_rejects_invalid_values() {
    let mut editor = EditorContext::default();
    editor.set_stroke_width(4.0);
    editor.set_stroke_width(-1.0);
    editor.set_stroke_width(f32::NAN);
    assert_eq!(editor.state().style().stroke_width, 4.0);
}
