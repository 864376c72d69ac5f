use egui::{PointerButton, Pos2, pos2};
use vector_editor::command::Command;
use vector_editor::error::EditorError;
use vector_editor::state::{EditorContext, Tool};

const HEADER: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8"?>"#,
    "\n",
    r#"<svg width="800" height="600" xmlns="http://www.w3.org/2000/svg">"#,
    "\n",
    r#"<rect width="100%" height="100%" fill="white"/>"#,
    "\n",
);

fn drag(editor: &mut EditorContext, from: Pos2, to: Pos2) {
    editor.pointer_down(from, PointerButton::Primary, 1);
    editor.pointer_move(to);
    editor.pointer_up(to);
}

fn export(editor: &EditorContext) -> String {
    let mut out = Vec::new();
    editor.export_svg(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_empty_scene_exports_background_only() {
    let editor = EditorContext::default();
    assert_eq!(export(&editor), format!("{HEADER}</svg>\n"));
}

#[test]
fn test_shapes_export_in_scene_order() {
    let mut editor = EditorContext::default();
    drag(&mut editor, pos2(10.0, 20.0), pos2(50.0, 60.0));
    editor.select_tool(Tool::Ellipse);
    drag(&mut editor, pos2(30.0, 20.0), pos2(0.0, 0.0));
    editor.select_tool(Tool::Line);
    drag(&mut editor, pos2(5.0, 5.0), pos2(25.4, 14.6));

    let expected = [
        r##"<rect x="10" y="20" width="40" height="40" fill="#ADD8E6" stroke="#000000" stroke-width="2"/>"##,
        r##"<ellipse cx="15" cy="10" rx="15" ry="10" fill="#ADD8E6" stroke="#000000" stroke-width="2"/>"##,
        r##"<line x1="5" y1="5" x2="25" y2="15" stroke="#000000" stroke-width="2"/>"##,
    ];
    assert_eq!(
        export(&editor),
        format!("{HEADER}{}\n</svg>\n", expected.join("\n"))
    );
}

#[test]
fn test_polygon_export_uses_closed_point_list() {
    let mut editor = EditorContext::default();
    editor.select_tool(Tool::Polygon);
    for p in [pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(10.0, 10.0)] {
        editor.pointer_down(p, PointerButton::Primary, 1);
        editor.pointer_up(p);
    }
    editor.complete_polygon();

    let svg = export(&editor);
    assert!(svg.contains(
        r##"<polygon points="0,0 10,0 10,10 0,0" fill="#ADD8E6" stroke="#000000" stroke-width="2"/>"##
    ));
}

#[test]
fn test_export_to_file() {
    let mut editor = EditorContext::default();
    drag(&mut editor, pos2(10.0, 20.0), pos2(50.0, 60.0));

    let path = std::env::temp_dir().join(format!("vector_editor_{}.svg", std::process::id()));
    let report = editor.export_to_path(&path).unwrap();
    assert_eq!(report.written, 1);
    assert_eq!(report.skipped, 0);

    let written = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(written, export(&editor));
}

#[test]
fn test_unwritable_destination_reports_error() {
    let mut editor = EditorContext::default();
    drag(&mut editor, pos2(10.0, 20.0), pos2(50.0, 60.0));
    let before = editor.scene().ids().to_vec();

    let result = editor.execute(Command::Export("/nonexistent-dir/out.svg".into()));
    assert!(matches!(result, Err(EditorError::Export(_))));
    assert_eq!(editor.scene().ids(), before.as_slice());
    assert_eq!(editor.history().len(), 1);
}
