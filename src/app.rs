use crate::command::Command;
use crate::config::EditorConfig;
use crate::event::{EditorEvent, EventLog};
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::state::EditorContext;

/// The desktop shell around [`EditorContext`]. Only the editor
/// configuration survives a restart; the drawing does not.
#[derive(Debug)]
pub struct VectorApp {
    pub(crate) editor: EditorContext,
    pub(crate) input: InputHandler,
    pub(crate) renderer: Renderer,
    pub(crate) export_path: String,
    pub(crate) status: String,
    events: EventLog,
}

impl Default for VectorApp {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl VectorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = cc
            .storage
            .and_then(|storage| eframe::get_value::<EditorConfig>(storage, eframe::APP_KEY))
            .unwrap_or_default();
        Self::with_config(config)
    }

    pub fn with_config(config: EditorConfig) -> Self {
        let input = InputHandler::new(&config);
        let editor = EditorContext::new(config);
        let events = EventLog::new();
        editor.event_bus.subscribe(Box::new(events.clone()));
        Self {
            editor,
            input,
            renderer: Renderer::new(),
            export_path: "drawing.svg".to_owned(),
            status: String::new(),
            events,
        }
    }

    pub fn editor(&self) -> &EditorContext {
        &self.editor
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Runs a command, reporting failures in the status line.
    pub fn execute(&mut self, command: Command) {
        if let Err(err) = self.editor.execute(command) {
            log::error!("Command failed: {}", err);
            self.status = err.to_string();
        }
    }

    fn update_status(&mut self) {
        for event in self.events.take() {
            match event {
                EditorEvent::Exported { written } => {
                    self.status = format!("Exported {} shape(s) to {}", written, self.export_path);
                }
                EditorEvent::ShapeCommitted { id, kind } => {
                    self.status = format!("Created {} {}", kind, id);
                }
                EditorEvent::PolygonCompleted { id, points } => {
                    self.status = format!("Created polygon {} ({} points)", id, points);
                }
                EditorEvent::Undone(kind) => {
                    self.status = format!("Undid {:?}", kind);
                }
                _ => {}
            }
        }
    }
}

impl eframe::App for VectorApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.editor.config());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
        self.update_status();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    use eframe::App as _;
    use egui::Color32;

    use crate::shape::ShapeStyle;

    #[derive(Default)]
    struct MemoryStorage(HashMap<String, String>);

    impl eframe::Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.0.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn restart_starts_from_stock_style() {
        let mut app = VectorApp::with_config(EditorConfig {
            hit_tolerance: 6.0,
            ..EditorConfig::default()
        });
        app.execute(Command::SetFillColor(Color32::RED));
        app.execute(Command::SetStrokeWidth(9.0));

        let mut storage = MemoryStorage::default();
        app.save(&mut storage);

        let config: EditorConfig =
            eframe::get_value(&storage, eframe::APP_KEY).expect("config was saved");
        assert_eq!(config.hit_tolerance, 6.0);
        assert_eq!(config.default_style, ShapeStyle::default());

        let restarted = VectorApp::with_config(config);
        assert_eq!(restarted.editor().state().style(), ShapeStyle::default());
    }

    #[test]
    fn failed_export_is_reported_in_status() {
        let mut app = VectorApp::default();
        app.execute(Command::Export(PathBuf::from("/nonexistent-dir/out.svg")));
        assert!(app.status().starts_with("Failed to write SVG"));
    }

    #[test]
    fn events_update_status() {
        let mut app = VectorApp::default();
        app.editor
            .pointer_down(egui::pos2(1.0, 1.0), egui::PointerButton::Primary, 1);
        app.editor.pointer_move(egui::pos2(20.0, 20.0));
        app.editor.pointer_up(egui::pos2(20.0, 20.0));
        app.update_status();
        assert!(app.status().starts_with("Created rectangle"));
    }
}
