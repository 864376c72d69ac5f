use std::path::PathBuf;

use egui::Color32;

use super::CommandResult;
use crate::state::{EditorContext, Mode, Tool};

/// Discrete commands issued by the UI shell (buttons, menus).
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SelectTool(Tool),
    SelectMode(Mode),
    SetFillColor(Color32),
    SetStrokeColor(Color32),
    /// Stroke width of new shapes.
    SetStrokeWidth(f32),
    Undo,
    RestoreLastDeleted,
    DeleteSelected,
    /// Write the scene as SVG to the given file.
    Export(PathBuf),
}

impl Command {
    /// Execute the command against the editor
    pub fn execute(self, ctx: &mut EditorContext) -> CommandResult {
        match self {
            Command::SelectTool(tool) => ctx.select_tool(tool),
            Command::SelectMode(mode) => ctx.select_mode(mode),
            Command::SetFillColor(color) => ctx.set_fill_color(color),
            Command::SetStrokeColor(color) => ctx.set_stroke_color(color),
            Command::SetStrokeWidth(width) => ctx.set_stroke_width(width),
            Command::Undo => ctx.undo(),
            Command::RestoreLastDeleted => ctx.restore_last_deleted(),
            Command::DeleteSelected => ctx.delete_selected(),
            Command::Export(path) => {
                ctx.export_to_path(&path)?;
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::SelectTool(_) => "Select tool",
            Command::SelectMode(_) => "Select mode",
            Command::SetFillColor(_) => "Set fill colour",
            Command::SetStrokeColor(_) => "Set stroke colour",
            Command::SetStrokeWidth(_) => "Set stroke width",
            Command::Undo => "Undo",
            Command::RestoreLastDeleted => "Restore last deleted",
            Command::DeleteSelected => "Delete selected",
            Command::Export(_) => "Export SVG",
        }
    }
}
