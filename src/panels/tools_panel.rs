use std::path::PathBuf;

use egui::{Color32, RichText};

use crate::VectorApp;
use crate::command::Command;
use crate::palette::{FILL_COLORS, STROKE_COLORS, contrast_color};
use crate::selection::StyleTarget;
use crate::state::{Mode, Tool};

pub fn tools_panel(app: &mut VectorApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Tools");

                let current_tool = app.editor.state().tool();
                for tool in Tool::ALL {
                    if ui.selectable_label(current_tool == tool, tool.label()).clicked() {
                        log::info!("Tool selected from UI: {:?}", tool);
                        app.execute(Command::SelectTool(tool));
                    }
                }
                ui.separator();

                let mode = app.editor.state().mode();
                ui.horizontal(|ui| {
                    if ui.radio(mode == Mode::Drawing, "Drawing").clicked() {
                        app.execute(Command::SelectMode(Mode::Drawing));
                    }
                    if ui.radio(mode == Mode::Editing, "Editing").clicked() {
                        app.execute(Command::SelectMode(Mode::Editing));
                    }
                });
                ui.separator();

                style_section(app, ui);
                ui.separator();

                history_section(app, ui);
                ui.separator();

                ui.label("Export to:");
                ui.text_edit_singleline(&mut app.export_path);
                if ui.button("Export SVG").clicked() {
                    let path = PathBuf::from(app.export_path.trim());
                    app.execute(Command::Export(path));
                }

                if !app.status.is_empty() {
                    ui.separator();
                    ui.label(app.status.as_str());
                }
            });
        });
}

fn style_section(app: &mut VectorApp, ui: &mut egui::Ui) {
    let indicator = app.editor.style_indicator();
    ui.horizontal(|ui| {
        swatch(ui, indicator.fill, "Fill");
        swatch(ui, indicator.stroke, "Stroke");
        ui.label(match indicator.target {
            StyleTarget::Selection => "selected shape",
            StyleTarget::Defaults => "new shapes",
        });
    });

    ui.label("Fill");
    if let Some(color) = palette_grid(ui, "fill_palette", &FILL_COLORS) {
        app.execute(Command::SetFillColor(color));
    }

    ui.label("Stroke");
    if let Some(color) = palette_grid(ui, "stroke_palette", &STROKE_COLORS) {
        app.execute(Command::SetStrokeColor(color));
    }

    let mut width = app.editor.state().style().stroke_width;
    ui.horizontal(|ui| {
        ui.label("Stroke width:");
        if ui
            .add(egui::DragValue::new(&mut width).range(0.0..=50.0).speed(0.1))
            .changed()
        {
            app.execute(Command::SetStrokeWidth(width));
        }
    });
}

fn history_section(app: &mut VectorApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        let can_undo = app.editor.history().can_undo();
        let can_restore = !app.editor.deleted().is_empty();
        let has_selection = app.editor.selected().is_some();

        if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
            app.execute(Command::Undo);
        }
        if ui
            .add_enabled(can_restore, egui::Button::new("Restore"))
            .clicked()
        {
            app.execute(Command::RestoreLastDeleted);
        }
        if ui
            .add_enabled(has_selection, egui::Button::new("Delete"))
            .clicked()
        {
            app.execute(Command::DeleteSelected);
        }
    });

    let history = app.editor.history();
    ui.label(format!(
        "Undo stack: {}/{}",
        history.len(),
        history.capacity()
    ));
    egui::Grid::new("history_grid")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            for action in history.iter() {
                ui.label(action.label());
                ui.label(action.target().to_string());
                ui.end_row();
            }
        });
}

fn swatch(ui: &mut egui::Ui, color: Color32, label: &str) {
    let text = RichText::new(label).color(contrast_color(color));
    ui.add(egui::Button::new(text).fill(color).sense(egui::Sense::hover()));
}

/// Draws a palette as a grid of named swatches and returns the clicked colour.
fn palette_grid(ui: &mut egui::Ui, id: &str, colors: &[(&str, Color32)]) -> Option<Color32> {
    let mut picked = None;
    egui::Grid::new(id).num_columns(3).show(ui, |ui| {
        for (i, (name, color)) in colors.iter().enumerate() {
            let text = RichText::new(*name).color(contrast_color(*color));
            if ui.add(egui::Button::new(text).fill(*color)).clicked() {
                picked = Some(*color);
            }
            if i % 3 == 2 {
                ui.end_row();
            }
        }
    });
    picked
}
