use crate::VectorApp;

/// The drawing canvas. Pointer input over it drives the editor.
pub fn central_panel(app: &mut VectorApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let config = app.editor.config();
        let size = egui::vec2(config.canvas_width, config.canvas_height);

        egui::ScrollArea::both().show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
            let canvas_rect = response.rect;

            for event in app.input.process_input(ctx, canvas_rect) {
                app.editor.handle_input(&event);
            }

            app.renderer
                .render(&painter, canvas_rect, &app.editor, app.input.hover_pos());
        });
    });
}
