use egui::{Context, PointerButton, Pos2, Rect};

use super::{ClickCounter, InputEvent};
use crate::config::EditorConfig;

/// Converts raw egui pointer input into canvas-local [`InputEvent`]s.
#[derive(Debug)]
pub struct InputHandler {
    clicks: ClickCounter,
    /// Set while a press that started on the canvas is held.
    pressed_on_canvas: bool,
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            clicks: ClickCounter::new(config.double_click_window, config.double_click_distance),
            pressed_on_canvas: false,
            last_pointer_pos: None,
        }
    }

    /// Canvas-local position of the pointer, if it is hovering.
    pub fn hover_pos(&self) -> Option<Pos2> {
        self.last_pointer_pos
    }

    /// Collects this frame's pointer events that concern the canvas.
    ///
    /// Presses outside `canvas_rect` are ignored; moves and releases are
    /// forwarded while a press that began on the canvas is held.
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        let to_local = |pos: Pos2| (pos - canvas_rect.min).to_pos2();
        let mut events = Vec::new();

        ctx.input(|input| {
            let time = input.time;
            self.last_pointer_pos = input
                .pointer
                .hover_pos()
                .filter(|pos| canvas_rect.contains(*pos))
                .map(to_local);

            for event in &input.events {
                match event {
                    egui::Event::PointerMoved(pos) => {
                        if self.pressed_on_canvas || canvas_rect.contains(*pos) {
                            events.push(InputEvent::PointerMove { pos: to_local(*pos) });
                        }
                    }
                    egui::Event::PointerButton {
                        pos,
                        button,
                        pressed: true,
                        ..
                    } => {
                        if !canvas_rect.contains(*pos) {
                            continue;
                        }
                        let local = to_local(*pos);
                        let click_count = if *button == PointerButton::Primary {
                            self.pressed_on_canvas = true;
                            self.clicks.register(local, time)
                        } else {
                            1
                        };
                        events.push(InputEvent::PointerDown {
                            pos: local,
                            button: *button,
                            click_count,
                        });
                    }
                    egui::Event::PointerButton {
                        pos,
                        button,
                        pressed: false,
                        ..
                    } => {
                        if *button == PointerButton::Primary && self.pressed_on_canvas {
                            self.pressed_on_canvas = false;
                            events.push(InputEvent::PointerUp {
                                pos: to_local(*pos),
                                button: *button,
                            });
                        }
                    }
                    egui::Event::PointerGone => {
                        self.last_pointer_pos = None;
                    }
                    _ => {}
                }
            }
        });

        events
    }
}
