//! Pointer input, in canvas-local coordinates.

mod clicks;
mod handler;

pub use clicks::ClickCounter;
pub use handler::InputHandler;

use egui::{PointerButton, Pos2};

/// A pointer event delivered to the editing engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown {
        pos: Pos2,
        button: PointerButton,
        /// 1 for a single click, 2 for the second press of a double-click.
        click_count: u32,
    },
    PointerMove {
        pos: Pos2,
    },
    PointerUp {
        pos: Pos2,
        button: PointerButton,
    },
}

impl InputEvent {
    pub fn pos(&self) -> Pos2 {
        match self {
            InputEvent::PointerDown { pos, .. }
            | InputEvent::PointerMove { pos }
            | InputEvent::PointerUp { pos, .. } => *pos,
        }
    }
}
