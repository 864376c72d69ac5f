//! Single-shape selection and routing of fill/stroke changes.
//!
//! In Editing mode with a shape selected, colour commands restyle that shape
//! and are recorded for undo. Otherwise they change the defaults used for
//! new shapes.

use egui::Color32;
use log::debug;

use crate::command::EditorAction;
use crate::event::EditorEvent;
use crate::scene::ShapeId;
use crate::state::{EditorContext, Mode};

/// What the colour commands currently act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleTarget {
    Selection,
    Defaults,
}

/// Snapshot shown by the fill/stroke indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleIndicator {
    pub fill: Color32,
    pub stroke: Color32,
    pub target: StyleTarget,
}

impl EditorContext {
    /// Selects `id`, replacing any previous selection.
    pub fn select_shape(&mut self, id: ShapeId) {
        if self.state.selected == Some(id) {
            return;
        }
        self.deselect_shape();
        self.state.selected = Some(id);
        self.event_bus
            .emit(EditorEvent::SelectionChanged { selected: Some(id) });
        self.refresh_style_indicator();
    }

    pub fn deselect_shape(&mut self) {
        if self.state.selected.take().is_some() {
            self.event_bus
                .emit(EditorEvent::SelectionChanged { selected: None });
            self.refresh_style_indicator();
        }
    }

    pub fn style_indicator(&self) -> StyleIndicator {
        let target = if self.targets_selection() {
            StyleTarget::Selection
        } else {
            StyleTarget::Defaults
        };
        StyleIndicator {
            fill: self.state.style.fill,
            stroke: self.state.style.stroke,
            target,
        }
    }

    pub(crate) fn refresh_style_indicator(&self) {
        self.event_bus
            .emit(EditorEvent::StyleIndicatorRefresh(self.style_indicator()));
    }

    fn targets_selection(&self) -> bool {
        self.state.mode == Mode::Editing && self.state.selected.is_some()
    }

    pub fn set_fill_color(&mut self, color: Color32) {
        if self.targets_selection() {
            let Some(target) = self.state.selected else {
                return;
            };
            let Some(shape) = self.scene.get_mut(target) else {
                return;
            };
            match shape.set_fill(color) {
                Some(old) => self.record(EditorAction::ModifyFill {
                    target,
                    old,
                    new: color,
                }),
                None => debug!("Ignoring fill change on line {}", target),
            }
            return;
        }

        self.state.style.fill = color;
        self.refresh_style_indicator();
    }

    pub fn set_stroke_color(&mut self, color: Color32) {
        if self.targets_selection() {
            let Some(target) = self.state.selected else {
                return;
            };
            let Some(shape) = self.scene.get_mut(target) else {
                return;
            };
            let old = shape.set_stroke(color);
            self.record(EditorAction::ModifyStroke {
                target,
                old,
                new: color,
            });
        }

        self.state.style.stroke = color;
        self.refresh_style_indicator();
    }

    /// Stroke width of shapes created from now on.
    pub fn set_stroke_width(&mut self, width: f32) {
        if width.is_finite() && width >= 0.0 {
            self.state.style.stroke_width = width;
        }
    }
}
