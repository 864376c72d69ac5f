//! The editing engine's context: scene, history, session state and event
//! bus, threaded through every pointer and command handler.
//!
//! All mutation happens synchronously inside one handler call, so export
//! never observes a half-applied edit.
use std::io::Write;
use std::path::Path;

use egui::{PointerButton, Pos2};
use log::{debug, info};

use super::editor_state::{EditorState, Interaction, Mode, PolygonDraft, Tool};
use crate::command::{Command, CommandResult, DeletedShapes, EditorAction, History};
use crate::config::EditorConfig;
use crate::error::ExportError;
use crate::event::{EditorEvent, EventBus};
use crate::export::{self, ExportReport};
use crate::geometry::crosses_path;
use crate::input::InputEvent;
use crate::scene::{Scene, ShapeId};
use crate::shape::Shape;

#[derive(Debug)]
pub struct EditorContext {
    pub(crate) state: EditorState,
    pub(crate) scene: Scene,
    pub(crate) history: History,
    pub(crate) deleted: DeletedShapes,
    pub(crate) config: EditorConfig,
    /// The event bus for broadcasting editor events
    pub event_bus: EventBus,
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorContext {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            state: EditorState::new(config.default_style),
            scene: Scene::new(),
            history: History::with_capacity(config.history_capacity),
            deleted: DeletedShapes::with_capacity(config.deleted_capacity),
            config,
            event_bus: EventBus::new(),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn deleted(&self) -> &DeletedShapes {
        &self.deleted
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn selected(&self) -> Option<ShapeId> {
        self.state.selected
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.state.selected.and_then(|id| self.scene.get(id))
    }

    pub fn execute(&mut self, command: Command) -> CommandResult {
        debug!("Executing command: {}", command.name());
        command.execute(self)
    }

    /// Feeds one canvas-local pointer event into the state machine.
    pub fn handle_input(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown {
                pos,
                button,
                click_count,
            } => self.pointer_down(pos, button, click_count),
            InputEvent::PointerMove { pos } => self.pointer_move(pos),
            InputEvent::PointerUp { pos, button } => {
                if button == PointerButton::Primary {
                    self.pointer_up(pos);
                }
            }
        }
    }

    pub fn pointer_down(&mut self, pos: Pos2, button: PointerButton, click_count: u32) {
        if button != PointerButton::Primary {
            return;
        }
        // A release we never saw (pointer left the window) still ends the gesture.
        if !matches!(self.state.interaction, Interaction::Idle) {
            self.pointer_up(pos);
        }

        match self.state.mode {
            Mode::Editing => match self.scene.hit_test(pos, self.config.hit_tolerance) {
                Some(id) => {
                    self.select_shape(id);
                    self.state.interaction = Interaction::Moving {
                        shape: id,
                        last: pos,
                    };
                }
                None => self.deselect_shape(),
            },
            Mode::Drawing => match self.state.tool {
                Tool::Polygon => self.polygon_click(pos, click_count),
                tool => {
                    self.deselect_shape();
                    self.begin_shape(tool, pos);
                }
            },
        }
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        match &mut self.state.interaction {
            Interaction::Idle => {}
            Interaction::Drawing { shape, anchor } => {
                if let Some(shape) = self.scene.get_mut(*shape) {
                    shape.resize_to(*anchor, pos);
                }
            }
            Interaction::Moving { shape, last } => {
                let delta = pos - *last;
                *last = pos;
                if let Some(shape) = self.scene.get_mut(*shape) {
                    shape.translate(delta);
                }
            }
        }
    }

    pub fn pointer_up(&mut self, _pos: Pos2) {
        match std::mem::take(&mut self.state.interaction) {
            Interaction::Idle => {}
            Interaction::Drawing { shape, .. } => self.finish_shape(shape),
            Interaction::Moving { .. } => {
                if let Some(target) = self.state.selected {
                    self.record(EditorAction::Move { target });
                }
            }
        }
    }

    fn begin_shape(&mut self, tool: Tool, anchor: Pos2) {
        let style = self.state.style;
        let shape = match tool {
            Tool::Rectangle => Shape::rectangle_at(anchor, style),
            Tool::Ellipse => Shape::ellipse_at(anchor, style),
            Tool::Line => Shape::line_at(anchor, style),
            Tool::Polygon => return,
        };
        let id = self.scene.insert(shape);
        self.state.interaction = Interaction::Drawing { shape: id, anchor };
    }

    fn finish_shape(&mut self, id: ShapeId) {
        let Some(shape) = self.scene.get(id) else {
            return;
        };
        let kind = shape.kind();
        if shape.exceeds_click_threshold() {
            info!("Created {} {}", kind, id);
            self.select_shape(id);
            self.record(EditorAction::Create { target: id });
            self.event_bus.emit(EditorEvent::ShapeCommitted { id, kind });
        } else {
            debug!("Discarding {} {}: too small", kind, id);
            self.scene.discard(id);
            self.event_bus.emit(EditorEvent::ShapeDiscarded { kind });
        }
    }

    fn polygon_click(&mut self, pos: Pos2, click_count: u32) {
        if click_count == 2 {
            self.complete_polygon();
            return;
        }
        match &mut self.state.polygon {
            PolygonDraft::Idle => {
                debug!("Starting polygon at {:?}", pos);
                self.state.polygon = PolygonDraft::Collecting { points: vec![pos] };
            }
            PolygonDraft::Collecting { points } => {
                if crosses_path(points, pos) {
                    debug!("Segment to {:?} crosses the outline, closing polygon", pos);
                    self.complete_polygon();
                } else {
                    points.push(pos);
                }
            }
        }
    }

    /// Turns the collected points into a closed polygon. Does nothing while
    /// fewer than three points are collected.
    pub fn complete_polygon(&mut self) {
        let points = match &mut self.state.polygon {
            PolygonDraft::Collecting { points } if points.len() >= 3 => std::mem::take(points),
            _ => return,
        };
        self.state.polygon = PolygonDraft::Idle;

        let mut points = points;
        if points.first() != points.last() {
            if let Some(&first) = points.first() {
                points.push(first);
            }
        }
        let count = points.len();
        let id = self.scene.insert(Shape::polygon(points, self.state.style));
        info!("Completed polygon {} with {} points", id, count);

        self.select_shape(id);
        self.record(EditorAction::Create { target: id });
        self.event_bus
            .emit(EditorEvent::PolygonCompleted { id, points: count });
    }

    pub fn select_tool(&mut self, tool: Tool) {
        let old = self.state.tool;
        if old == tool {
            return;
        }
        if self.state.polygon.is_collecting() {
            debug!("Dropping unfinished polygon");
            self.state.polygon = PolygonDraft::Idle;
        }
        self.state.tool = tool;
        debug!("Tool changed: {:?} -> {:?}", old, tool);
        self.event_bus.emit(EditorEvent::ToolChanged { old, new: tool });
    }

    pub fn select_mode(&mut self, mode: Mode) {
        let old = self.state.mode;
        self.state.mode = mode;
        if mode == Mode::Drawing {
            self.deselect_shape();
        }
        if old != mode {
            debug!("Mode changed: {:?} -> {:?}", old, mode);
            self.event_bus.emit(EditorEvent::ModeChanged { old, new: mode });
        }
        self.refresh_style_indicator();
    }

    /// Pushes an action onto the history, releasing shapes that fell off the
    /// bottom of the stack.
    pub(crate) fn record(&mut self, action: EditorAction) {
        let evicted = self.history.record(action);
        if !evicted.is_empty() {
            debug!("History full, dropped {} oldest action(s)", evicted.len());
            self.release_unreferenced();
        }
    }

    /// Reverts the most recent action. Does nothing when the history is empty.
    pub fn undo(&mut self) {
        let Some(action) = self.history.pop() else {
            return;
        };
        let kind = action.kind();
        info!("Undo {} on {}", action.label(), action.target());

        match action {
            EditorAction::Create { target } => {
                self.scene.detach(target);
                if self.state.selected == Some(target) {
                    self.deselect_shape();
                }
            }
            EditorAction::Delete { target } => {
                self.scene.attach(target);
                if self.scene.is_live(target) {
                    self.select_shape(target);
                }
            }
            EditorAction::Move { .. } => self.deselect_shape(),
            EditorAction::ModifyFill { target, old, .. } => {
                if let Some(shape) = self.scene.get_mut(target) {
                    shape.set_fill(old);
                }
                self.state.style.fill = old;
                self.refresh_style_indicator();
            }
            EditorAction::ModifyStroke { target, old, .. } => {
                if let Some(shape) = self.scene.get_mut(target) {
                    shape.set_stroke(old);
                }
                self.state.style.stroke = old;
                self.refresh_style_indicator();
            }
        }

        self.release_unreferenced();
        self.event_bus.emit(EditorEvent::Undone(kind));
    }

    /// Removes the selected shape, remembering it for undo and for
    /// [`EditorContext::restore_last_deleted`].
    pub fn delete_selected(&mut self) {
        let Some(id) = self.state.selected else {
            return;
        };
        if self.state.interaction_target() == Some(id) {
            self.state.interaction = Interaction::Idle;
        }
        info!("Deleting {}", id);
        self.record(EditorAction::Delete { target: id });
        if let Some(evicted) = self.deleted.push(id) {
            debug!("Deleted buffer full, forgetting {}", evicted);
        }
        self.scene.detach(id);
        self.deselect_shape();
        self.release_unreferenced();
    }

    /// Puts the most recently deleted shape back on top of the scene with
    /// the current default stroke, selects it and records a create.
    pub fn restore_last_deleted(&mut self) {
        let Some(id) = self.deleted.pop() else {
            return;
        };
        let style = self.state.style;
        let Some(shape) = self.scene.get_mut(id) else {
            return;
        };
        shape.set_stroke(style.stroke);
        shape.set_stroke_width(style.stroke_width);
        self.scene.attach(id);
        info!("Restored {}", id);

        self.select_shape(id);
        self.record(EditorAction::Create { target: id });
    }

    /// Writes the scene as SVG to `out`.
    pub fn export_svg<W: Write>(&self, out: &mut W) -> Result<ExportReport, ExportError> {
        let report = export::write_svg(
            &self.scene,
            self.config.canvas_width,
            self.config.canvas_height,
            out,
        )?;
        self.event_bus.emit(EditorEvent::Exported {
            written: report.written,
        });
        Ok(report)
    }

    /// Writes the scene as SVG to the file at `path`.
    pub fn export_to_path(&self, path: &Path) -> Result<ExportReport, ExportError> {
        let report = export::export_to_path(
            &self.scene,
            self.config.canvas_width,
            self.config.canvas_height,
            path,
        )
        .inspect_err(|err| log::error!("Export to {} failed: {}", path.display(), err))?;
        self.event_bus.emit(EditorEvent::Exported {
            written: report.written,
        });
        Ok(report)
    }

    /// Frees detached shapes nothing refers to any more.
    fn release_unreferenced(&mut self) {
        let history = &self.history;
        let deleted = &self.deleted;
        let in_flight = self.state.interaction_target();
        self.scene.retain_detached(|id| {
            history.references(id) || deleted.contains(id) || in_flight == Some(id)
        });
    }
}
