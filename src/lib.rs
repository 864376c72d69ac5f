#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod geometry;
pub mod input;
pub mod palette;
pub mod panels;
pub mod renderer;
pub mod scene;
pub mod selection;
pub mod shape;
pub mod state;

pub use app::VectorApp;
pub use command::{Command, EditorAction, History};
pub use config::EditorConfig;
pub use error::{EditorError, ExportError, ShapeExportError};
pub use input::InputEvent;
pub use renderer::Renderer;
pub use scene::{Scene, ShapeId};
pub use shape::{Shape, ShapeKind, ShapeStyle};
pub use state::{EditorContext, Mode, Tool};
