use serde::{Deserialize, Serialize};

use crate::command::{DELETED_CAPACITY, HISTORY_CAPACITY};
use crate::shape::ShapeStyle;

/// Editor settings. Persisted by the app shell between runs; the scene
/// itself is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct EditorConfig {
    /// Canvas size written into the SVG header.
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Style of new shapes at session start. Not persisted: every session
    /// starts from the stock style.
    #[serde(skip)]
    pub default_style: ShapeStyle,
    pub history_capacity: usize,
    pub deleted_capacity: usize,
    /// Maximum delay between two presses of a double-click, in seconds.
    pub double_click_window: f64,
    /// Maximum pointer travel between two presses of a double-click.
    pub double_click_distance: f32,
    /// Minimum grab distance around lines and polygon edges.
    pub hit_tolerance: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            default_style: ShapeStyle::default(),
            history_capacity: HISTORY_CAPACITY,
            deleted_capacity: DELETED_CAPACITY,
            double_click_window: 0.3,
            double_click_distance: 4.0,
            hit_tolerance: 4.0,
        }
    }
}
