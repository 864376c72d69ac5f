mod commands;
mod history;

pub use commands::Command;
pub use history::{
    ActionKind, DELETED_CAPACITY, DeletedShapes, EditorAction, HISTORY_CAPACITY, History,
    StyleProperty,
};

use crate::error::EditorError;

/// Result type for command operations
pub type CommandResult = Result<(), EditorError>;
