use std::path::PathBuf;

use crate::input::InputHandler;
use crate::tools::{Tool, ToolKind, ToolType};

/// Actions that discard the current drawing and therefore check for
/// unsaved changes first
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileAction {
    New,
    /// Ask for a file, then open it
    Open,
    /// Open a known file, e.g. one dropped on the window
    OpenPath(PathBuf),
    Exit,
}

/// Answer to the unsaved-changes prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsavedChoice {
    Save,
    Discard,
    Cancel,
}

/// Modal prompt currently shown on top of the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    ConfirmClear,
    UnsavedChanges(FileAction),
    CustomBrushSize { value: u32 },
    Error { title: String, message: String },
}

/// Interaction state owned by the window rather than the drawing
#[derive(Debug, Default, Clone)]
pub struct UiState {
    pub tool: ToolType,
    pub dialog: Option<Dialog>,
    pub input: InputHandler,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tool(&self) -> ToolKind {
        self.tool.kind()
    }

    /// Switch tools, dropping whatever gesture the old tool was in
    pub fn select_tool(&mut self, kind: ToolKind) {
        if self.tool.kind() == kind {
            return;
        }
        self.tool = kind.new_instance();
        self.tool.activate();
        self.input.reset();
        log::debug!("Tool selected: {}", self.tool.name());
    }

    /// Drop the press in progress so the next pointer event starts a new gesture
    pub fn cancel_gesture(&mut self) {
        self.tool.activate();
        self.input.reset();
    }

    pub fn has_dialog(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn show_error(&mut self, title: &str, message: impl Into<String>) {
        self.dialog = Some(Dialog::Error {
            title: title.to_owned(),
            message: message.into(),
        });
    }
}
