use egui::{CursorIcon, Pos2};

use crate::document::Document;

/// Tool trait defines how pointer input on the canvas turns into edits
pub trait Tool {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    /// Pointer icon shown over the canvas while the tool is active
    fn cursor(&self) -> CursorIcon;

    /// Called when the tool is selected. Resets any in-progress gesture.
    fn activate(&mut self) {
        // default: do nothing
    }

    /// Pointer pressed on the canvas. Starts a gesture, so this is where the
    /// undo snapshot is taken.
    fn on_pointer_down(&mut self, pos: Pos2, doc: &mut Document);

    /// Pointer moved while held down
    fn on_pointer_move(&mut self, pos: Pos2, doc: &mut Document);

    /// Pointer released
    fn on_pointer_up(&mut self, pos: Pos2, doc: &mut Document);
}

// Tool implementations
mod eraser;
mod fill;
mod pencil;

pub use eraser::EraserTool;
pub use fill::FillTool;
pub use pencil::PencilTool;

/// Plain tool selector, as shown in the toolbar
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    #[default]
    Pencil,
    Eraser,
    Fill,
}

impl ToolKind {
    pub const ALL: [ToolKind; 3] = [ToolKind::Pencil, ToolKind::Eraser, ToolKind::Fill];

    pub fn label(self) -> &'static str {
        match self {
            ToolKind::Pencil => "Pencil",
            ToolKind::Eraser => "Eraser",
            ToolKind::Fill => "Fill",
        }
    }

    /// Create a fresh instance of this tool
    pub fn new_instance(self) -> ToolType {
        match self {
            ToolKind::Pencil => ToolType::Pencil(PencilTool::new()),
            ToolKind::Eraser => ToolType::Eraser(EraserTool::new()),
            ToolKind::Fill => ToolType::Fill(FillTool::new()),
        }
    }
}

/// Enum representing all available tools, dispatching to the concrete type
#[derive(Debug, Clone)]
pub enum ToolType {
    Pencil(PencilTool),
    Eraser(EraserTool),
    Fill(FillTool),
}

impl Default for ToolType {
    fn default() -> Self {
        ToolKind::default().new_instance()
    }
}

impl ToolType {
    pub fn kind(&self) -> ToolKind {
        match self {
            Self::Pencil(_) => ToolKind::Pencil,
            Self::Eraser(_) => ToolKind::Eraser,
            Self::Fill(_) => ToolKind::Fill,
        }
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Pencil(tool) => tool.name(),
            Self::Eraser(tool) => tool.name(),
            Self::Fill(tool) => tool.name(),
        }
    }

    fn cursor(&self) -> CursorIcon {
        match self {
            Self::Pencil(tool) => tool.cursor(),
            Self::Eraser(tool) => tool.cursor(),
            Self::Fill(tool) => tool.cursor(),
        }
    }

    fn activate(&mut self) {
        match self {
            Self::Pencil(tool) => tool.activate(),
            Self::Eraser(tool) => tool.activate(),
            Self::Fill(tool) => tool.activate(),
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2, doc: &mut Document) {
        match self {
            Self::Pencil(tool) => tool.on_pointer_down(pos, doc),
            Self::Eraser(tool) => tool.on_pointer_down(pos, doc),
            Self::Fill(tool) => tool.on_pointer_down(pos, doc),
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2, doc: &mut Document) {
        match self {
            Self::Pencil(tool) => tool.on_pointer_move(pos, doc),
            Self::Eraser(tool) => tool.on_pointer_move(pos, doc),
            Self::Fill(tool) => tool.on_pointer_move(pos, doc),
        }
    }

    fn on_pointer_up(&mut self, pos: Pos2, doc: &mut Document) {
        match self {
            Self::Pencil(tool) => tool.on_pointer_up(pos, doc),
            Self::Eraser(tool) => tool.on_pointer_up(pos, doc),
            Self::Fill(tool) => tool.on_pointer_up(pos, doc),
        }
    }
}
