use egui::{CursorIcon, Pos2};

use super::Tool;
use crate::document::Document;

/// Floods the whole canvas with the current color, behind existing drawing
#[derive(Debug, Default, Clone)]
pub struct FillTool;

impl FillTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for FillTool {
    fn name(&self) -> &'static str {
        "Fill"
    }

    fn cursor(&self) -> CursorIcon {
        CursorIcon::PointingHand
    }

    fn on_pointer_down(&mut self, _pos: Pos2, doc: &mut Document) {
        doc.begin_action();
        let color = doc.settings().color;
        doc.add_fill(color);
    }

    fn on_pointer_move(&mut self, _pos: Pos2, _doc: &mut Document) {}

    fn on_pointer_up(&mut self, _pos: Pos2, _doc: &mut Document) {}
}
