use egui::{CursorIcon, Pos2, Rect, Vec2};

use super::Tool;
use crate::document::Document;

/// Deletes whole items under the pointer while dragging
#[derive(Debug, Default, Clone)]
pub struct EraserTool {
    erasing: bool,
}

impl EraserTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Square the eraser covers at `pos`: half-width of twice the brush size
    pub fn footprint(pos: Pos2, brush_size: u32) -> Rect {
        let half = brush_size as f32 * 2.0;
        Rect::from_center_size(pos, Vec2::splat(half * 2.0))
    }
}

impl Tool for EraserTool {
    fn name(&self) -> &'static str {
        "Eraser"
    }

    fn cursor(&self) -> CursorIcon {
        CursorIcon::Cell
    }

    fn activate(&mut self) {
        self.erasing = false;
    }

    fn on_pointer_down(&mut self, _pos: Pos2, doc: &mut Document) {
        doc.begin_action();
        self.erasing = true;
    }

    fn on_pointer_move(&mut self, pos: Pos2, doc: &mut Document) {
        if !self.erasing {
            return;
        }

        let area = Self::footprint(pos, doc.settings().brush_size());
        let removed = doc.erase_in(area);
        if removed > 0 {
            log::debug!("Eraser removed {removed} items");
        }
    }

    fn on_pointer_up(&mut self, _pos: Pos2, _doc: &mut Document) {
        self.erasing = false;
    }
}
