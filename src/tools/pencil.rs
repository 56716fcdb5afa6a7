use egui::{CursorIcon, Pos2};

use super::Tool;
use crate::document::Document;
use crate::element::factory;

/// Freehand drawing: a dot where the pointer goes down, then one stroke
/// segment per pointer move.
#[derive(Debug, Default, Clone)]
pub struct PencilTool {
    // Transient state: where the previous segment ended
    last_point: Option<Pos2>,
}

impl PencilTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drawing(&self) -> bool {
        self.last_point.is_some()
    }
}

impl Tool for PencilTool {
    fn name(&self) -> &'static str {
        "Pencil"
    }

    fn cursor(&self) -> CursorIcon {
        CursorIcon::Crosshair
    }

    fn activate(&mut self) {
        self.last_point = None;
    }

    fn on_pointer_down(&mut self, pos: Pos2, doc: &mut Document) {
        doc.begin_action();

        let settings = *doc.settings();
        let radius = settings.brush_size() as f32 / 2.0;
        doc.add_element(factory::create_dot(pos, radius, settings.color));

        self.last_point = Some(pos);
    }

    fn on_pointer_move(&mut self, pos: Pos2, doc: &mut Document) {
        let Some(last) = self.last_point else {
            return;
        };

        let settings = *doc.settings();
        doc.add_element(factory::create_stroke(
            last,
            pos,
            settings.color,
            settings.brush_size() as f32,
        ));

        self.last_point = Some(pos);
    }

    fn on_pointer_up(&mut self, _pos: Pos2, _doc: &mut Document) {
        self.last_point = None;
    }
}
