// src/renderer.rs
use eframe::egui::{self, Color32};

use crate::canvas::Canvas;
use crate::element::Element;

/// Paints the drawing surface
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            background: Color32::WHITE,
        }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Paint the white page and every item, bottom to top.
    ///
    /// `rect` is where the canvas sits on screen; item coordinates are
    /// relative to its top-left corner.
    pub fn render(&self, painter: &egui::Painter, rect: egui::Rect, canvas: &Canvas) {
        painter.rect_filled(rect, 0.0, self.background);

        let painter = painter.with_clip_rect(rect);
        let offset = rect.min.to_vec2();
        for element in canvas.elements() {
            element.draw(&painter, offset);
        }
    }
}
