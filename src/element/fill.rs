use egui::{Painter, Rect, Stroke as EguiStroke, Vec2};

use super::Element;
use super::common::{self, OUTLINE_WIDTH};
use super::record::{ItemRecord, ShapeConfig};
use crate::color::Color;
use crate::error::FormatError;

/// Solid rectangle covering the whole viewport, used as a background color
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    rect: Rect,
    fill: Color,
    outline: Color,
}

impl Fill {
    /// Rectangle spanning `viewport` in canvas coordinates
    pub fn covering(viewport: Vec2, color: Color) -> Self {
        Self {
            rect: Rect::from_min_size(egui::Pos2::ZERO, viewport),
            fill: color,
            outline: color,
        }
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn outline(&self) -> Color {
        self.outline
    }

    pub(crate) fn from_config(coords: &[f32], config: &ShapeConfig) -> Result<Self, FormatError> {
        Ok(Self {
            rect: common::unflatten_rect("rectangle", coords)?,
            fill: config.fill,
            outline: config.outline,
        })
    }
}

impl Element for Fill {
    fn element_type(&self) -> &'static str {
        "rectangle"
    }

    fn coords(&self) -> Vec<f32> {
        common::flatten_rect(self.rect)
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn draw(&self, painter: &Painter, offset: Vec2) {
        let rect = self.rect.translate(offset);
        painter.rect_filled(rect, 0.0, self.fill.to_color32());
        painter.rect_stroke(
            rect,
            0.0,
            EguiStroke::new(OUTLINE_WIDTH, self.outline.to_color32()),
        );
    }

    fn to_record(&self) -> ItemRecord {
        ItemRecord::Rectangle {
            coords: self.coords(),
            config: ShapeConfig {
                fill: self.fill,
                outline: self.outline,
            },
        }
    }
}
