use egui::{Painter, Pos2, Rect, Shape, Stroke as EguiStroke, Vec2};

use super::Element;
use super::common::{self, OUTLINE_WIDTH};
use super::record::{ItemRecord, ShapeConfig};
use crate::color::Color;
use crate::error::FormatError;

/// Filled oval, normally a circle stamped where the pencil touches down
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    rect: Rect,
    fill: Color,
    outline: Color,
}

impl Dot {
    /// Circle of `radius` around `center`, outlined in its own fill color
    pub fn new(center: Pos2, radius: f32, color: Color) -> Self {
        Self {
            rect: Rect::from_center_size(center, Vec2::splat(radius * 2.0)),
            fill: color,
            outline: color,
        }
    }

    pub fn center(&self) -> Pos2 {
        self.rect.center()
    }

    /// Horizontal radius; equal to the vertical one for dots made by the pencil
    pub fn radius(&self) -> f32 {
        self.rect.width() / 2.0
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn outline(&self) -> Color {
        self.outline
    }

    pub(crate) fn from_config(coords: &[f32], config: &ShapeConfig) -> Result<Self, FormatError> {
        Ok(Self {
            rect: common::unflatten_rect("oval", coords)?,
            fill: config.fill,
            outline: config.outline,
        })
    }
}

impl Element for Dot {
    fn element_type(&self) -> &'static str {
        "oval"
    }

    fn coords(&self) -> Vec<f32> {
        common::flatten_rect(self.rect)
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn draw(&self, painter: &Painter, offset: Vec2) {
        let center = self.rect.center() + offset;
        let radius = self.rect.size() / 2.0;
        painter.add(Shape::ellipse_filled(center, radius, self.fill.to_color32()));
        painter.add(Shape::ellipse_stroke(
            center,
            radius,
            EguiStroke::new(OUTLINE_WIDTH, self.outline.to_color32()),
        ));
    }

    fn to_record(&self) -> ItemRecord {
        ItemRecord::Oval {
            coords: self.coords(),
            config: ShapeConfig {
                fill: self.fill,
                outline: self.outline,
            },
        }
    }
}
