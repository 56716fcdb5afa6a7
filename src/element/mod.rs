use egui::{Painter, Rect, Vec2};

mod common;
pub(crate) mod dot;
pub(crate) mod fill;
pub mod record;
pub(crate) mod stroke;

pub use common::OUTLINE_WIDTH;
pub use dot::Dot;
pub use fill::Fill;
pub use record::{CapStyle, ItemRecord, LineConfig, ShapeConfig};
pub use stroke::Stroke;

use crate::error::FormatError;

/// Common trait that all drawable items implement
pub trait Element {
    /// Type discriminator as written to disk
    fn element_type(&self) -> &'static str;

    /// Geometry as a flat `[x0, y0, x1, y1, ...]` list
    fn coords(&self) -> Vec<f32>;

    /// Axis-aligned bounding box in canvas coordinates
    fn rect(&self) -> Rect;

    /// Paint the item, shifting canvas coordinates by `offset`
    fn draw(&self, painter: &Painter, offset: Vec2);

    /// Detached serialized form
    fn to_record(&self) -> ItemRecord;
}

/// Every kind of item the canvas can hold
#[derive(Debug, Clone, PartialEq)]
pub enum ElementType {
    Stroke(Stroke),
    Dot(Dot),
    Fill(Fill),
}

impl ElementType {
    /// Rebuild an item from its record. `Ok(None)` for item types this
    /// version does not know.
    pub fn from_record(record: &ItemRecord) -> Result<Option<Self>, FormatError> {
        let element = match record {
            ItemRecord::Line { coords, config } => Self::Stroke(Stroke::from_config(coords, config)?),
            ItemRecord::Oval { coords, config } => Self::Dot(Dot::from_config(coords, config)?),
            ItemRecord::Rectangle { coords, config } => {
                Self::Fill(Fill::from_config(coords, config)?)
            }
            ItemRecord::Unknown => return Ok(None),
        };
        Ok(Some(element))
    }

    pub fn is_fill(&self) -> bool {
        matches!(self, Self::Fill(_))
    }
}

impl Element for ElementType {
    fn element_type(&self) -> &'static str {
        match self {
            Self::Stroke(s) => s.element_type(),
            Self::Dot(d) => d.element_type(),
            Self::Fill(f) => f.element_type(),
        }
    }

    fn coords(&self) -> Vec<f32> {
        match self {
            Self::Stroke(s) => s.coords(),
            Self::Dot(d) => d.coords(),
            Self::Fill(f) => f.coords(),
        }
    }

    fn rect(&self) -> Rect {
        match self {
            Self::Stroke(s) => s.rect(),
            Self::Dot(d) => d.rect(),
            Self::Fill(f) => f.rect(),
        }
    }

    fn draw(&self, painter: &Painter, offset: Vec2) {
        match self {
            Self::Stroke(s) => s.draw(painter, offset),
            Self::Dot(d) => d.draw(painter, offset),
            Self::Fill(f) => f.draw(painter, offset),
        }
    }

    fn to_record(&self) -> ItemRecord {
        match self {
            Self::Stroke(s) => s.to_record(),
            Self::Dot(d) => d.to_record(),
            Self::Fill(f) => f.to_record(),
        }
    }
}

/// Factory functions for creating elements
pub mod factory {
    use super::*;
    use crate::color::Color;
    use egui::Pos2;

    /// Pencil drag segment, `width` pixels wide with round caps
    pub fn create_stroke(from: Pos2, to: Pos2, color: Color, width: f32) -> ElementType {
        ElementType::Stroke(Stroke::segment(from, to, color, width))
    }

    /// Pencil touch-down dot
    pub fn create_dot(center: Pos2, radius: f32, color: Color) -> ElementType {
        ElementType::Dot(Dot::new(center, radius, color))
    }

    /// Background fill covering a viewport of the given size
    pub fn create_fill(viewport: Vec2, color: Color) -> ElementType {
        ElementType::Fill(Fill::covering(viewport, color))
    }
}
