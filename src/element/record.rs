//! Plain serialized form of canvas items.
//!
//! This is what snapshots hold and what the `.pnp` file stores under `items`:
//! `{ "type": "line" | "oval" | "rectangle", "coords": [...], "config": {...} }`.
//! Every config field has a default, so a record missing `config` (or some of
//! its keys) still loads.

use serde::{Deserialize, Deserializer, Serialize};

use crate::color::Color;

/// End cap of a stroke segment
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapStyle {
    #[default]
    Round,
    Butt,
    Projecting,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineConfig {
    pub fill: Color,
    pub width: f32,
    pub capstyle: CapStyle,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            fill: Color::BLACK,
            width: 2.0,
            capstyle: CapStyle::Round,
        }
    }
}

/// Style of closed shapes (ovals and rectangles)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeConfig {
    pub fill: Color,
    pub outline: Color,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            fill: Color::BLACK,
            outline: Color::BLACK,
        }
    }
}

/// Deserialize a field so that an explicit `null` reads like a missing key
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemRecord {
    Line {
        coords: Vec<f32>,
        #[serde(default, deserialize_with = "null_as_default")]
        config: LineConfig,
    },
    Oval {
        coords: Vec<f32>,
        #[serde(default, deserialize_with = "null_as_default")]
        config: ShapeConfig,
    },
    Rectangle {
        coords: Vec<f32>,
        #[serde(default, deserialize_with = "null_as_default")]
        config: ShapeConfig,
    },
    /// Any item type this version does not know. Skipped on load.
    #[serde(other)]
    Unknown,
}

impl ItemRecord {
    pub fn type_name(&self) -> &'static str {
        match self {
            ItemRecord::Line { .. } => "line",
            ItemRecord::Oval { .. } => "oval",
            ItemRecord::Rectangle { .. } => "rectangle",
            ItemRecord::Unknown => "unknown",
        }
    }

    pub fn coords(&self) -> &[f32] {
        match self {
            ItemRecord::Line { coords, .. }
            | ItemRecord::Oval { coords, .. }
            | ItemRecord::Rectangle { coords, .. } => coords,
            ItemRecord::Unknown => &[],
        }
    }
}
