use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::Color;

pub const BRUSH_SIZE_RANGE: RangeInclusive<u32> = 1..=50;
pub const DEFAULT_BRUSH_SIZE: u32 = 2;

/// Brush size menu entries
pub const BRUSH_PRESETS: [(&str, u32); 3] = [
    ("Small (2px)", 2),
    ("Medium (5px)", 5),
    ("Large (10px)", 10),
];

/// Drawing settings that are saved alongside the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentSettings {
    pub color: Color,
    brush_size: u32,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            brush_size: DEFAULT_BRUSH_SIZE,
        }
    }
}

impl DocumentSettings {
    pub fn new(color: Color, brush_size: u32) -> Self {
        let mut settings = Self {
            color,
            brush_size: DEFAULT_BRUSH_SIZE,
        };
        settings.set_brush_size(brush_size);
        settings
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    /// Set the brush size, clamped to `BRUSH_SIZE_RANGE`
    pub fn set_brush_size(&mut self, size: u32) {
        let clamped = size.clamp(*BRUSH_SIZE_RANGE.start(), *BRUSH_SIZE_RANGE.end());
        if clamped != size {
            log::warn!("Brush size {size} out of range, using {clamped}");
        }
        self.brush_size = clamped;
    }
}

/// Per-user preferences kept in eframe's storage between runs
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Preferences {
    /// Directory the file choosers start in
    pub last_directory: Option<PathBuf>,
}

impl Preferences {
    /// Remember the directory containing `path`
    pub fn remember_file(&mut self, path: &Path) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.last_directory = Some(parent.to_path_buf());
        }
    }
}
