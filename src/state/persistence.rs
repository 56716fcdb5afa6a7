use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::DocumentSettings;
use super::settings::DEFAULT_BRUSH_SIZE;
use crate::color::Color;
use crate::element::record::null_as_default;
use crate::element::{ElementType, ItemRecord};
use crate::error::FormatError;

/// Extension of drawing files
pub const FILE_EXTENSION: &str = "pnp";

/// Errors that can occur while saving or loading a drawing
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} is not a valid drawing: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{} has an invalid item at index {index}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        index: usize,
        source: FormatError,
    },

    #[error("Failed to encode drawing: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl PersistenceError {
    /// True for failures while saving, false for failures while opening
    pub fn is_write_error(&self) -> bool {
        matches!(self, Self::Encode(_) | Self::Write { .. })
    }
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// On-disk layout of a `.pnp` file. Missing or `null` fields fall back to
/// an empty drawing, black and the default brush size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingFile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<ItemRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: Color,
    #[serde(default = "default_brush_size", deserialize_with = "brush_size_or_default")]
    pub brush_size: u32,
}

fn default_brush_size() -> u32 {
    DEFAULT_BRUSH_SIZE
}

fn brush_size_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(DEFAULT_BRUSH_SIZE))
}

impl DrawingFile {
    pub fn new(items: Vec<ItemRecord>, settings: &DocumentSettings) -> Self {
        Self {
            items,
            color: settings.color,
            brush_size: settings.brush_size(),
        }
    }

    /// Settings stored in the file, with the brush size clamped into range
    pub fn settings(&self) -> DocumentSettings {
        DocumentSettings::new(self.color, self.brush_size)
    }
}

/// Write `file` as JSON to `path`
pub fn save(path: &Path, file: &DrawingFile) -> PersistenceResult<()> {
    let json = serde_json::to_string(file)?;
    fs::write(path, json).map_err(|source| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Saved {} items to {}", file.items.len(), path.display());
    Ok(())
}

/// Read and validate a drawing. Nothing is returned unless every known item
/// in the file is well formed.
pub fn load(path: &Path) -> PersistenceResult<DrawingFile> {
    let json = fs::read_to_string(path).map_err(|source| PersistenceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let file: DrawingFile = serde_json::from_str(&json).map_err(|source| PersistenceError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    for (index, record) in file.items.iter().enumerate() {
        ElementType::from_record(record).map_err(|source| PersistenceError::Invalid {
            path: path.to_path_buf(),
            index,
            source,
        })?;
    }

    log::info!("Loaded {} items from {}", file.items.len(), path.display());
    Ok(file)
}
