use std::path::{Path, PathBuf};

use egui::{Rect, Vec2};

use crate::canvas::{Canvas, ElementId};
use crate::color::Color;
use crate::element::{ElementType, factory};
use crate::history::History;
use crate::state::{self, DocumentSettings, DrawingFile, PersistenceResult};

pub const APP_NAME: &str = "Pen and Paper";

/// One open drawing: the canvas, its undo history, the drawing settings and
/// where it lives on disk.
///
/// Every method that changes the canvas marks the document as modified.
#[derive(Debug, Default)]
pub struct Document {
    canvas: Canvas,
    history: History,
    settings: DocumentSettings,
    current_file: Option<PathBuf>,
    modified: bool,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn settings(&self) -> &DocumentSettings {
        &self.settings
    }

    /// Color and brush size are session state; changing them does not
    /// modify the drawing.
    pub fn settings_mut(&mut self) -> &mut DocumentSettings {
        &mut self.settings
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.canvas.set_viewport(viewport);
    }

    /// Snapshot the canvas before an edit gesture
    pub fn begin_action(&mut self) {
        self.history.snapshot_before_action(&self.canvas);
    }

    pub fn add_element(&mut self, element: ElementType) -> ElementId {
        self.modified = true;
        self.canvas.append(element)
    }

    /// Cover the whole viewport in `color`, underneath everything already drawn
    pub fn add_fill(&mut self, color: Color) -> ElementId {
        let id = self.add_element(factory::create_fill(self.canvas.viewport(), color));
        self.canvas.sink_to_back(id);
        id
    }

    /// Delete every item whose bounding box touches `rect`
    pub fn erase_in(&mut self, rect: Rect) -> usize {
        let ids = self.canvas.find_overlapping(rect);
        let removed = self.canvas.remove_all(&ids);
        if removed > 0 {
            self.modified = true;
        }
        removed
    }

    /// Remove everything, as one undoable step
    pub fn clear_canvas(&mut self) {
        self.begin_action();
        self.canvas.clear();
        self.modified = true;
    }

    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo(&mut self.canvas);
        self.modified |= changed;
        changed
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo(&mut self.canvas);
        self.modified |= changed;
        changed
    }

    /// Start over with an empty, untitled drawing. The brush size is kept.
    pub fn reset(&mut self) {
        self.canvas.clear();
        self.history.clear();
        self.current_file = None;
        self.modified = false;
        self.settings.color = Color::BLACK;
        log::info!("New drawing");
    }

    /// Write the drawing to `path` and make it the current file
    pub fn save_as(&mut self, path: &Path) -> PersistenceResult<()> {
        let file = DrawingFile::new(self.canvas.serialize(), &self.settings);
        state::save(path, &file)?;
        self.current_file = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }

    /// Save to the current file. `None` when the drawing was never saved.
    pub fn save(&mut self) -> Option<PersistenceResult<()>> {
        let path = self.current_file.clone()?;
        Some(self.save_as(&path))
    }

    /// Replace the drawing with the contents of `path`. On error the
    /// document is left exactly as it was.
    pub fn open(&mut self, path: &Path) -> PersistenceResult<()> {
        let file = state::load(path)?;
        self.canvas.deserialize(&file.items);
        self.settings = file.settings();
        self.history.clear();
        self.current_file = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }

    /// File name for display, with a trailing `*` when there are unsaved changes
    pub fn display_name(&self) -> String {
        let name = self
            .current_file
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_owned());

        if self.modified {
            format!("{name} *")
        } else {
            name
        }
    }

    pub fn window_title(&self) -> String {
        format!("{} - {APP_NAME}", self.display_name())
    }

    /// Approximate covered share of the viewport, see
    /// [`Canvas::bounding_box_area_estimate`]
    pub fn fill_percentage(&self) -> f32 {
        self.canvas.bounding_box_area_estimate()
    }
}
