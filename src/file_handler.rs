use std::path::{Path, PathBuf};

use eframe::egui;

use crate::state::FILE_EXTENSION;

/// Source of file paths for Open and Save As.
///
/// The native implementation shows blocking system dialogs; tests plug in
/// canned answers.
pub trait FilePicker {
    /// Ask for an existing drawing to open. `None` when cancelled.
    fn pick_open(&mut self, start_dir: Option<&Path>) -> Option<PathBuf>;

    /// Ask where to save, suggesting `file_name`. `None` when cancelled.
    fn pick_save(&mut self, start_dir: Option<&Path>, file_name: &str) -> Option<PathBuf>;
}

/// System file chooser
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFilePicker;

impl NativeFilePicker {
    fn dialog(title: &str, start_dir: Option<&Path>) -> rfd::FileDialog {
        let mut dialog = rfd::FileDialog::new()
            .set_title(title)
            .add_filter("Pen and Paper files", &[FILE_EXTENSION])
            .add_filter("All files", &["*"]);
        if let Some(dir) = start_dir {
            dialog = dialog.set_directory(dir);
        }
        dialog
    }
}

impl FilePicker for NativeFilePicker {
    fn pick_open(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        Self::dialog("Open Drawing", start_dir).pick_file()
    }

    fn pick_save(&mut self, start_dir: Option<&Path>, file_name: &str) -> Option<PathBuf> {
        Self::dialog("Save Drawing As", start_dir)
            .set_file_name(file_name)
            .save_file()
            .map(with_default_extension)
    }
}

/// Append `.pnp` when the chosen name has no extension
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(FILE_EXTENSION)
    }
}

pub fn is_drawing_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(FILE_EXTENSION))
}

/// Picks up drawing files dropped onto the window
#[derive(Debug, Default)]
pub struct FileHandler;

impl FileHandler {
    pub fn new() -> Self {
        Self
    }

    /// First `.pnp` file dropped this frame, if any
    pub fn take_dropped_drawing(&self, ctx: &egui::Context) -> Option<PathBuf> {
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });

        let mut drawings = dropped.into_iter().filter(|path| {
            let ok = is_drawing_file(path);
            if !ok {
                log::warn!("Dropped file is not a drawing: {}", path.display());
            }
            ok
        });

        let first = drawings.next();
        if drawings.next().is_some() {
            log::warn!("Several drawings dropped, opening only the first");
        }
        first
    }

    /// Preview files being dragged over the application
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, Id, LayerId, Order};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let text = ctx.input(|i| {
            let mut text = "Drop to open:\n".to_owned();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path {
                    text += &format!("\n{}", path.display());
                } else {
                    text += "\n(Path not available)";
                }
            }
            text
        });

        let painter =
            ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("file_drop_target")));

        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            egui::TextStyle::Heading.resolve(&ctx.style()),
            Color32::WHITE,
        );
    }
}
