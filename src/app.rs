use std::path::Path;

use crate::document::Document;
use crate::file_handler::{FileHandler, FilePicker, NativeFilePicker};
use crate::input::{InputEvent, Shortcut, consume_shortcuts, route_event};
use crate::panels;
use crate::renderer::Renderer;
use crate::state::{Dialog, DocumentSettings, FileAction, Preferences, UiState, UnsavedChoice};
use crate::tools::ToolKind;

/// The drawing application: one document, its window state, and the
/// prompts that guard destructive actions.
pub struct PaintApp {
    document: Document,
    ui: UiState,
    renderer: Renderer,
    preferences: Preferences,
    picker: Box<dyn FilePicker>,
    file_handler: FileHandler,
    // Last title sent to the window, to avoid resending it every frame
    title: String,
    exit_requested: bool,
    close_allowed: bool,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_picker(Box::new(NativeFilePicker))
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::default();
        if let Some(storage) = cc.storage {
            app.preferences = eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        }
        app
    }

    /// App that asks `picker` for file paths instead of the system dialogs
    pub fn with_picker(picker: Box<dyn FilePicker>) -> Self {
        Self {
            document: Document::new(),
            ui: UiState::new(),
            renderer: Renderer::new(),
            preferences: Preferences::default(),
            picker,
            file_handler: FileHandler::new(),
            title: String::new(),
            exit_requested: false,
            close_allowed: false,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn ui_state(&self) -> &UiState {
        &self.ui
    }

    pub fn ui_state_mut(&mut self) -> &mut UiState {
        &mut self.ui
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn settings(&self) -> &DocumentSettings {
        self.document.settings()
    }

    /// True once Exit went through; the window closes on the next frame
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn select_tool(&mut self, kind: ToolKind) {
        self.ui.select_tool(kind);
    }

    /// Feed a canvas pointer event to the active tool. Ignored while a
    /// dialog is open.
    pub fn handle_input(&mut self, event: InputEvent) {
        if self.ui.has_dialog() {
            return;
        }
        route_event(&event, &mut self.ui.tool, &mut self.document);
    }

    pub fn handle_shortcut(&mut self, shortcut: Shortcut) {
        log::debug!("Shortcut: {shortcut:?}");
        match shortcut {
            Shortcut::New => self.request(FileAction::New),
            Shortcut::Open => self.request(FileAction::Open),
            Shortcut::Save => {
                self.save();
            }
            Shortcut::SaveAs => {
                self.save_as();
            }
            Shortcut::Undo => self.undo(),
            Shortcut::Redo => self.redo(),
        }
    }

    // A held pencil must not keep drawing onto the restored canvas without a snapshot
    pub fn undo(&mut self) {
        self.ui.cancel_gesture();
        if !self.document.undo() {
            log::debug!("Nothing to undo");
        }
    }

    pub fn redo(&mut self) {
        self.ui.cancel_gesture();
        if !self.document.redo() {
            log::debug!("Nothing to redo");
        }
    }

    pub fn set_brush_size(&mut self, size: u32) {
        self.document.settings_mut().set_brush_size(size);
    }

    pub fn request_custom_brush_size(&mut self) {
        self.ui.dialog = Some(Dialog::CustomBrushSize {
            value: self.document.settings().brush_size(),
        });
    }

    /// Close the custom size prompt, applying `size` unless it was cancelled
    pub fn resolve_custom_brush_size(&mut self, size: Option<u32>) {
        self.ui.dialog = None;
        if let Some(size) = size {
            self.set_brush_size(size);
        }
    }

    /// Clear Canvas menu entry: asks first unless the canvas is already empty
    pub fn request_clear(&mut self) {
        if self.document.canvas().is_empty() {
            self.document.clear_canvas();
        } else {
            self.ui.dialog = Some(Dialog::ConfirmClear);
        }
    }

    pub fn resolve_clear(&mut self, confirmed: bool) {
        self.ui.dialog = None;
        if confirmed {
            self.document.clear_canvas();
        }
    }

    /// Run `action`, first asking about unsaved changes if there are any
    pub fn request(&mut self, action: FileAction) {
        if self.document.is_modified() {
            self.ui.dialog = Some(Dialog::UnsavedChanges(action));
        } else {
            self.perform(action);
        }
    }

    /// Answer the unsaved-changes prompt. Choosing Save only goes on with the
    /// pending action if the drawing really got saved.
    pub fn resolve_unsaved(&mut self, choice: UnsavedChoice) {
        let Some(Dialog::UnsavedChanges(action)) = self.ui.dialog.take() else {
            return;
        };

        match choice {
            UnsavedChoice::Save => {
                if self.save() && !self.document.is_modified() {
                    self.perform(action);
                }
            }
            UnsavedChoice::Discard => self.perform(action),
            UnsavedChoice::Cancel => {}
        }
    }

    fn perform(&mut self, action: FileAction) {
        match action {
            FileAction::New => {
                self.document.reset();
                self.ui.select_tool(ToolKind::Pencil);
            }
            FileAction::Open => {
                let start = self.preferences.last_directory.clone();
                if let Some(path) = self.picker.pick_open(start.as_deref()) {
                    self.open_path(&path);
                }
            }
            FileAction::OpenPath(path) => self.open_path(&path),
            FileAction::Exit => {
                log::info!("Exiting");
                self.exit_requested = true;
            }
        }
    }

    fn open_path(&mut self, path: &Path) {
        match self.document.open(path) {
            Ok(()) => {
                self.preferences.remember_file(path);
                self.ui.input.reset();
            }
            Err(err) => {
                log::error!("{err}");
                self.ui.show_error("Open Error", format!("Could not open file:\n{err}"));
            }
        }
    }

    /// Save to the current file, or ask for one. Returns true on success.
    pub fn save(&mut self) -> bool {
        match self.document.save() {
            None => self.save_as(),
            Some(Ok(())) => true,
            Some(Err(err)) => {
                log::error!("{err}");
                self.ui.show_error("Save Error", format!("Could not save file:\n{err}"));
                false
            }
        }
    }

    /// Ask for a file and save there. Returns false when cancelled or failed.
    pub fn save_as(&mut self) -> bool {
        let suggested = self
            .document
            .current_file()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled.pnp".to_owned());
        let start = self.preferences.last_directory.clone();

        let Some(path) = self.picker.pick_save(start.as_deref(), &suggested) else {
            return false;
        };

        match self.document.save_as(&path) {
            Ok(()) => {
                self.preferences.remember_file(&path);
                true
            }
            Err(err) => {
                log::error!("{err}");
                self.ui.show_error("Save Error", format!("Could not save file:\n{err}"));
                false
            }
        }
    }

    pub fn dismiss_dialog(&mut self) {
        self.ui.dialog = None;
    }

    fn sync_title(&mut self, ctx: &egui::Context) {
        let title = self.document.window_title();
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }
    }

    fn handle_close(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.viewport().close_requested()) && !self.close_allowed {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            if !self.ui.has_dialog() {
                self.request(FileAction::Exit);
            }
        }

        if self.exit_requested && !self.close_allowed {
            self.close_allowed = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.preferences);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.ui.has_dialog() {
            for shortcut in consume_shortcuts(ctx) {
                self.handle_shortcut(shortcut);
            }
            if let Some(path) = self.file_handler.take_dropped_drawing(ctx) {
                self.request(FileAction::OpenPath(path));
            }
        }

        panels::menu_bar(self, ctx);
        panels::tools_panel(self, ctx);
        panels::status_bar(self, ctx);
        panels::central_panel(self, ctx);
        panels::dialogs(self, ctx);

        self.file_handler.preview_files_being_dropped(ctx);
        self.sync_title(ctx);
        self.handle_close(ctx);
    }
}
