use egui::{Align2, DragValue};

use crate::PaintApp;
use crate::state::{BRUSH_SIZE_RANGE, Dialog, UnsavedChoice};

fn modal_window(title: &str) -> egui::Window<'static> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
}

/// Show whichever prompt is pending and apply the answer
pub fn dialogs(app: &mut PaintApp, ctx: &egui::Context) {
    let Some(dialog) = app.ui_state().dialog.clone() else {
        return;
    };

    match dialog {
        Dialog::ConfirmClear => {
            modal_window("Clear Canvas").show(ctx, |ui| {
                ui.label("Are you sure you want to clear the canvas?");
                ui.horizontal(|ui| {
                    if ui.button("Yes").clicked() {
                        app.resolve_clear(true);
                    }
                    if ui.button("No").clicked() {
                        app.resolve_clear(false);
                    }
                });
            });
        }
        Dialog::UnsavedChanges(_) => {
            modal_window("Unsaved Changes").show(ctx, |ui| {
                ui.label("You have unsaved changes. Save before continuing?");
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        app.resolve_unsaved(UnsavedChoice::Save);
                    }
                    if ui.button("Don't Save").clicked() {
                        app.resolve_unsaved(UnsavedChoice::Discard);
                    }
                    if ui.button("Cancel").clicked() {
                        app.resolve_unsaved(UnsavedChoice::Cancel);
                    }
                });
            });
        }
        Dialog::CustomBrushSize { mut value } => {
            modal_window("Brush Size").show(ctx, |ui| {
                ui.label("Enter brush size (1-50):");
                let changed = ui.add(DragValue::new(&mut value).range(BRUSH_SIZE_RANGE)).changed();
                if changed {
                    app.ui_state_mut().dialog = Some(Dialog::CustomBrushSize { value });
                }
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        app.resolve_custom_brush_size(Some(value));
                    }
                    if ui.button("Cancel").clicked() {
                        app.resolve_custom_brush_size(None);
                    }
                });
            });
        }
        Dialog::Error { title, message } => {
            modal_window(&title).show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    app.dismiss_dialog();
                }
            });
        }
    }
}
