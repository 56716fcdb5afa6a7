use crate::PaintApp;
use crate::input::Shortcut;
use crate::state::{BRUSH_PRESETS, FileAction};

fn menu_item(ui: &mut egui::Ui, label: &str, shortcut: Option<Shortcut>) -> bool {
    let mut button = egui::Button::new(label);
    if let Some(shortcut) = shortcut {
        button = button.shortcut_text(ui.ctx().format_shortcut(&shortcut.keyboard()));
    }
    let clicked = ui.add(button).clicked();
    if clicked {
        ui.close_menu();
    }
    clicked
}

pub fn menu_bar(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if menu_item(ui, "New", Some(Shortcut::New)) {
                    app.request(FileAction::New);
                }
                if menu_item(ui, "Open...", Some(Shortcut::Open)) {
                    app.request(FileAction::Open);
                }
                ui.separator();
                if menu_item(ui, "Save", Some(Shortcut::Save)) {
                    app.save();
                }
                if menu_item(ui, "Save As...", Some(Shortcut::SaveAs)) {
                    app.save_as();
                }
                ui.separator();
                if menu_item(ui, "Exit", None) {
                    app.request(FileAction::Exit);
                }
            });

            ui.menu_button("Edit", |ui| {
                let history = app.document().history();
                let (can_undo, can_redo) = (history.can_undo(), history.can_redo());

                ui.add_enabled_ui(can_undo, |ui| {
                    if menu_item(ui, "Undo", Some(Shortcut::Undo)) {
                        app.undo();
                    }
                });
                ui.add_enabled_ui(can_redo, |ui| {
                    if menu_item(ui, "Redo", Some(Shortcut::Redo)) {
                        app.redo();
                    }
                });
            });

            ui.menu_button("Options", |ui| {
                ui.menu_button("Brush Size", |ui| {
                    for (label, size) in BRUSH_PRESETS {
                        if menu_item(ui, label, None) {
                            app.set_brush_size(size);
                        }
                    }
                    ui.separator();
                    if menu_item(ui, "Custom...", None) {
                        app.request_custom_brush_size();
                    }
                });
                ui.separator();
                if menu_item(ui, "Clear Canvas", None) {
                    app.request_clear();
                }
            });
        });
    });
}
