use egui::{RichText, Slider};

use crate::PaintApp;
use crate::color::Color;
use crate::components::ToolButton;
use crate::state::BRUSH_SIZE_RANGE;
use crate::tools::ToolKind;

/// Toolbar: tool buttons, color picker and brush size slider
pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let active = app.ui_state().active_tool();
            for kind in ToolKind::ALL {
                if ToolButton::new(kind, kind == active).show(ui).clicked() {
                    log::info!("Tool selected from UI: {}", kind.label());
                    app.select_tool(kind);
                }
            }

            ui.separator();

            // Color button shows the current color with readable text on top
            let color = app.settings().color;
            let label = RichText::new("Color").color(color.contrasting_text().to_color32());
            let mut rgb = color.to_array();
            ui.label(label.background_color(color.to_color32()));
            if egui::color_picker::color_edit_button_srgb(ui, &mut rgb).changed() {
                app.document_mut().settings_mut().color = Color::from(rgb);
            }

            ui.separator();

            ui.label("Size:");
            let mut size = app.settings().brush_size();
            if ui
                .add(Slider::new(&mut size, BRUSH_SIZE_RANGE))
                .changed()
            {
                app.set_brush_size(size);
            }
        });
    });
}
