use crate::PaintApp;

/// Footer: file name on the left, fill estimate on the right
pub fn status_bar(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(app.document().display_name());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("{:.1}% filled", app.document().fill_percentage()));
            });
        });
    });
}
