use crate::PaintApp;
use crate::input::InputEvent;
use crate::tools::Tool;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let rect = response.rect;

            app.document_mut().set_viewport(rect.size());

            if app.ui_state().has_dialog() {
                app.ui_state_mut().input.reset();
            } else {
                let held = response.is_pointer_button_down_on();
                let position = response
                    .interact_pointer_pos()
                    .or_else(|| ctx.pointer_interact_pos())
                    .map(|pos| pos - rect.min.to_vec2());

                let event: Option<InputEvent> = app.ui_state_mut().input.update(held, position);
                if let Some(event) = event {
                    app.handle_input(event);
                }

                if response.hovered() {
                    ctx.set_cursor_icon(app.ui_state().tool.cursor());
                }
            }

            app.renderer().render(&painter, rect, app.document().canvas());
        });
}
