use eframe::egui;

use crate::DrawApp;
use crate::input::{PointerSample, route_event};

/// The drawing area: feeds pointer input to the session and paints the canvas
pub fn central_panel(app: &mut DrawApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let canvas_rect = response.rect;
            app.session_mut().resize_canvas(canvas_rect.size());

            if response.hovered() {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }

            let mut sample = PointerSample::from_context(ctx);
            // Windows above the canvas and open pickers must not start gestures
            sample.pressed &= response.hovered() && !app.dialogs().is_modal_open();

            let (input, session) = app.input_and_session();
            for event in input.process(sample, canvas_rect) {
                route_event(event, session);
            }

            app.renderer().render(&painter, canvas_rect, app.session().canvas());
        });
}
