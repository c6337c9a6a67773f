use eframe::egui;

use crate::DrawApp;

pub fn status_bar(app: &DrawApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(app.session().status());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let canvas = app.session().canvas();
                ui.label(format!(
                    "{} primitives · {} undo steps",
                    canvas.len(),
                    app.session().history().len()
                ));
            });
        });
    });
}
