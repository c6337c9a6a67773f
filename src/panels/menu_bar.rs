use eframe::egui;

use crate::config::StylePolicy;
use crate::DrawApp;
use crate::panels::dialogs::ColorTarget;

pub fn menu_bar(app: &mut DrawApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("New canvas").clicked() {
                    app.clear();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Save as .ps").clicked() {
                    app.dialogs_mut().open_save_path();
                    ui.close_menu();
                }
                // No File->Quit on web pages
                let is_web = cfg!(target_arch = "wasm32");
                if !is_web {
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Change canvas background").clicked() {
                    let background = app.session().config().background;
                    app.dialogs_mut()
                        .open_color(ColorTarget::Background, background);
                    ui.close_menu();
                }
                ui.separator();
                let mut snapshot =
                    app.session().config().style_policy == StylePolicy::Snapshot;
                if ui
                    .checkbox(&mut snapshot, "Keep style for whole gesture")
                    .changed()
                {
                    let policy = if snapshot {
                        StylePolicy::Snapshot
                    } else {
                        StylePolicy::Live
                    };
                    app.session_mut().set_style_policy(policy);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    app.dialogs_mut().open_about();
                    ui.close_menu();
                }
            });
        });
    });
}
