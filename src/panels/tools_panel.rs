use eframe::egui;

use crate::DrawApp;
use crate::components::tool_button::ToolButton;
use crate::panels::dialogs::ColorTarget;
use crate::primitive::BrushSize;
use crate::tools::ToolKind;

/// Toolbar: tools, color, brush size and the canvas actions
pub fn tools_panel(app: &mut DrawApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label("Tools:");
                ui.horizontal(|ui| {
                    let active = app.session().config().tool;
                    for tool in ToolKind::ALL {
                        if ToolButton::new(tool, tool == active).show(ui).clicked() {
                            log::info!("Tool selected from UI: {}", tool.label());
                            app.session_mut().set_tool(tool);
                        }
                    }
                });
            });

            ui.separator();

            ui.vertical(|ui| {
                let color = app.session().config().color;
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
                    ui.painter().rect_filled(rect, 2.0, color);
                    if ui.button("Color").clicked() {
                        app.dialogs_mut().open_color(ColorTarget::Brush, color);
                    }
                });
            });

            ui.separator();

            ui.vertical(|ui| {
                ui.label("Brush size:");
                let mut size = app.session().config().brush_size.get();
                if ui
                    .add(egui::Slider::new(&mut size, BrushSize::MIN..=BrushSize::MAX))
                    .changed()
                {
                    app.session_mut().set_brush_size(size);
                }
            });

            ui.separator();

            if ui.button("Clear").clicked() {
                app.clear();
            }
            let can_undo = app.session().history().can_undo();
            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                app.undo();
            }
            if ui.button("Save .ps").clicked() {
                app.dialogs_mut().open_save_path();
            }
        });
    });
}
