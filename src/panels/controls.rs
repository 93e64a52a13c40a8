use crate::CanvasApp;
use crate::components::ClearButton;

pub fn controls(app: &mut CanvasApp, ctx: &egui::Context) {
    egui::Area::new(egui::Id::new("canvas_controls"))
        .order(egui::Order::Foreground)
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-32.0, -32.0))
        .show(ctx, |ui| {
            if ClearButton::default().show(ui).clicked() {
                log::info!("Clear requested from UI");
                app.clear(ctx);
            }
        });
}
