use crate::CanvasApp;
use crate::input::{InputEvent, translate_events};
use crate::surface::SurfaceMetrics;

pub fn central_panel(app: &mut CanvasApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let canvas_rect = ui.max_rect();
            let metrics = SurfaceMetrics::new(canvas_rect, ctx.pixels_per_point());
            let canvas_layer = ui.layer_id();

            let Some(session) = app.session_for(metrics, ctx) else {
                return;
            };
            session.resize(metrics, ctx);

            // Presses over floating controls belong to them, not the canvas
            let events = ctx.input(|input| translate_events(&input.events));
            for event in events {
                let over_controls = matches!(event, InputEvent::PointerDown { .. })
                    && event
                        .position()
                        .and_then(|pos| ctx.layer_id_at(pos))
                        .is_some_and(|layer| layer != canvas_layer);
                if over_controls {
                    continue;
                }
                session.handle_input(&event);
            }

            session.tick(ctx).paint(ui.painter(), canvas_rect.min);
        });
}
