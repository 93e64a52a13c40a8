use eframe::egui;

const FILL: egui::Color32 = egui::Color32::from_rgb(0xFF, 0x14, 0x93);
const FILL_HOVERED: egui::Color32 = egui::Color32::from_rgb(0xFF, 0x06, 0x9A);

/// Pink pill button that resets the canvas
pub struct ClearButton {
    pub label: &'static str,
}

impl Default for ClearButton {
    fn default() -> Self {
        Self { label: "Clear Canvas" }
    }
}

impl ClearButton {
    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let font_id = egui::FontId::proportional(18.0);
        let galley = ui.painter().layout_no_wrap(self.label.to_owned(), font_id, egui::Color32::WHITE);
        let padding = egui::vec2(32.0, 16.0);
        let (rect, response) = ui.allocate_exact_size(galley.size() + padding * 2.0, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if response.hovered() { FILL_HOVERED } else { FILL };

            // Drop shadow
            ui.painter().rect_filled(
                rect.translate(egui::vec2(0.0, 4.0)),
                12.0,
                egui::Color32::from_black_alpha(26),
            );
            ui.painter().rect_filled(rect, 12.0, bg_color);

            let text_pos = rect.center() - galley.size() / 2.0;
            ui.painter().galley(text_pos, galley, egui::Color32::WHITE);
        }

        response.on_hover_cursor(egui::CursorIcon::PointingHand)
    }
}
