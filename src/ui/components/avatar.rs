use eframe::egui;

use crate::ui::theme;

/// Vòng tròn chữ cái đầu, có chấm xanh khi online.
pub fn render(ui: &mut egui::Ui, initials: &str, diameter: f32, online: bool) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::hover());
    let painter = ui.painter();
    let radius = diameter / 2.0;

    painter.circle_filled(rect.center(), radius, theme::PRIMARY);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        initials,
        egui::FontId::proportional(diameter * 0.36),
        egui::Color32::WHITE,
    );

    if online {
        let dot = radius * 0.3;
        let center = rect.right_bottom() - egui::vec2(dot, dot);
        painter.circle_filled(center, dot + 2.0, ui.visuals().panel_fill);
        painter.circle_filled(center, dot, theme::ONLINE);
    }

    response
}
