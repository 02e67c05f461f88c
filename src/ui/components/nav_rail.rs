use eframe::egui;

use crate::common::NavView;
use crate::ui::theme;

pub fn render(ui: &mut egui::Ui, active: &mut NavView) {
    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.label(egui::RichText::new("🗨").size(28.0).color(theme::PRIMARY));
        ui.add_space(24.0);

        for view in NavView::ALL {
            let selected = *active == view;
            let button = egui::Button::new(egui::RichText::new(view.icon()).size(22.0))
                .min_size(egui::vec2(48.0, 48.0))
                .corner_radius(egui::CornerRadius::same(12))
                .fill(if selected {
                    theme::PRIMARY
                } else {
                    egui::Color32::TRANSPARENT
                });

            if ui.add(button).on_hover_text(view.label()).clicked() {
                *active = view;
            }
            ui.add_space(8.0);
        }

        ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
            ui.add_space(16.0);
            // Chưa có đăng nhập nên nút thoát không làm gì
            ui.add(egui::Button::new(egui::RichText::new("⎋").size(22.0)).frame(false))
                .on_hover_text("Выйти");
        });
    });
}
