use eframe::egui;

use crate::common::{CallCommand, CallKind, Contact};
use crate::ui::theme;

use super::avatar;

pub fn render(ui: &mut egui::Ui, contact: &Contact, kind: CallKind) -> Option<CallCommand> {
    let mut command = None;
    let kind_icon = if kind.is_video() { "🎥" } else { "📞" };

    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 5.0);
        avatar::render(ui, &contact.initials, 180.0, false);
        ui.add_space(24.0);
        ui.label(egui::RichText::new(&contact.name).size(34.0).strong());
        ui.label(egui::RichText::new(format!("{kind_icon} {}", kind.label())).size(18.0).weak());
        ui.label(
            egui::RichText::new("Входящий звонок...")
                .size(16.0)
                .color(theme::PRIMARY),
        );
        ui.add_space(40.0);

        ui.horizontal(|ui| {
            let total = 2.0 * 80.0 + 48.0;
            ui.add_space((ui.available_width() - total).max(0.0) / 2.0);

            ui.vertical(|ui| {
                if round_button(ui, "📵", theme::DESTRUCTIVE).clicked() {
                    command = Some(CallCommand::Decline);
                }
                ui.label(egui::RichText::new("Отклонить").weak());
            });
            ui.add_space(48.0);
            ui.vertical(|ui| {
                if round_button(ui, kind_icon, theme::ONLINE).clicked() {
                    command = Some(CallCommand::Accept);
                }
                ui.label(egui::RichText::new("Принять").weak());
            });
        });
    });

    command
}

pub(super) fn round_button(ui: &mut egui::Ui, icon: &str, fill: egui::Color32) -> egui::Response {
    ui.add(
        egui::Button::new(egui::RichText::new(icon).size(28.0).color(egui::Color32::WHITE))
            .min_size(egui::vec2(80.0, 80.0))
            .corner_radius(egui::CornerRadius::same(40))
            .fill(fill),
    )
}
