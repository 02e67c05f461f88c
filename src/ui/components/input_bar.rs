use eframe::egui;

use crate::ui::theme;

/// Returns `true` when the user asked to send the current text.
pub fn render(ui: &mut egui::Ui, input_text: &mut String) -> bool {
    let mut send = false;
    ui.horizontal(|ui| {
        ui.add(egui::Button::new("📎").frame(false))
            .on_hover_text("Прикрепить");

        let response = ui.add(
            egui::TextEdit::singleline(input_text)
                .hint_text("Написать сообщение...")
                .desired_width(ui.available_width() - 120.0),
        );
        ui.add(egui::Button::new("☺").frame(false));
        // Ghi âm chưa được hỗ trợ
        ui.add(egui::Button::new("🎤").fill(theme::PRIMARY));

        if ui.add(egui::Button::new("➤").fill(theme::PRIMARY)).clicked() {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
            response.request_focus();
        }
    });

    send && !input_text.trim().is_empty()
}
