use eframe::egui;

use crate::common::Chat;
use crate::ui::state::AppState;
use crate::ui::theme;

use super::avatar;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.add_space(12.0);
    ui.horizontal(|ui| {
        ui.heading(egui::RichText::new("Чаты").strong().color(theme::PRIMARY));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Tạo chat mới chưa được hỗ trợ
            ui.add(egui::Button::new("➕").frame(false))
                .on_hover_text("Новый чат");
        });
    });
    ui.add_space(8.0);
    ui.add(
        egui::TextEdit::singleline(&mut state.search_text)
            .hint_text("🔍 Поиск...")
            .desired_width(f32::INFINITY),
    );
    ui.separator();

    let mut clicked = None;
    egui::ScrollArea::vertical().show(ui, |ui| {
        let chats = state.store.search(&state.search_text);
        if chats.is_empty() {
            ui.label(egui::RichText::new("Ничего не найдено").weak());
        }
        for chat in chats {
            let selected = state.selected_chat == Some(chat.id);
            if render_row(ui, chat, selected).clicked() {
                clicked = Some(chat.id);
            }
        }
    });

    if let Some(chat_id) = clicked {
        state.select_chat(chat_id);
    }
}

fn render_row(ui: &mut egui::Ui, chat: &Chat, selected: bool) -> egui::Response {
    let frame = egui::Frame::new()
        .fill(if selected {
            theme::SELECTED
        } else {
            egui::Color32::TRANSPARENT
        })
        .corner_radius(egui::CornerRadius::same(14))
        .inner_margin(egui::Margin::same(10));

    let inner = frame.show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            avatar::render(ui, &chat.contact().initials, 44.0, chat.online);
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&chat.name).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(&chat.time).small().weak());
                    });
                });
                ui.horizontal(|ui| {
                    ui.add(egui::Label::new(egui::RichText::new(&chat.last_message).weak()).truncate());
                    if chat.unread > 0 {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            badge(ui, chat.unread);
                        });
                    }
                });
            });
        });
    });

    ui.interact(
        inner.response.rect,
        ui.id().with(("chat_row", chat.id)),
        egui::Sense::click(),
    )
}

fn badge(ui: &mut egui::Ui, count: u32) {
    egui::Frame::new()
        .fill(theme::PRIMARY)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(6, 1))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(count.to_string())
                    .small()
                    .color(egui::Color32::WHITE),
            );
        });
}
