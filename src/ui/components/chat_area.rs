use eframe::egui;

use crate::common::{CallCommand, CallKind, Chat, Message, MessageKind};
use crate::ui::theme;

use super::avatar;

const WAVEFORM_BARS: u32 = 20;

/// Header của hội thoại: danh tính, trạng thái và các nút gọi.
pub fn render_header(ui: &mut egui::Ui, chat: &Chat) -> Option<CallCommand> {
    let mut command = None;
    let contact = chat.contact();

    ui.horizontal(|ui| {
        avatar::render(ui, &contact.initials, 48.0, false);
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&chat.name).size(18.0).strong());
            if chat.online {
                ui.colored_label(theme::ONLINE, "● онлайн");
            } else {
                ui.label(egui::RichText::new("не в сети").weak());
            }
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.menu_button("⋮", |ui| {
                for kind in [CallKind::Voice, CallKind::Video] {
                    let label = format!("Входящий: {}", kind.label().to_lowercase());
                    if ui.button(label).clicked() {
                        command = Some(CallCommand::Ring {
                            contact: contact.clone(),
                            kind,
                        });
                        ui.close();
                    }
                }
            });
            if ui.button("🎥").on_hover_text(CallKind::Video.label()).clicked() {
                command = Some(CallCommand::Start {
                    contact: contact.clone(),
                    kind: CallKind::Video,
                });
            }
            if ui.button("📞").on_hover_text(CallKind::Voice.label()).clicked() {
                command = Some(CallCommand::Start {
                    contact: contact.clone(),
                    kind: CallKind::Voice,
                });
            }
        });
    });

    command
}

pub fn render_messages(ui: &mut egui::Ui, messages: &[Message], initials: &str) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            if messages.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label(egui::RichText::new("Сообщений пока нет").weak());
                });
                return;
            }
            for message in messages {
                render_message(ui, message, initials);
                ui.add_space(10.0);
            }
        });
}

fn render_message(ui: &mut egui::Ui, message: &Message, initials: &str) {
    let layout = if message.is_mine() {
        egui::Layout::right_to_left(egui::Align::Max)
    } else {
        egui::Layout::left_to_right(egui::Align::Max)
    };

    ui.with_layout(layout, |ui| {
        if !message.is_mine() {
            avatar::render(ui, initials, 30.0, false);
        }

        ui.vertical(|ui| {
            let fill = if message.is_mine() {
                theme::PRIMARY
            } else {
                theme::CARD
            };
            egui::Frame::new()
                .fill(fill)
                .corner_radius(egui::CornerRadius::same(16))
                .inner_margin(egui::Margin::symmetric(14, 10))
                .show(ui, |ui| {
                    ui.set_max_width(420.0);
                    match message.kind {
                        MessageKind::Text => {
                            ui.label(&message.text);
                        }
                        MessageKind::Voice => render_voice(ui, message),
                    }
                });
            ui.label(egui::RichText::new(&message.time).small().weak());
        });
    });
}

fn render_voice(ui: &mut egui::Ui, message: &Message) {
    ui.horizontal(|ui| {
        // Chưa phát được âm thanh, chỉ là nút hiển thị
        ui.add(egui::Button::new("▶").frame(false));

        let bar_color = egui::Color32::from_white_alpha(150);
        for index in 0..WAVEFORM_BARS {
            let height = bar_height(message.id, index);
            let (rect, _) = ui.allocate_exact_size(egui::vec2(3.0, 24.0), egui::Sense::hover());
            let bar = egui::Rect::from_center_size(rect.center(), egui::vec2(3.0, height));
            ui.painter().rect_filled(bar, egui::CornerRadius::same(1), bar_color);
        }

        if let Some(duration) = &message.duration {
            ui.label(egui::RichText::new(duration).small().strong());
        }
    });
}

/// Stable pseudo-random bar height in 8..24 px.
fn bar_height(message_id: u32, index: u32) -> f32 {
    let seed = message_id.wrapping_mul(31).wrapping_add(index.wrapping_mul(17));
    8.0 + (seed % 16) as f32
}

pub fn render_placeholder(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.label(egui::RichText::new("💬").size(48.0).color(theme::PRIMARY));
        ui.add_space(12.0);
        ui.heading("Выберите чат");
        ui.label(egui::RichText::new("Выберите чат из списка, чтобы начать общение").weak());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waveform_bars_stay_in_range() {
        for id in 0..10 {
            for index in 0..WAVEFORM_BARS {
                let height = bar_height(id, index);
                assert!((8.0..24.0).contains(&height));
            }
        }
        assert_eq!(bar_height(5, 3), bar_height(5, 3));
    }
}
