use eframe::egui;

use crate::call::CallSettings;
use crate::storage::ChatStore;
use crate::ui::theme;

use super::avatar;

pub fn render_contacts(ui: &mut egui::Ui, store: &ChatStore) {
    ui.heading("Контакты");
    ui.separator();
    for chat in store.chats() {
        ui.horizontal(|ui| {
            avatar::render(ui, &chat.contact().initials, 32.0, chat.online);
            ui.label(&chat.name);
        });
        ui.add_space(6.0);
    }
}

pub fn render_archive(ui: &mut egui::Ui) {
    ui.heading("Архив");
    ui.separator();
    ui.label(egui::RichText::new("Архив пуст").weak());
}

pub fn render_settings(ui: &mut egui::Ui, settings: &CallSettings) {
    ui.heading("Настройки");
    ui.separator();
    egui::Grid::new("call_settings").num_columns(2).show(ui, |ui| {
        ui.label("Задержка соединения");
        ui.label(format!("{} мс", settings.ringing_delay.as_millis()));
        ui.end_row();

        ui.label("Шаг таймера");
        ui.label(format!("{} мс", settings.tick_interval.as_millis()));
        ui.end_row();

        ui.label("Превью камеры");
        ui.label(if settings.self_preview { "вкл" } else { "выкл" });
        ui.end_row();
    });
}

pub fn render_profile(ui: &mut egui::Ui, user_name: &str) {
    ui.heading("Профиль");
    ui.separator();
    ui.horizontal(|ui| {
        avatar::render(ui, &crate::common::types::initials(user_name), 56.0, true);
        ui.label(egui::RichText::new(user_name).size(18.0).strong().color(theme::PRIMARY));
    });
}
