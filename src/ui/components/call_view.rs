use eframe::egui;

use crate::call::CallSession;
use crate::common::CallCommand;
use crate::ui::theme;

use super::avatar;
use super::incoming_call::round_button;

pub fn render(ui: &mut egui::Ui, session: &CallSession) -> Option<CallCommand> {
    let mut command = None;
    let controls_height = 120.0;

    let stage = egui::vec2(
        ui.available_width(),
        stage_height(ui.available_height(), controls_height),
    );
    ui.allocate_ui(stage, |ui| {
        ui.set_min_size(stage);
        if session.state().kind().is_video() {
            if render_video_stage(ui, session) {
                command = Some(CallCommand::End);
            }
        } else {
            render_voice_stage(ui, session);
        }
    });

    ui.separator();
    if let Some(control) = render_controls(ui, session) {
        command = Some(control);
    }
    command
}

/// Space left above the control bar; zero on very short windows.
fn stage_height(available: f32, controls_height: f32) -> f32 {
    (available - controls_height).max(0.0)
}

/// Returns `true` when the minimize button was pressed.
fn render_video_stage(ui: &mut egui::Ui, session: &CallSession) -> bool {
    let state = session.state();
    let mut minimize = false;

    ui.horizontal(|ui| {
        egui::Frame::new()
            .fill(theme::CARD)
            .corner_radius(egui::CornerRadius::same(14))
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.label(egui::RichText::new(&state.contact().name).strong());
                ui.colored_label(theme::ONLINE, format!("● {}", state.duration_label()));
            });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            if ui.button("🗕").on_hover_text("Свернуть").clicked() {
                minimize = true;
            }
        });
    });

    if state.is_connecting() {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 6.0);
            avatar::render(ui, &state.contact().initials, 128.0, false);
            ui.add_space(16.0);
            ui.label(egui::RichText::new(&state.contact().name).size(28.0).strong());
            ui.label(egui::RichText::new("Соединение...").size(16.0).weak());
        });
    }

    // Ô xem trước camera của mình ở góc dưới bên phải
    ui.with_layout(egui::Layout::bottom_up(egui::Align::Max), |ui| {
        egui::Frame::new()
            .fill(if state.camera_off() {
                theme::PRIMARY
            } else {
                theme::MUTED
            })
            .corner_radius(egui::CornerRadius::same(14))
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.set_min_size(egui::vec2(176.0, 120.0));
                ui.centered_and_justified(|ui| {
                    if state.camera_off() {
                        ui.label(egui::RichText::new("🚫📷").size(28.0));
                    } else {
                        match session.preview() {
                            Some(stream) => ui.label(format!("📷 {}", stream.label())),
                            None => ui.label(egui::RichText::new("Нет камеры").weak()),
                        };
                    }
                });
            });
    });

    minimize
}

fn render_voice_stage(ui: &mut egui::Ui, session: &CallSession) {
    let state = session.state();
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 6.0);
        avatar::render(ui, &state.contact().initials, 180.0, false);
        ui.add_space(8.0);
        ui.colored_label(theme::ONLINE, format!("● {}", state.duration_label()));
        ui.add_space(16.0);
        ui.label(egui::RichText::new(&state.contact().name).size(34.0).strong());
        let status = if state.is_connecting() {
            "Соединение..."
        } else {
            "Голосовой звонок"
        };
        ui.label(egui::RichText::new(status).size(18.0).weak());
    });
}

fn render_controls(ui: &mut egui::Ui, session: &CallSession) -> Option<CallCommand> {
    let state = session.state();
    let mut command = None;

    let toggle_fill = |active: bool| if active { theme::DESTRUCTIVE } else { theme::MUTED };

    ui.horizontal_centered(|ui| {
        let buttons = if state.kind().is_video() { 5.0 } else { 4.0 };
        ui.add_space((ui.available_width() - buttons * 96.0).max(0.0) / 2.0);

        let mic = if state.muted() { "🔇" } else { "🎤" };
        if round_button(ui, mic, toggle_fill(state.muted())).clicked() {
            command = Some(CallCommand::ToggleMute);
        }

        if state.kind().is_video() {
            let camera = if state.camera_off() { "🚫" } else { "🎥" };
            if round_button(ui, camera, toggle_fill(state.camera_off())).clicked() {
                command = Some(CallCommand::ToggleCamera);
            }
        }

        if round_button(ui, "📵", theme::DESTRUCTIVE).clicked() {
            command = Some(CallCommand::End);
        }

        let speaker_fill = if state.speaker_on() {
            theme::PRIMARY
        } else {
            theme::MUTED
        };
        if round_button(ui, "🔊", speaker_fill).clicked() {
            command = Some(CallCommand::ToggleSpeaker);
        }

        round_button(ui, "⋮", theme::MUTED);
    });

    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_height_never_goes_negative() {
        assert_eq!(stage_height(780.0, 120.0), 660.0);
        assert_eq!(stage_height(120.0, 120.0), 0.0);
        assert_eq!(stage_height(80.0, 120.0), 0.0);
    }
}
