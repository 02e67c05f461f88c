use std::time::Duration;

use eframe::egui;

use crate::common::{CallCommand, NavView};

use super::components::{
    call_view, chat_area, chat_list, incoming_call, input_bar, nav_rail, side_views,
};
use super::state::{AppState, CallLauncher, Overlay};

pub struct MessengerApp {
    state: AppState,
    launcher: CallLauncher,
    user_name: String,
}

impl MessengerApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        state: AppState,
        launcher: CallLauncher,
        user_name: String,
    ) -> Self {
        Self {
            state,
            launcher,
            user_name,
        }
    }

    fn dispatch(&mut self, command: Option<CallCommand>) {
        if let Some(command) = command {
            self.state.handle_call_command(command, &self.launcher);
        }
    }

    fn send_message(&mut self) {
        let time = chrono::Local::now().format("%H:%M").to_string();
        if !self.state.send_input(time) {
            log::debug!("Nothing to send");
        }
    }

    fn render_overlay(&mut self, ctx: &egui::Context) {
        let command = egui::CentralPanel::default()
            .show(ctx, |ui| match &self.state.overlay {
                Overlay::Incoming { contact, kind } => incoming_call::render(ui, contact, *kind),
                Overlay::Active(session) => call_view::render(ui, session),
                Overlay::None => None,
            })
            .inner;
        self.dispatch(command);
    }

    fn render_main(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("nav_rail")
            .resizable(false)
            .exact_width(72.0)
            .show(ctx, |ui| {
                nav_rail::render(ui, &mut self.state.active_view);
            });

        let view = self.state.active_view;
        egui::SidePanel::left("chat_list")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| match view {
                NavView::Chats => chat_list::render(ui, &mut self.state),
                NavView::Contacts => side_views::render_contacts(ui, &self.state.store),
                NavView::Archive => side_views::render_archive(ui),
                NavView::Settings => {
                    side_views::render_settings(ui, &self.launcher.settings());
                }
                NavView::Profile => side_views::render_profile(ui, &self.user_name),
            });

        let Some(chat) = self.state.selected().cloned() else {
            egui::CentralPanel::default().show(ctx, chat_area::render_placeholder);
            return;
        };

        let header_command = egui::TopBottomPanel::top("chat_header")
            .exact_height(72.0)
            .show(ctx, |ui| chat_area::render_header(ui, &chat))
            .inner;

        let send = egui::TopBottomPanel::bottom("input_bar")
            .exact_height(64.0)
            .show(ctx, |ui| {
                ui.add_space(16.0);
                input_bar::render(ui, &mut self.state.input_text)
            })
            .inner;

        egui::CentralPanel::default().show(ctx, |ui| {
            let initials = chat.contact().initials;
            chat_area::render_messages(ui, self.state.store.messages(chat.id), &initials);
        });

        if send {
            self.send_message();
        }
        self.dispatch(header_command);
    }
}

impl eframe::App for MessengerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll_call();

        if self.state.overlay.is_none() {
            self.render_main(ctx);
        } else {
            self.render_overlay(ctx);
            // Timer chạy ở task nền, cần vẽ lại để thấy giây mới
            ctx.request_repaint_after(Duration::from_millis(200));
        }
    }
}
