use std::sync::Arc;

use tokio::runtime::Handle;

use crate::call::{CallSession, CallSettings, MediaDevices};
use crate::common::{CallCommand, CallKind, Chat, Contact, NavView};
use crate::storage::ChatStore;

/// Những gì cần để mở một cuộc gọi mới.
pub struct CallLauncher {
    runtime: Handle,
    settings: CallSettings,
    media: Arc<dyn MediaDevices>,
}

impl CallLauncher {
    pub fn new(runtime: Handle, settings: CallSettings, media: Arc<dyn MediaDevices>) -> Self {
        Self {
            runtime,
            settings,
            media,
        }
    }

    pub fn settings(&self) -> CallSettings {
        self.settings
    }

    fn launch(&self, contact: Contact, kind: CallKind) -> CallSession {
        CallSession::start(
            &self.runtime,
            contact,
            kind,
            self.settings,
            Arc::clone(&self.media),
        )
    }
}

/// Overlay toàn màn hình phía trên giao diện chat.
pub enum Overlay {
    None,
    Incoming { contact: Contact, kind: CallKind },
    Active(CallSession),
}

impl Overlay {
    pub fn is_none(&self) -> bool {
        matches!(self, Overlay::None)
    }
}

/// Trạng thái cục bộ của UI.
pub struct AppState {
    pub store: ChatStore,
    pub active_view: NavView,
    pub selected_chat: Option<u32>,
    pub input_text: String,
    pub search_text: String,
    pub overlay: Overlay,
}

impl AppState {
    pub fn new(store: ChatStore) -> Self {
        let selected_chat = store.chats().first().map(|chat| chat.id);
        Self {
            store,
            active_view: NavView::default(),
            selected_chat,
            input_text: String::new(),
            search_text: String::new(),
            overlay: Overlay::None,
        }
    }

    pub fn select_chat(&mut self, chat_id: u32) {
        if self.store.chat(chat_id).is_some() {
            self.selected_chat = Some(chat_id);
        } else {
            log::warn!("Ignoring selection of unknown chat {chat_id}");
        }
    }

    pub fn selected(&self) -> Option<&Chat> {
        self.selected_chat.and_then(|id| self.store.chat(id))
    }

    /// Sends the input box content to the selected chat. Returns whether a message was added.
    pub fn send_input(&mut self, time: String) -> bool {
        let Some(chat_id) = self.selected_chat else {
            return false;
        };
        let sent = self
            .store
            .push_text(chat_id, &self.input_text, time)
            .is_some();
        if sent {
            self.input_text.clear();
        }
        sent
    }

    pub fn handle_call_command(&mut self, command: CallCommand, launcher: &CallLauncher) {
        match command {
            CallCommand::Start { contact, kind } => {
                self.overlay = Overlay::Active(launcher.launch(contact, kind));
            }
            CallCommand::Ring { contact, kind } => {
                log::info!("Incoming {kind:?} call from {}", contact.name);
                self.overlay = Overlay::Incoming { contact, kind };
            }
            CallCommand::Accept => {
                match std::mem::replace(&mut self.overlay, Overlay::None) {
                    Overlay::Incoming { contact, kind } => {
                        self.overlay = Overlay::Active(launcher.launch(contact, kind));
                    }
                    other => self.overlay = other,
                }
            }
            CallCommand::Decline => {
                if let Overlay::Incoming { contact, .. } = &self.overlay {
                    log::info!("Declined call from {}", contact.name);
                    self.overlay = Overlay::None;
                }
            }
            CallCommand::End => {
                // drop tears down timers and the preview stream
                self.overlay = Overlay::None;
            }
            CallCommand::ToggleMute => self.with_session(CallSession::toggle_mute),
            CallCommand::ToggleCamera => self.with_session(CallSession::toggle_camera),
            CallCommand::ToggleSpeaker => self.with_session(CallSession::toggle_speaker),
        }
    }

    fn with_session(&mut self, action: impl FnOnce(&mut CallSession)) {
        if let Overlay::Active(session) = &mut self.overlay {
            action(session);
        }
    }

    pub fn poll_call(&mut self) {
        if let Overlay::Active(session) = &mut self.overlay {
            session.handle_events();
        }
    }
}
