use super::types::{CallKind, Contact};

/// Lệnh do các component UI trả về để `MessengerApp` xử lý.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallCommand {
    /// Gọi đi từ header của hội thoại.
    Start { contact: Contact, kind: CallKind },
    /// Giả lập một cuộc gọi đến.
    Ring { contact: Contact, kind: CallKind },
    Accept,
    Decline,
    End,
    ToggleMute,
    ToggleCamera,
    ToggleSpeaker,
}
