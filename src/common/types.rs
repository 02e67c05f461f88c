/// Tóm tắt một cuộc hội thoại trong danh sách chat bên trái.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: u32,
    pub name: String,
    /// Đường dẫn ảnh đại diện; rỗng thì hiển thị chữ cái đầu.
    pub avatar: String,
    pub last_message: String,
    pub time: String,
    pub unread: u32,
    pub online: bool,
}

impl Chat {
    pub fn contact(&self) -> Contact {
        Contact::new(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Me,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Text,
    Voice,
}

/// Domain model đại diện một tin nhắn trong hội thoại.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: u32,
    pub sender: Sender,
    pub text: String,
    pub time: String,
    pub kind: MessageKind,
    /// Chỉ có với tin nhắn thoại, ví dụ "0:42".
    pub duration: Option<String>,
}

impl Message {
    pub fn text(id: u32, sender: Sender, text: &str, time: &str) -> Self {
        Self {
            id,
            sender,
            text: text.to_string(),
            time: time.to_string(),
            kind: MessageKind::Text,
            duration: None,
        }
    }

    pub fn voice(id: u32, sender: Sender, time: &str, duration: &str) -> Self {
        Self {
            id,
            sender,
            text: String::new(),
            time: time.to_string(),
            kind: MessageKind::Voice,
            duration: Some(duration.to_string()),
        }
    }

    pub fn is_mine(&self) -> bool {
        self.sender == Sender::Me
    }
}

/// Danh tính hiển thị của người ở đầu bên kia cuộc gọi.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub initials: String,
}

impl Contact {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            initials: initials(name),
        }
    }
}

/// First character of every word, e.g. "Анна Иванова" -> "АИ".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CallKind {
    Voice,
    Video,
}

impl CallKind {
    pub fn is_video(self) -> bool {
        self == CallKind::Video
    }

    pub fn label(self) -> &'static str {
        match self {
            CallKind::Voice => "Голосовой звонок",
            CallKind::Video => "Видеозвонок",
        }
    }
}

/// Mục trên thanh điều hướng bên trái.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavView {
    #[default]
    Chats,
    Contacts,
    Archive,
    Settings,
    Profile,
}

impl NavView {
    pub const ALL: [NavView; 5] = [
        NavView::Chats,
        NavView::Contacts,
        NavView::Archive,
        NavView::Settings,
        NavView::Profile,
    ];

    pub fn icon(self) -> &'static str {
        match self {
            NavView::Chats => "💬",
            NavView::Contacts => "👥",
            NavView::Archive => "🗄",
            NavView::Settings => "⚙",
            NavView::Profile => "👤",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavView::Chats => "Чаты",
            NavView::Contacts => "Контакты",
            NavView::Archive => "Архив",
            NavView::Settings => "Настройки",
            NavView::Profile => "Профиль",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_letter_of_each_word() {
        assert_eq!(initials("Анна Иванова"), "АИ");
        assert_eq!(initials("Группа  проекта"), "Гп");
        assert_eq!(initials("Solo"), "S");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn voice_message_carries_duration() {
        let message = Message::voice(5, Sender::Me, "14:33", "0:42");
        assert_eq!(message.kind, MessageKind::Voice);
        assert_eq!(message.duration.as_deref(), Some("0:42"));
        assert!(message.text.is_empty());
        assert!(message.is_mine());
    }
}
