use crate::common::{Chat, Message, Sender};

/// Id của chat duy nhất có sẵn lịch sử tin nhắn.
pub const SEEDED_CHAT_ID: u32 = 1;

fn chat(id: u32, name: &str, last_message: &str, time: &str, unread: u32, online: bool) -> Chat {
    Chat {
        id,
        name: name.to_string(),
        avatar: String::new(),
        last_message: last_message.to_string(),
        time: time.to_string(),
        unread,
        online,
    }
}

pub fn chats() -> Vec<Chat> {
    vec![
        chat(1, "Анна Иванова", "Привет! Как дела?", "14:32", 3, true),
        chat(2, "Команда разработки", "Созвон в 15:00", "13:10", 0, false),
        chat(3, "Максим Петров", "Голосовое сообщение", "12:45", 1, true),
        chat(4, "Мария Сидорова", "Спасибо за помощь!", "Вчера", 0, false),
        chat(5, "Группа проекта", "Файл отправлен", "Вчера", 5, false),
    ]
}

pub fn messages() -> Vec<Message> {
    vec![
        Message::text(1, Sender::Other, "Привет! Как дела?", "14:30"),
        Message::text(2, Sender::Me, "Отлично! Работаю над новым проектом", "14:31"),
        Message::text(3, Sender::Other, "Звучит интересно! Расскажешь?", "14:32"),
        Message::text(4, Sender::Me, "Конечно, сейчас записал голосовое", "14:32"),
        Message::voice(5, Sender::Me, "14:33", "0:42"),
    ]
}
