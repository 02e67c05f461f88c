use std::collections::HashMap;

use crate::common::{Chat, Message, Sender};

use super::sample;

/// In-memory store of chats and their conversations. Nothing is persisted.
pub struct ChatStore {
    chats: Vec<Chat>,
    conversations: HashMap<u32, Vec<Message>>,
}

impl ChatStore {
    pub fn new(chats: Vec<Chat>) -> Self {
        Self {
            chats,
            conversations: HashMap::new(),
        }
    }

    /// Store seeded with the sample chats and the conversation of chat 1.
    pub fn sample() -> Self {
        let mut store = Self::new(sample::chats());
        store
            .conversations
            .insert(sample::SEEDED_CHAT_ID, sample::messages());
        store
    }

    pub fn chats(&self) -> &[Chat] {
        &self.chats
    }

    pub fn chat(&self, id: u32) -> Option<&Chat> {
        self.chats.iter().find(|chat| chat.id == id)
    }

    pub fn messages(&self, chat_id: u32) -> &[Message] {
        self.conversations
            .get(&chat_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Chats whose name or preview contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&Chat> {
        let query = query.trim().to_lowercase();
        self.chats
            .iter()
            .filter(|chat| {
                query.is_empty()
                    || chat.name.to_lowercase().contains(&query)
                    || chat.last_message.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Appends a local text message. Returns `None` for blank input or an unknown chat.
    pub fn push_text(&mut self, chat_id: u32, text: &str, time: String) -> Option<&Message> {
        let text = text.trim();
        if text.is_empty() || self.chat(chat_id).is_none() {
            return None;
        }

        let conversation = self.conversations.entry(chat_id).or_default();
        let id = conversation.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        conversation.push(Message::text(id, Sender::Me, text, &time));
        conversation.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::MessageKind;

    #[test]
    fn sample_store_keeps_array_order() {
        let store = ChatStore::sample();
        let ids: Vec<u32> = store.chats().iter().map(|chat| chat.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(store.messages(1).len(), 5);
        assert_eq!(store.messages(1)[4].kind, MessageKind::Voice);
        assert!(store.messages(2).is_empty());
    }

    #[test]
    fn empty_search_returns_everything() {
        let store = ChatStore::sample();
        assert_eq!(store.search("").len(), 5);
        assert_eq!(store.search("   ").len(), 5);
    }

    #[test]
    fn search_matches_name_and_preview_case_insensitive() {
        let store = ChatStore::sample();
        let by_name: Vec<u32> = store.search("мария").iter().map(|c| c.id).collect();
        assert_eq!(by_name, vec![4]);

        let by_preview: Vec<u32> = store.search("ФАЙЛ").iter().map(|c| c.id).collect();
        assert_eq!(by_preview, vec![5]);

        assert!(store.search("nobody").is_empty());
    }

    #[test]
    fn push_text_appends_with_next_id() {
        let mut store = ChatStore::sample();
        let message = store
            .push_text(1, "  новое  ", "15:00".to_string())
            .cloned()
            .unwrap();
        assert_eq!(message.id, 6);
        assert_eq!(message.text, "новое");
        assert_eq!(message.sender, Sender::Me);
        assert_eq!(store.messages(1).len(), 6);

        let first = store.push_text(2, "hi", "15:01".to_string()).cloned().unwrap();
        assert_eq!(first.id, 1);
    }

    #[test]
    fn push_text_ignores_blank_and_unknown_chat() {
        let mut store = ChatStore::sample();
        assert!(store.push_text(1, "   ", "15:00".to_string()).is_none());
        assert!(store.push_text(42, "hi", "15:00".to_string()).is_none());
        assert_eq!(store.messages(1).len(), 5);
    }

    #[test]
    fn unread_counts_are_left_untouched() {
        let mut store = ChatStore::sample();
        store.push_text(1, "ok", "15:00".to_string());
        assert_eq!(store.chat(1).unwrap().unread, 3);
    }
}
