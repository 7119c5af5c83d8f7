//! Inbox: chat list, conversation and customer profile panel.

use std::collections::BTreeMap;

use chrono::Local;
use log::debug;

use crate::domain::{ChatFilter, ChatItem, Customer, Message};

/// Time-away label set on a chat after the agent replies.
pub const JUST_NOW: &str = "Just now";

#[derive(Debug, Clone)]
pub struct Inbox {
    chats: Vec<ChatItem>,
    messages: BTreeMap<String, Vec<Message>>,
    customers: Vec<Customer>,
    selected_chat_id: Option<String>,
    search: String,
    filter: ChatFilter,
    /// Cursor into `filtered_chats()`.
    cursor: usize,
    pub profile_open: bool,
    /// Conversation lines scrolled up from the newest message.
    scroll_back: usize,
    next_message_id: u64,
}

impl Inbox {
    /// Starts with the first chat selected, when there is one.
    pub fn new(
        chats: Vec<ChatItem>,
        messages: BTreeMap<String, Vec<Message>>,
        customers: Vec<Customer>,
    ) -> Self {
        let selected_chat_id = chats.first().map(|chat| chat.id.clone());
        Self {
            chats,
            messages,
            customers,
            selected_chat_id,
            search: String::new(),
            filter: ChatFilter::All,
            cursor: 0,
            profile_open: false,
            scroll_back: 0,
            next_message_id: 1,
        }
    }

    pub fn chats(&self) -> &[ChatItem] {
        &self.chats
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filter(&self) -> ChatFilter {
        self.filter
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
        self.cursor = 0;
    }

    pub fn set_filter(&mut self, filter: ChatFilter) {
        self.filter = filter;
        self.cursor = 0;
    }

    pub fn cycle_filter(&mut self) {
        let next = match self.filter {
            ChatFilter::All => ChatFilter::Unread,
            ChatFilter::Unread => ChatFilter::Escalated,
            ChatFilter::Escalated => ChatFilter::All,
        };
        self.set_filter(next);
    }

    /// Chats matching the search text (name or last message) and filter.
    /// Escalation is not tracked yet, so `Escalated` matches like `All`.
    pub fn filtered_chats(&self) -> Vec<&ChatItem> {
        let needle = self.search.trim().to_lowercase();
        self.chats
            .iter()
            .filter(|chat| {
                let matches_search = needle.is_empty()
                    || chat.name.to_lowercase().contains(&needle)
                    || chat.last_message.to_lowercase().contains(&needle);
                match self.filter {
                    ChatFilter::Unread => matches_search && chat.unread > 0,
                    ChatFilter::All | ChatFilter::Escalated => matches_search,
                }
            })
            .collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.filtered_chats().len() {
            self.cursor += 1;
        }
    }

    /// Select the chat under the cursor.
    pub fn select_cursor(&mut self) -> bool {
        let Some(id) = self
            .filtered_chats()
            .get(self.cursor)
            .map(|chat| chat.id.clone())
        else {
            return false;
        };
        self.select_chat(&id)
    }

    /// Select a chat by id and clear its unread count.
    pub fn select_chat(&mut self, id: &str) -> bool {
        let Some(chat) = self.chats.iter_mut().find(|chat| chat.id == id) else {
            return false;
        };
        chat.unread = 0;
        self.selected_chat_id = Some(id.to_string());
        self.scroll_back = 0;
        debug!("inbox: selected chat {id}");
        true
    }

    pub fn selected_chat(&self) -> Option<&ChatItem> {
        let id = self.selected_chat_id.as_deref()?;
        self.chats.iter().find(|chat| chat.id == id)
    }

    pub fn conversation(&self) -> &[Message] {
        self.selected_chat_id
            .as_deref()
            .and_then(|id| self.messages.get(id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Customer behind the selected chat; chats share ids with customers.
    pub fn selected_customer(&self) -> Option<&Customer> {
        let id = self.selected_chat_id.as_deref()?;
        self.customers.iter().find(|customer| customer.id == id)
    }

    pub fn toggle_profile(&mut self) {
        self.profile_open = !self.profile_open;
    }

    pub fn unread_total(&self) -> u32 {
        self.chats.iter().map(|chat| chat.unread).sum()
    }

    /// Append an agent reply to the selected chat. Blank text is ignored.
    /// Returns the new message.
    pub fn send_message(&mut self, text: &str) -> Option<Message> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let chat_id = self.selected_chat_id.clone()?;
        let message = Message {
            id: format!("local_{}", self.next_message_id),
            content: text.to_string(),
            timestamp: Local::now().format("%H:%M").to_string(),
            is_agent: true,
        };
        self.next_message_id += 1;
        self.messages
            .entry(chat_id.clone())
            .or_default()
            .push(message.clone());
        if let Some(chat) = self.chats.iter_mut().find(|chat| chat.id == chat_id) {
            chat.last_message = text.to_string();
            chat.time_away = JUST_NOW.to_string();
        }
        self.scroll_back = 0;
        debug!("inbox: sent {} to {chat_id}", message.id);
        Some(message)
    }

    pub fn scroll_back(&self) -> usize {
        self.scroll_back
    }

    pub fn scroll_older(&mut self) {
        let limit = self.conversation().len().saturating_sub(1);
        self.scroll_back = (self.scroll_back + 1).min(limit);
    }

    pub fn scroll_newer(&mut self) {
        self.scroll_back = self.scroll_back.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Fixtures;

    fn inbox() -> Inbox {
        let fixtures = Fixtures::builtin();
        Inbox::new(fixtures.chats, fixtures.messages, fixtures.customers)
    }

    #[test]
    fn test_unread_filter_and_search() {
        let mut inbox = inbox();
        let unread = inbox.chats().iter().filter(|c| c.unread > 0).count();
        inbox.set_filter(ChatFilter::Unread);
        assert_eq!(inbox.filtered_chats().len(), unread);

        inbox.set_filter(ChatFilter::All);
        inbox.set_search("REFUND");
        let hits = inbox.filtered_chats();
        assert_eq!(hits.len(), 1);
        assert!(hits[0].last_message.contains("refund"));
    }

    #[test]
    fn test_scroll_is_bounded() {
        let mut inbox = inbox();
        let len = inbox.conversation().len();
        for _ in 0..10 {
            inbox.scroll_older();
        }
        assert_eq!(inbox.scroll_back(), len - 1);
        inbox.send_message("ok");
        assert_eq!(inbox.scroll_back(), 0);
        inbox.scroll_newer();
        assert_eq!(inbox.scroll_back(), 0);
    }

    #[test]
    fn test_message_ids_are_unique() {
        let mut inbox = inbox();
        let a = inbox.send_message("one").unwrap();
        let b = inbox.send_message("two").unwrap();
        assert_ne!(a.id, b.id);
        assert!(inbox.send_message(" \t").is_none());
    }
}
