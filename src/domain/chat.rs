use serde::{Deserialize, Serialize};

use super::labeled::labeled_enum;

/// One conversation in the inbox list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    pub last_message: String,
    /// Relative time label such as "5m ago" or "Just now".
    pub time_away: String,
    pub unread: u32,
    #[serde(default)]
    pub channel: Channel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub content: String,
    pub timestamp: String,
    pub is_agent: bool,
}

labeled_enum! {
    /// Inbox list filter.
    pub enum ChatFilter as "chat filter" {
        All => ("all", "All", Muted),
        Unread => ("unread", "Unread", Info),
        Escalated => ("escalated", "Escalated", Warning),
    }
}

labeled_enum! {
    /// Messaging channel a conversation arrived on.
    pub enum Channel as "channel" {
        WhatsApp => ("whatsapp", "WhatsApp", Success),
        Instagram => ("instagram", "Instagram", Accent),
        Facebook => ("facebook", "Facebook", Info),
        Sms => ("sms", "SMS", Muted),
    }
}

impl Default for Channel {
    fn default() -> Self {
        Channel::WhatsApp
    }
}
