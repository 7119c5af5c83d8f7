use serde::{Deserialize, Serialize};

use super::labeled::labeled_enum;

labeled_enum! {
    pub enum NotificationKind as "notification type" {
        Info => ("info", "Info", Info),
        Warning => ("warning", "Warning", Warning),
        Success => ("success", "Success", Success),
        Order => ("order", "Order", Accent),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub description: String,
    pub timestamp: String,
    pub read: bool,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
}
