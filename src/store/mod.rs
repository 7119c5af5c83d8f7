//! Fixture data source.
//!
//! Every screen receives its collection from a [`Fixtures`] value built at
//! startup, either the built-in mock set or a JSON file. Swapping in another
//! source only means producing a `Fixtures`.

mod mock;

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{ChatItem, Customer, Message, Notification, Order, Product};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("read fixtures {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse fixtures {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate {collection} id {id:?}")]
    DuplicateId {
        collection: &'static str,
        id: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixtures {
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub orders: Vec<Order>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub chats: Vec<ChatItem>,
    /// Conversation history keyed by chat id.
    #[serde(default)]
    pub messages: BTreeMap<String, Vec<Message>>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl Fixtures {
    /// The built-in mock dataset.
    pub fn builtin() -> Self {
        mock::fixtures()
    }

    /// Load fixtures from a JSON file. Unknown status/type values and
    /// duplicate ids are rejected rather than rendered blank.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: display.clone(),
            source,
        })?;
        let fixtures = Self::from_json(&content).map_err(|source| StoreError::Json {
            path: display.clone(),
            source,
        })?;
        fixtures.validate()?;
        info!(
            "loaded fixtures from {display}: {} customers, {} orders, {} products",
            fixtures.customers.len(),
            fixtures.orders.len(),
            fixtures.products.len()
        );
        Ok(fixtures)
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let mut fixtures: Self = serde_json::from_str(content)?;
        fixtures.fill_avatars();
        Ok(fixtures)
    }

    /// Give records without an avatar the initials of their name.
    fn fill_avatars(&mut self) {
        for customer in self.customers.iter_mut().filter(|c| c.avatar.is_empty()) {
            customer.avatar = Customer::initials(&customer.name);
        }
        for chat in self.chats.iter_mut().filter(|c| c.avatar.is_empty()) {
            chat.avatar = Customer::initials(&chat.name);
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), StoreError> {
        unique_ids("customer", self.customers.iter().map(|c| c.id.as_str()))?;
        unique_ids("order", self.orders.iter().map(|o| o.id.as_str()))?;
        unique_ids("product", self.products.iter().map(|p| p.id.as_str()))?;
        unique_ids("chat", self.chats.iter().map(|c| c.id.as_str()))?;
        unique_ids("notification", self.notifications.iter().map(|n| n.id.as_str()))?;
        Ok(())
    }

    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id == id)
    }
}

fn unique_ids<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), StoreError> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(StoreError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let fixtures = Fixtures::builtin();
        fixtures.validate().unwrap();
        assert!(fixtures.customers.len() > 10);
        assert!(fixtures.orders.len() > 10);
        assert!(!fixtures.products.is_empty());
        assert!(!fixtures.chats.is_empty());
        for chat in &fixtures.chats {
            assert!(fixtures.customer(&chat.id).is_some(), "chat {} has no customer", chat.id);
        }
    }

    #[test]
    fn test_json_round_trip_keeps_wire_keys() {
        let fixtures = Fixtures::builtin();
        let json = fixtures.to_json().unwrap();
        assert!(json.contains("\"totalSpent\""));
        assert!(json.contains("\"paymentStatus\""));
        let back = Fixtures::from_json(&json).unwrap();
        assert_eq!(back, fixtures);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let json = r#"{"notifications":[{"id":"n1","title":"t","description":"d",
            "timestamp":"now","read":false,"type":"urgent"}]}"#;
        let err = Fixtures::from_json(json).unwrap_err();
        assert!(err.to_string().contains("unknown notification type value"));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut fixtures = Fixtures::builtin();
        let first = fixtures.customers[0].clone();
        fixtures.customers.push(first);
        let err = fixtures.validate().unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId { collection: "customer", .. }));
    }

    #[test]
    fn test_missing_avatar_uses_initials() {
        let json = r#"{"customers":[{"id":"c1","name":"Ada Obi","email":"a@x.io",
            "phone":"1","joinDate":"2024-01-01","totalOrders":1,"totalSpent":100,
            "lastPurchase":"2024-01-02","status":"active"}],
            "chats":[{"id":"c1","name":"Ada Obi","lastMessage":"hi","timeAway":"now",
            "unread":0,"channel":"sms"}]}"#;
        let fixtures = Fixtures::from_json(json).unwrap();
        assert_eq!(fixtures.customers[0].avatar, "AO");
        assert_eq!(fixtures.chats[0].avatar, "AO");
    }

    #[test]
    fn test_missing_collections_default_empty() {
        let fixtures = Fixtures::from_json("{}").unwrap();
        assert!(fixtures.customers.is_empty());
        assert!(fixtures.messages.is_empty());
    }
}
