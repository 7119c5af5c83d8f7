//! Screen modules
//!
//! Each module owns the state of one screen and returns plain values or
//! [`crate::core::Action`]s; drawing lives in `ui`.
//!
//! Modules:
//! - customers / orders: entity table configuration and search
//! - products: catalog cards and product detail
//! - inbox: chat list, conversation, profile panel
//! - notifications: notification drawer
//! - dashboard: metric cards, channel distribution, revenue trend
//! - export: `:export csv|json` of the active table

pub mod customers;
pub mod dashboard;
pub mod export;
pub mod inbox;
pub mod notifications;
pub mod orders;
pub mod products;
