//! Xoro: a terminal admin console for a small commerce business.
//!
//! Customers, orders, products, customer conversations and notifications,
//! browsed through paginated tables and detail views.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod modules;
pub mod store;
pub mod table;
pub mod ui;
