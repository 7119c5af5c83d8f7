//! Entity records shown by the console.
//!
//! Records are plain values. Enum fields that drive a badge implement
//! [`Labeled`] so their label and tone come from a single lookup.

pub mod chat;
pub mod customer;
pub mod labeled;
pub mod money;
pub mod notification;
pub mod order;
pub mod product;

pub use chat::{Channel, ChatFilter, ChatItem, Message};
pub use customer::{Customer, CustomerStatus};
pub use labeled::{Badge, Labeled, Tone, UnknownVariant};
pub use money::Money;
pub use notification::{Notification, NotificationKind};
pub use order::{Order, OrderItem, OrderStatus, PaymentStatus};
pub use product::{Product, StockLevel};
