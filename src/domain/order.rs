use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::labeled::labeled_enum;
use super::money::Money;

labeled_enum! {
    /// Fulfilment state of an order.
    pub enum OrderStatus as "order status" {
        Pending => ("pending", "Pending", Warning),
        Processing => ("processing", "Processing", Info),
        Shipped => ("shipped", "Shipped", Accent),
        Delivered => ("delivered", "Delivered", Success),
        Cancelled => ("cancelled", "Cancelled", Danger),
    }
}

labeled_enum! {
    pub enum PaymentStatus as "payment status" {
        Paid => ("paid", "Paid", Success),
        Unpaid => ("unpaid", "Unpaid", Danger),
        Refunded => ("refunded", "Refunded", Muted),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    /// Unit price.
    pub price: Money,
}

impl OrderItem {
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }
}

/// An order. Customer name and email are copied onto the order when it is
/// created; nothing resolves them against the customer collection later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub items: Vec<OrderItem>,
    pub total_amount: Money,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub order_date: NaiveDate,
    pub shipping_address: String,
}

impl Order {
    /// "1 item" / "3 items".
    pub fn items_label(&self) -> String {
        let count = self.items.len();
        if count == 1 {
            "1 item".to_string()
        } else {
            format!("{count} items")
        }
    }

    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }
}
