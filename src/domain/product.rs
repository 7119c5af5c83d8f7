use serde::{Deserialize, Serialize};

use super::labeled::labeled_enum;
use super::money::Money;

/// Stock above this count is shown as healthy.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

labeled_enum! {
    pub enum StockLevel as "stock level" {
        InStock => ("in-stock", "In stock", Success),
        Low => ("low", "Low stock", Warning),
        Out => ("out", "Out of stock", Danger),
    }
}

impl StockLevel {
    pub fn for_count(stock: i64) -> Self {
        if stock > LOW_STOCK_THRESHOLD {
            StockLevel::InStock
        } else if stock > 0 {
            StockLevel::Low
        } else {
            StockLevel::Out
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub price: Money,
    pub stock: i64,
    pub category: String,
    pub description: String,
    pub sku: String,
}

impl Product {
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::for_count(self.stock)
    }
}
