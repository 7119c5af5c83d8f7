//! Orders table: column configuration and search.

use crate::domain::{Labeled, Order};
use crate::table::{Cell, ColumnDescriptor, EntityTable, RowAction, Searchable};

pub type OrderTable = EntityTable<Order>;

pub fn order_row_id(order: &Order) -> String {
    order.id.clone()
}

pub fn order_columns() -> Vec<ColumnDescriptor<Order>> {
    vec![
        ColumnDescriptor::new("orderNumber", "Order", 12, |o: &Order| {
            Cell::Strong(o.order_number.clone())
        }),
        ColumnDescriptor::new("customerName", "Customer", 30, |o: &Order| Cell::Stacked {
            primary: o.customer_name.clone(),
            secondary: o.customer_email.clone(),
        }),
        ColumnDescriptor::new("items", "Items", 9, |o: &Order| Cell::Muted(o.items_label())),
        ColumnDescriptor::new("totalAmount", "Total", 15, |o: &Order| {
            Cell::Currency(o.total_amount)
        }),
        ColumnDescriptor::new("status", "Status", 12, |o: &Order| Cell::Badge(o.status.badge())),
        ColumnDescriptor::new("paymentStatus", "Payment", 10, |o: &Order| {
            Cell::Badge(o.payment_status.badge())
        }),
        ColumnDescriptor::new("orderDate", "Date", 12, |o: &Order| {
            Cell::Muted(o.order_date.format("%b %d, %Y").to_string())
        }),
        ColumnDescriptor::actions(RowAction::MENU, 4),
    ]
}

pub fn order_table(orders: Vec<Order>, page_size: usize) -> OrderTable {
    EntityTable::new("orders", orders, order_columns(), order_row_id, page_size)
}

impl Searchable for Order {
    fn matches(&self, needle: &str) -> bool {
        [&self.order_number, &self.customer_name, &self.customer_email]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}
