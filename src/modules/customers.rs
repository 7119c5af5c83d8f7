//! Customers table: column configuration and search.

use crate::domain::{Customer, Labeled};
use crate::table::{Cell, ColumnDescriptor, EntityTable, RowAction, Searchable};

pub type CustomerTable = EntityTable<Customer>;

pub fn customer_row_id(customer: &Customer) -> String {
    customer.id.clone()
}

/// Columns in display order: avatar+name, email, phone, status, orders,
/// total spent, joined, actions.
pub fn customer_columns() -> Vec<ColumnDescriptor<Customer>> {
    vec![
        ColumnDescriptor::new("name", "Customer", 24, |c: &Customer| Cell::Avatar {
            initials: c.avatar.clone(),
            name: c.name.clone(),
        }),
        ColumnDescriptor::new("email", "Email", 28, |c: &Customer| Cell::Muted(c.email.clone())),
        ColumnDescriptor::new("phone", "Phone", 18, |c: &Customer| Cell::Muted(c.phone.clone())),
        ColumnDescriptor::new("status", "Status", 10, |c: &Customer| {
            Cell::Badge(c.status.badge())
        }),
        ColumnDescriptor::new("totalOrders", "Orders", 8, |c: &Customer| {
            Cell::Count(u64::from(c.total_orders))
        }),
        ColumnDescriptor::new("totalSpent", "Total Spent", 16, |c: &Customer| {
            Cell::Currency(c.total_spent)
        }),
        ColumnDescriptor::new("joinDate", "Joined", 12, |c: &Customer| {
            Cell::Muted(c.join_date.format("%b %d, %Y").to_string())
        }),
        ColumnDescriptor::actions(RowAction::MENU, 4),
    ]
}

pub fn customer_table(customers: Vec<Customer>, page_size: usize) -> CustomerTable {
    EntityTable::new(
        "customers",
        customers,
        customer_columns(),
        customer_row_id,
        page_size,
    )
}

impl Searchable for Customer {
    fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.email, &self.phone]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}
