#![allow(dead_code)]

use chrono::NaiveDate;
use xoro::domain::{Customer, CustomerStatus, Money};

pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

/// Customer `c_{n}` named "Customer {n}".
pub fn customer(n: usize) -> Customer {
    let name = format!("Customer {n}");
    Customer {
        id: format!("c_{n}"),
        avatar: Customer::initials(&name),
        email: format!("customer{n}@example.com"),
        phone: format!("+234 800 000 {n:04}"),
        join_date: date(1),
        total_orders: 1,
        total_spent: Money::from_major(1_000),
        last_purchase: date(2),
        status: CustomerStatus::Active,
        name,
    }
}

/// Customers `c_1..=c_{count}`.
pub fn customers(count: usize) -> Vec<Customer> {
    (1..=count).map(customer).collect()
}

/// Flatten a TestBackend buffer into newline-separated rows.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let width = buffer.area.width as usize;
    let mut out = String::new();
    for (idx, cell) in buffer.content.iter().enumerate() {
        out.push_str(cell.symbol());
        if (idx + 1) % width == 0 {
            out.push('\n');
        }
    }
    out
}
