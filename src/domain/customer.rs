use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::labeled::labeled_enum;
use super::money::Money;

labeled_enum! {
    /// Account state of a customer.
    pub enum CustomerStatus as "customer status" {
        Active => ("active", "Active", Success),
        Pending => ("pending", "Pending", Warning),
        Inactive => ("inactive", "Inactive", Muted),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    /// Initials shown in place of a picture. Derived from `name` when a
    /// fixture leaves it out.
    #[serde(default)]
    pub avatar: String,
    pub email: String,
    pub phone: String,
    pub join_date: NaiveDate,
    pub total_orders: u32,
    pub total_spent: Money,
    pub last_purchase: NaiveDate,
    pub status: CustomerStatus,
}

impl Customer {
    /// Initials derived from the display name.
    pub fn initials(name: &str) -> String {
        name.split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(Customer::initials("Adaeze Okafor"), "AO");
        assert_eq!(Customer::initials("tunde"), "T");
        assert_eq!(Customer::initials("Mary Jane Watson"), "MJ");
        assert_eq!(Customer::initials(""), "");
    }
}
