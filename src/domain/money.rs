use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// Currency symbol used throughout the console (Nigerian naira).
pub const CURRENCY_SYMBOL: &str = "₦";

/// An amount in minor units (kobo). Serialised as a plain integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_major(major: i64) -> Self {
        Money(major.saturating_mul(100))
    }

    pub fn minor(self) -> i64 {
        self.0
    }

    /// Compact form for metric cards: `₦1.25M`, `₦48.2K`, `₦950`.
    pub fn compact(self) -> String {
        let major = self.0 as f64 / 100.0;
        let sign = if major < 0.0 { "-" } else { "" };
        let abs = major.abs();
        if abs >= 1_000_000.0 {
            format!("{sign}{CURRENCY_SYMBOL}{:.2}M", abs / 1_000_000.0)
        } else if abs >= 1_000.0 {
            format!("{sign}{CURRENCY_SYMBOL}{:.1}K", abs / 1_000.0)
        } else {
            format!("{sign}{CURRENCY_SYMBOL}{:.0}", abs)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let major = abs / 100;
        let minor = abs % 100;
        write!(f, "{sign}{CURRENCY_SYMBOL}{}.{minor:02}", group_thousands(major))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, rhs: u32) -> Money {
        Money(self.0.saturating_mul(i64::from(rhs)))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
