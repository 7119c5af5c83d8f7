//! Dashboard figures derived from the fixtures.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{Channel, ChatItem, Labeled, Money, Order};

/// One metric card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub title: &'static str,
    pub value: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelShare {
    pub channel: Channel,
    pub messages: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub metrics: Vec<Metric>,
    pub channels: Vec<ChannelShare>,
    pub total_messages: u64,
    /// Order totals per day, oldest first, in major units.
    pub revenue_trend: Vec<u64>,
}

/// Message volume per channel. Not derivable from the mock chats, which
/// only carry their latest thread.
const CHANNEL_VOLUME: [(Channel, u64); 4] = [
    (Channel::WhatsApp, 450),
    (Channel::Instagram, 320),
    (Channel::Facebook, 280),
    (Channel::Sms, 150),
];

pub fn summarize(orders: &[Order], chats: &[ChatItem]) -> DashboardSummary {
    let paid: Vec<&Order> = orders.iter().filter(|order| order.is_paid()).collect();
    let revenue: Money = paid.iter().map(|order| order.total_amount).sum();

    let metrics = vec![
        Metric {
            title: "Total Revenue",
            value: revenue.compact(),
            caption: format!("from {} paid orders", paid.len()),
        },
        Metric {
            title: "Conversations",
            value: chats.len().to_string(),
            caption: format!("{} unread", chats.iter().map(|c| u64::from(c.unread)).sum::<u64>()),
        },
        Metric {
            title: "Payments",
            value: paid.len().to_string(),
            caption: format!("of {} orders", orders.len()),
        },
    ];

    let channels: Vec<ChannelShare> = Channel::ALL
        .iter()
        .map(|channel| ChannelShare {
            channel: *channel,
            messages: CHANNEL_VOLUME
                .iter()
                .find(|(c, _)| c == channel)
                .map(|(_, volume)| *volume)
                .unwrap_or(0),
        })
        .collect();
    let total_messages = channels.iter().map(|share| share.messages).sum();

    DashboardSummary {
        metrics,
        channels,
        total_messages,
        revenue_trend: revenue_by_day(orders),
    }
}

fn revenue_by_day(orders: &[Order]) -> Vec<u64> {
    let mut by_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for order in orders.iter().filter(|order| order.is_paid()) {
        let total = by_day.entry(order.order_date).or_default();
        *total = total.saturating_add(order.total_amount.minor());
    }
    by_day
        .values()
        .map(|minor| u64::try_from(*minor / 100).unwrap_or(0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Fixtures;

    #[test]
    fn test_summary_counts_paid_orders_only() {
        let fixtures = Fixtures::builtin();
        let summary = summarize(&fixtures.orders, &fixtures.chats);
        let paid = fixtures.orders.iter().filter(|o| o.is_paid()).count();

        assert_eq!(summary.metrics[2].value, paid.to_string());
        assert_eq!(summary.metrics[1].value, fixtures.chats.len().to_string());
        assert_eq!(summary.total_messages, 1_200);
        assert!(!summary.revenue_trend.is_empty());
        assert!(summary.revenue_trend.len() <= paid);
    }

    #[test]
    fn test_empty_inputs() {
        let summary = summarize(&[], &[]);
        assert_eq!(summary.metrics[0].value, Money::ZERO.compact());
        assert!(summary.revenue_trend.is_empty());
    }
}
