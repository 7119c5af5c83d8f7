//! Built-in mock dataset. Deterministic: the same values on every run.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::domain::{
    Channel, ChatItem, Customer, CustomerStatus, Message, Money, Notification, NotificationKind,
    Order, OrderItem, OrderStatus, PaymentStatus, Product,
};

use super::Fixtures;

const FIRST_NAMES: [&str; 12] = [
    "Adaeze", "Tunde", "Chioma", "Emeka", "Ngozi", "Bola", "Ifeanyi", "Amaka", "Segun", "Halima",
    "Kelechi", "Yetunde",
];

const LAST_NAMES: [&str; 8] = [
    "Okafor", "Adeyemi", "Nwosu", "Bello", "Eze", "Balogun", "Okonkwo", "Mohammed",
];

const STREETS: [&str; 6] = [
    "12 Admiralty Way, Lekki, Lagos",
    "4 Aminu Kano Crescent, Wuse II, Abuja",
    "27 Awolowo Road, Ikoyi, Lagos",
    "9 Ogui Road, Enugu",
    "55 Ring Road, Ibadan",
    "3 Trans-Amadi Road, Port Harcourt",
];

pub(super) fn fixtures() -> Fixtures {
    let products = products();
    let customers: Vec<Customer> = (1..=24).map(customer).collect();
    let orders: Vec<Order> = (1..=32)
        .map(|seed| order(seed, &customers, &products))
        .collect();
    let (chats, messages) = chats(&customers);
    Fixtures {
        customers,
        orders,
        products,
        chats,
        messages,
        notifications: notifications(),
    }
}

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 8).unwrap_or_default()
}

fn customer(seed: u64) -> Customer {
    let idx = seed as usize;
    let first = FIRST_NAMES[idx % FIRST_NAMES.len()];
    let last = LAST_NAMES[(idx * 5 + 3) % LAST_NAMES.len()];
    let name = format!("{first} {last}");
    let status = match seed % 6 {
        0 => CustomerStatus::Inactive,
        3 => CustomerStatus::Pending,
        _ => CustomerStatus::Active,
    };
    let total_orders = ((seed * 7) % 23) as u32 + 1;
    let join_date = base_date() + Days::new(seed * 11);
    Customer {
        id: format!("c_{seed}"),
        avatar: Customer::initials(&name),
        email: format!(
            "{}.{}@example.com",
            first.to_lowercase(),
            last.to_lowercase()
        ),
        phone: format!("+234 80{} {:03} {:04}", seed % 10, (seed * 37) % 1000, (seed * 4_051) % 10_000),
        join_date,
        total_orders,
        total_spent: Money::from_major(i64::from(total_orders) * 18_500 + (seed as i64 % 9) * 1_250),
        last_purchase: join_date + Days::new(30 + seed * 3),
        status,
        name,
    }
}

fn products() -> Vec<Product> {
    let specs: [(&str, &str, i64, i64, &str); 8] = [
        ("Ankara Wrap Dress", "Apparel", 24_500, 34, "Hand-finished wax print dress in three colourways."),
        ("Shea Butter Set", "Beauty", 8_900, 6, "Unrefined shea butter with lemongrass and vanilla blends."),
        ("Leather Sandals", "Footwear", 15_000, 18, "Handmade Kano leather sandals with cushioned sole."),
        ("Adire Throw Pillow", "Home", 6_500, 0, "Indigo-dyed cotton cover with feather insert."),
        ("Beaded Necklace", "Accessories", 12_000, 9, "Coral and glass bead necklace, adjustable clasp."),
        ("Zobo Concentrate", "Food", 3_200, 120, "Hibiscus drink concentrate, makes four litres."),
        ("Aso Oke Cap", "Apparel", 9_800, 22, "Woven cap for ceremonies, one size."),
        ("Black Soap Bar", "Beauty", 2_400, 3, "Traditional plantain-ash soap, 200g."),
    ];
    specs
        .iter()
        .enumerate()
        .map(|(idx, (name, category, price, stock, description))| Product {
            id: format!("p_{}", idx + 1),
            name: name.to_string(),
            image: None,
            price: Money::from_major(*price),
            stock: *stock,
            category: category.to_string(),
            description: description.to_string(),
            sku: format!("XO-{}-{:04}", &category[..3].to_uppercase(), 1_000 + idx * 17),
        })
        .collect()
}

fn order(seed: u64, customers: &[Customer], products: &[Product]) -> Order {
    let customer = &customers[(seed as usize * 3) % customers.len()];
    let item_count = (seed % 3) as usize + 1;
    let items: Vec<OrderItem> = (0..item_count)
        .map(|offset| {
            let product = &products[(seed as usize + offset * 2) % products.len()];
            OrderItem {
                product_id: product.id.clone(),
                product_name: product.name.clone(),
                quantity: ((seed + offset as u64) % 4) as u32 + 1,
                price: product.price,
            }
        })
        .collect();
    let total_amount = items.iter().map(OrderItem::line_total).sum();
    let status = match seed % 5 {
        0 => OrderStatus::Pending,
        1 => OrderStatus::Processing,
        2 => OrderStatus::Shipped,
        3 => OrderStatus::Delivered,
        _ => OrderStatus::Cancelled,
    };
    let payment_status = match status {
        OrderStatus::Cancelled if seed % 2 == 0 => PaymentStatus::Refunded,
        OrderStatus::Pending | OrderStatus::Cancelled => PaymentStatus::Unpaid,
        _ => PaymentStatus::Paid,
    };
    Order {
        id: format!("o_{seed}"),
        order_number: format!("#ORD-{}", 1_000 + seed),
        customer_name: customer.name.clone(),
        customer_email: customer.email.clone(),
        items,
        total_amount,
        status,
        payment_status,
        order_date: base_date() + Days::new(120 + seed * 2),
        shipping_address: STREETS[seed as usize % STREETS.len()].to_string(),
    }
}

fn chats(customers: &[Customer]) -> (Vec<ChatItem>, BTreeMap<String, Vec<Message>>) {
    let threads: [(&[(&str, bool)], &str, u32, Channel); 6] = [
        (
            &[
                ("Hello, I placed an order yesterday.", false),
                ("Hi! Let me check that for you.", true),
                ("When will my order arrive?", false),
            ],
            "2m ago",
            2,
            Channel::WhatsApp,
        ),
        (
            &[
                ("Do you have the wrap dress in size 12?", false),
                ("Yes, the blue and green prints are in stock.", true),
                ("Thanks for the quick response!", false),
            ],
            "15m ago",
            0,
            Channel::Instagram,
        ),
        (
            &[("I'd like a refund for order #ORD-1004.", false)],
            "1h ago",
            1,
            Channel::Facebook,
        ),
        (
            &[
                ("Is delivery free to Abuja?", false),
                ("Orders above ₦50,000 ship free nationwide.", true),
            ],
            "3h ago",
            0,
            Channel::Sms,
        ),
        (
            &[
                ("The sandals are too small.", false),
                ("Sorry about that! We can exchange them.", true),
                ("Great, how do I send them back?", false),
            ],
            "Yesterday",
            3,
            Channel::WhatsApp,
        ),
        (
            &[("Please update my delivery address.", false)],
            "2d ago",
            1,
            Channel::Instagram,
        ),
    ];

    let mut chats = Vec::new();
    let mut messages = BTreeMap::new();
    for (idx, (thread, time_away, unread, channel)) in threads.iter().enumerate() {
        let customer = &customers[idx];
        let history: Vec<Message> = thread
            .iter()
            .enumerate()
            .map(|(n, (content, is_agent))| Message {
                id: format!("m_{}_{}", idx + 1, n + 1),
                content: content.to_string(),
                timestamp: format!("{:02}:{:02}", 9 + n, (idx * 7 + n * 4) % 60),
                is_agent: *is_agent,
            })
            .collect();
        let last_message = history
            .last()
            .map(|message| message.content.clone())
            .unwrap_or_default();
        chats.push(ChatItem {
            id: customer.id.clone(),
            name: customer.name.clone(),
            avatar: customer.avatar.clone(),
            last_message,
            time_away: time_away.to_string(),
            unread: *unread,
            channel: *channel,
        });
        messages.insert(customer.id.clone(), history);
    }
    (chats, messages)
}

fn notifications() -> Vec<Notification> {
    let specs: [(&str, &str, &str, bool, NotificationKind); 6] = [
        ("New order received", "Order #ORD-1032 was placed by Tunde Bello.", "5 min ago", false, NotificationKind::Order),
        ("Low stock", "Black Soap Bar has 3 units left.", "1 hour ago", false, NotificationKind::Warning),
        ("Payment confirmed", "Payment for #ORD-1028 was received.", "2 hours ago", false, NotificationKind::Success),
        ("Weekly report ready", "Your sales summary for last week is available.", "Yesterday", true, NotificationKind::Info),
        ("Out of stock", "Adire Throw Pillow is out of stock.", "2 days ago", true, NotificationKind::Warning),
        ("New order received", "Order #ORD-1027 was placed by Chioma Eze.", "3 days ago", true, NotificationKind::Order),
    ];
    specs
        .iter()
        .enumerate()
        .map(|(idx, (title, description, timestamp, read, kind))| Notification {
            id: format!("n_{}", idx + 1),
            title: title.to_string(),
            description: description.to_string(),
            timestamp: timestamp.to_string(),
            read: *read,
            kind: *kind,
        })
        .collect()
}
