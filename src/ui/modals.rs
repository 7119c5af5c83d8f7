//! Detail modals and the notification drawer.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::layout::{centered_rect, right_drawer};
use super::table::tone_color;
use crate::domain::{Badge, Customer, Labeled, Order, Product};
use crate::modules::notifications::NotificationCenter;

fn label(text: &'static str) -> Span<'static> {
    Span::styled(format!("{text:<16}"), Style::default().fg(Color::DarkGray))
}

fn badge(badge: Badge) -> Span<'static> {
    Span::styled(
        format!("[{}]", badge.label),
        Style::default().fg(tone_color(badge.tone)),
    )
}

fn field(name: &'static str, value: String) -> Line<'static> {
    Line::from(vec![label(name), Span::raw(value)])
}

fn draw_modal(f: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    let popup_area = centered_rect(60, 60, area);
    f.render_widget(Clear, popup_area);
    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(format!("{title} (Esc to close)"))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, popup_area);
}

pub fn draw_customer_modal(f: &mut Frame, area: Rect, customer: &Customer) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("({}) ", customer.avatar),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                customer.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            badge(customer.status.badge()),
        ]),
        Line::from(""),
        field("Email", customer.email.clone()),
        field("Phone", customer.phone.clone()),
        field("Total spent", customer.total_spent.to_string()),
        field("Total orders", customer.total_orders.to_string()),
        field("Joined", customer.join_date.format("%B %d, %Y").to_string()),
        field(
            "Last purchase",
            customer.last_purchase.format("%B %d, %Y").to_string(),
        ),
    ];
    draw_modal(f, area, "Customer Details", lines);
}

pub fn draw_order_modal(f: &mut Frame, area: Rect, order: &Order) {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                order.order_number.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            badge(order.status.badge()),
            Span::raw(" "),
            badge(order.payment_status.badge()),
        ]),
        field("Placed", order.order_date.format("%B %d, %Y").to_string()),
        Line::from(""),
        field("Customer", order.customer_name.clone()),
        field("Email", order.customer_email.clone()),
        field("Ship to", order.shipping_address.clone()),
        Line::from(""),
        Line::styled("Items", Style::default().add_modifier(Modifier::BOLD)),
    ];
    for item in &order.items {
        lines.push(Line::from(vec![
            Span::raw(format!("  {:<24}", item.product_name)),
            Span::styled(
                format!("x{:<4}", item.quantity),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(item.line_total().to_string()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        label("Total"),
        Span::styled(
            order.total_amount.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]));
    draw_modal(f, area, "Order Details", lines);
}

pub fn draw_product_modal(f: &mut Frame, area: Rect, product: &Product) {
    let level = product.stock_level();
    let lines = vec![
        Line::styled(
            product.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::styled(product.category.clone(), Style::default().fg(Color::DarkGray)),
        Line::from(""),
        field("SKU", product.sku.clone()),
        field("Price", product.price.to_string()),
        Line::from(vec![
            label("Stock"),
            Span::raw(format!("{} units ", product.stock.max(0))),
            badge(level.badge()),
        ]),
        Line::from(""),
        Line::raw(product.description.clone()),
    ];
    draw_modal(f, area, "Product Details", lines);
}

pub fn draw_notification_drawer(f: &mut Frame, area: Rect, center: &NotificationCenter) {
    let drawer = right_drawer(48, area);
    f.render_widget(Clear, drawer);

    let unread = center.unread_count();
    let mut lines = Vec::new();
    for item in center.items() {
        let marker = if item.read { "  " } else { "● " };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(
                item.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            badge(item.kind.badge()),
        ]));
        lines.push(Line::raw(format!("  {}", item.description)));
        lines.push(Line::styled(
            format!("  {}", item.timestamp),
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::from(""));
    }
    if lines.is_empty() {
        lines.push(Line::styled(
            "No notifications",
            Style::default().fg(Color::DarkGray),
        ));
    }
    let hint = if unread > 0 {
        "m: mark all as read"
    } else {
        "all caught up"
    };
    lines.push(Line::styled(hint, Style::default().fg(Color::DarkGray)));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(format!("Notifications ({unread} unread)"))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, drawer);
}
