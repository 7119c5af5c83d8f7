use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;
pub mod modals;
pub mod table;
pub mod tabs;
pub mod widgets;

use crate::app::{App, InputMode, StatusLevel, Tab};

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    tabs::draw_tab_bar(f, areas.header, app);
    match app.current_tab {
        Tab::Dashboard => tabs::draw_dashboard_tab(f, areas.main, app),
        Tab::Inbox => tabs::draw_inbox_tab(f, areas.main, app),
        Tab::Products => tabs::draw_products_tab(f, areas.main, app),
        Tab::Customers => {
            let title = table_title("Customers", app.customers.query());
            table::draw_table(f, areas.main, &app.customers.render(), &title);
        }
        Tab::Orders => {
            let title = table_title("Orders", app.orders.query());
            table::draw_table(f, areas.main, &app.orders.render(), &title);
        }
        Tab::Settings => tabs::draw_settings_tab(f, areas.main, app),
    }
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    match app.current_tab {
        Tab::Customers => {
            if let Some(customer) = app.customers.detail() {
                modals::draw_customer_modal(f, areas.main, customer);
            }
        }
        Tab::Orders => {
            if let Some(order) = app.orders.detail() {
                modals::draw_order_modal(f, areas.main, order);
            }
        }
        Tab::Products => {
            if let Some(product) = app.products.detail() {
                modals::draw_product_modal(f, areas.main, product);
            }
        }
        _ => {}
    }
    if app.notifications.open {
        modals::draw_notification_drawer(f, areas.main, &app.notifications);
    }
    if app.help_open {
        draw_help_popup(f, areas.size);
    }
}

fn table_title(name: &str, query: Option<&str>) -> String {
    match query {
        Some(query) => format!("{name} /{query}"),
        None => name.to_string(),
    }
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled("Tab ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.current_tab.title())),
    ];
    if let Some(table) = app.active_table() {
        spans.push(Span::styled("Rows ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(format!("{}  ", table.visible_len())));
        if table.selected_count() > 0 {
            spans.push(Span::styled(
                "Selected ",
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::raw(format!("{}  ", table.selected_count())));
        }
    }
    if app.is_loading() {
        spans.push(Span::styled("loading…", Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

/// Get command hint for autocompletion
fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("dashboard", "Go to dashboard"),
        ("inbox", "Go to inbox"),
        ("products", "Go to products"),
        ("customers", "Go to customers"),
        ("orders", "Go to orders"),
        ("settings", "Go to settings"),
        ("page", "Jump to page N"),
        ("size", "Set rows per page"),
        ("first", "First page"),
        ("last", "Last page"),
        ("next", "Next page"),
        ("prev", "Previous page"),
        ("view", "Open row by id"),
        ("find", "Search the table (empty clears)"),
        ("export", "Export table as csv or json"),
        ("read-all", "Mark notifications read"),
        ("quit", "Quit"),
    ];

    let head = input.split_whitespace().next().unwrap_or("");
    commands
        .iter()
        .find(|(cmd, _)| cmd.starts_with(head))
        .map(|(_, desc)| *desc)
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint_text = command_hint(&app.command.input).unwrap_or("command");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(app.command.input.clone()),
                Span::styled(
                    format!("  {}", hint_text),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        InputMode::Search => Line::from(vec![
            Span::styled("/ ", Style::default().fg(Color::LightCyan)),
            Span::raw(app.input.clone()),
            Span::styled(
                "  (Enter=keep Esc=close)",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        InputMode::Compose => Line::styled(
            "Enter=send Esc=cancel",
            Style::default().fg(Color::DarkGray),
        ),
        InputMode::Normal => {
            if let Some((text, level)) = app.status_text() {
                let color = match level {
                    StatusLevel::Info => Color::LightGreen,
                    StatusLevel::Warn => Color::LightYellow,
                    StatusLevel::Error => Color::LightRed,
                };
                Line::from(vec![
                    Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(text.to_string(), Style::default().fg(color)),
                ])
            } else {
                action_hints(app)
            }
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn action_hints(app: &App) -> Line<'static> {
    let hints: &[(&str, &str)] = match app.current_tab {
        Tab::Customers | Tab::Orders => &[
            ("j/k", "row"),
            ("h/l", "page"),
            ("g/G", "first/last"),
            ("z", "size"),
            ("Enter", "view"),
            ("Space", "select"),
            ("/", "search"),
            ("y", "copy id"),
        ],
        Tab::Inbox => &[
            ("j/k", "chat"),
            ("Enter", "open"),
            ("i", "reply"),
            ("f", "filter"),
            ("p", "profile"),
            ("/", "search"),
        ],
        Tab::Products => &[("j/k", "product"), ("Enter", "details"), ("y", "copy id")],
        Tab::Dashboard | Tab::Settings => &[("1-6", "tabs"), ("n", "notifications")],
    };
    let mut spans = Vec::new();
    for (key, desc) in hints
        .iter()
        .chain([(":", "command"), ("?", "help"), ("q", "quit")].iter())
    {
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(Color::Yellow),
        ));
        spans.push(Span::styled(
            format!(" {desc}  "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = layout::centered_rect(64, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  1-6 / Tab  Switch tab"),
        Line::from("  j / k      Move cursor"),
        Line::from("  h / l      Previous / next page"),
        Line::from("  g / G      First / last page"),
        Line::from("  z          Cycle rows per page"),
        Line::from("  Enter      View / open"),
        Line::from("  Esc        Close overlay"),
        Line::from(""),
        Line::from("Rows"),
        Line::from("  Space      Toggle selection"),
        Line::from("  e / d      Edit / delete (mock: unavailable)"),
        Line::from("  y          Copy id"),
        Line::from("  /          Search"),
        Line::from(""),
        Line::from("Inbox"),
        Line::from("  i          Reply"),
        Line::from("  f          Cycle filter"),
        Line::from("  p          Customer profile"),
        Line::from("  PgUp/PgDn  Scroll conversation"),
        Line::from(""),
        Line::from("  n          Notifications (m: mark all read)"),
        Line::from("  :          Command line"),
        Line::from("  ?          Toggle help"),
        Line::from("  q          Quit"),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}
