//! Tab-based UI rendering

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs as RataTabs, Wrap};
use ratatui::Frame;

use super::table::tone_color;
use super::widgets::{bar_text, sparkline_text, MiniSparkline};
use crate::app::{App, InputMode, SettingsTab, Tab};
use crate::domain::{Labeled, StockLevel};

/// Draw the tab bar at the top
pub fn draw_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(22)])
        .split(area);

    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| {
            Line::from(vec![
                Span::styled(
                    format!("{}:", tab.shortcut()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(tab.title()),
            ])
        })
        .collect();

    let selected = Tab::ALL.iter().position(|t| *t == app.current_tab).unwrap_or(0);

    let tabs = RataTabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    "Xoro Inc.",
                    Style::default()
                        .fg(Color::LightCyan)
                        .add_modifier(Modifier::BOLD),
                )),
        )
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" │ ");
    f.render_widget(tabs, chunks[0]);

    let unread = app.notifications.unread_count();
    let bell_style = if unread > 0 {
        Style::default().fg(Color::LightYellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let bell = Paragraph::new(Line::from(vec![
        Span::styled("n ", Style::default().fg(Color::DarkGray)),
        Span::styled(format!("Notifications {unread}"), bell_style),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(bell, chunks[1]);
}

/// Draw the Dashboard tab: metric cards, channel distribution, revenue trend
pub fn draw_dashboard_tab(f: &mut Frame, area: Rect, app: &App) {
    let summary = &app.dashboard;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(6)])
        .split(area);

    let card_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, summary.metrics.len().max(1) as u32);
            summary.metrics.len()
        ])
        .split(chunks[0]);
    for (idx, (metric, card)) in summary.metrics.iter().zip(card_areas.iter()).enumerate() {
        let mut lines = vec![
            Line::styled(
                metric.value.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(metric.caption.clone(), Style::default().fg(Color::DarkGray)),
        ];
        // The revenue card carries the daily trend inline.
        if idx == 0 {
            let width = card.width.saturating_sub(2) as usize;
            lines.push(Line::styled(
                sparkline_text(&summary.revenue_trend, width),
                Style::default().fg(Color::LightGreen),
            ));
        }
        let paragraph = Paragraph::new(Text::from(lines)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(metric.title),
        );
        f.render_widget(paragraph, *card);
    }

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let max = summary
        .channels
        .iter()
        .map(|share| share.messages)
        .max()
        .unwrap_or(0);
    let mut lines: Vec<Line> = summary
        .channels
        .iter()
        .map(|share| {
            Line::from(vec![
                Span::raw(format!("{:<10}", share.channel.label())),
                Span::styled(
                    bar_text(share.messages, max, 20),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(format!(" {}", share.messages)),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("Total messages {}", summary.total_messages),
        Style::default().fg(Color::DarkGray),
    ));
    let channels = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Channel Distribution"),
    );
    f.render_widget(channels, lower[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("Revenue Trend");
    let inner = block.inner(lower[1]);
    f.render_widget(block, lower[1]);
    f.render_widget(MiniSparkline::new(&summary.revenue_trend), inner);
}

/// Draw the Inbox tab: chat list, conversation, optional profile panel
pub fn draw_inbox_tab(f: &mut Frame, area: Rect, app: &App) {
    let inbox = &app.inbox;
    let mut constraints = vec![Constraint::Length(34), Constraint::Min(20)];
    if inbox.profile_open {
        constraints.push(Constraint::Length(32));
    }
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let selected_id = inbox.selected_chat().map(|chat| chat.id.clone());
    let items: Vec<ListItem> = inbox
        .filtered_chats()
        .into_iter()
        .map(|chat| {
            let mut header = vec![
                Span::styled(
                    chat.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", chat.time_away),
                    Style::default().fg(Color::DarkGray),
                ),
            ];
            if chat.unread > 0 {
                header.push(Span::styled(
                    format!("  ({})", chat.unread),
                    Style::default().fg(Color::LightYellow),
                ));
            }
            let style = if selected_id.as_deref() == Some(chat.id.as_str()) {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            ListItem::new(Text::from(vec![
                Line::from(header),
                Line::styled(
                    format!("{} · {}", chat.channel.label(), chat.last_message),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
            .style(style)
        })
        .collect();
    let empty = items.is_empty();
    let title = format!(
        "Chats [{}]{}",
        inbox.filter().label(),
        if inbox.search().is_empty() {
            String::new()
        } else {
            format!(" /{}", inbox.search())
        }
    );
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(title),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default();
    if !empty {
        state.select(Some(inbox.cursor()));
    }
    f.render_stateful_widget(list, chunks[0], &mut state);

    draw_conversation(f, chunks[1], app);

    if inbox.profile_open {
        draw_profile(f, chunks[2], app);
    }
}

fn draw_conversation(f: &mut Frame, area: Rect, app: &App) {
    let inbox = &app.inbox;
    let title = inbox
        .selected_chat()
        .map(|chat| format!("{} ({})", chat.name, chat.channel.label()))
        .unwrap_or_else(|| "No conversation".to_string());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    // Pre-wrapped so the scroll offset counts the rows actually drawn.
    let width = chunks[0].width as usize;
    let messages: Vec<Vec<Line<'static>>> = inbox
        .conversation()
        .iter()
        .map(|message| {
            let (who, color) = if message.is_agent {
                ("You", Color::Cyan)
            } else {
                ("Customer", Color::White)
            };
            wrap_styled(
                &[
                    (
                        format!("{} ", message.timestamp),
                        Style::default().fg(Color::DarkGray),
                    ),
                    (format!("{who}: "), Style::default().fg(color)),
                    (message.content.clone(), Style::default()),
                ],
                width,
            )
        })
        .collect();
    let total: usize = messages.iter().map(Vec::len).sum();
    let hidden: usize = messages
        .iter()
        .rev()
        .take(inbox.scroll_back())
        .map(Vec::len)
        .sum();
    let height = chunks[0].height as usize;
    let scroll = (total - hidden).saturating_sub(height) as u16;
    let lines: Vec<Line> = messages.into_iter().flatten().collect();
    let history = Paragraph::new(Text::from(lines)).scroll((scroll, 0));
    f.render_widget(history, chunks[0]);

    let compose = if app.input_mode == InputMode::Compose {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Yellow)),
            Span::raw(app.input.clone()),
        ])
    } else {
        Line::styled(
            "i: type a message",
            Style::default().fg(Color::DarkGray),
        )
    };
    f.render_widget(Paragraph::new(compose), chunks[1]);
}

/// Greedy word wrap of styled segments into rows of at most `width` chars.
fn wrap_styled(segments: &[(String, Style)], width: usize) -> Vec<Line<'static>> {
    let width = width.max(1);
    let chars: Vec<(char, Style)> = segments
        .iter()
        .flat_map(|(text, style)| text.chars().map(move |ch| (ch, *style)))
        .collect();

    let mut rows = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let mut end = (start + width).min(chars.len());
        if end < chars.len() {
            if let Some(space) = chars[start..end].iter().rposition(|(ch, _)| *ch == ' ') {
                if space > 0 {
                    end = start + space + 1;
                }
            }
        }
        rows.push(styled_row(&chars[start..end]));
        start = end;
    }
    if rows.is_empty() {
        rows.push(Line::default());
    }
    rows
}

fn styled_row(chars: &[(char, Style)]) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut text = String::new();
    let mut current: Option<Style> = None;
    for (ch, style) in chars {
        if current.is_some_and(|c| c != *style) {
            spans.push(Span::styled(std::mem::take(&mut text), current.unwrap_or_default()));
        }
        current = Some(*style);
        text.push(*ch);
    }
    if let Some(style) = current {
        spans.push(Span::styled(text, style));
    }
    Line::from(spans)
}

fn draw_profile(f: &mut Frame, area: Rect, app: &App) {
    let lines = match app.inbox.selected_customer() {
        Some(customer) => vec![
            Line::styled(
                customer.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                customer.status.label(),
                Style::default().fg(tone_color(customer.status.tone())),
            ),
            Line::from(""),
            Line::raw(customer.email.clone()),
            Line::raw(customer.phone.clone()),
            Line::from(""),
            Line::raw(format!("Orders  {}", customer.total_orders)),
            Line::raw(format!("Spent   {}", customer.total_spent)),
            Line::raw(format!("Since   {}", customer.join_date.format("%b %Y"))),
        ],
        None => vec![Line::styled(
            "No customer profile",
            Style::default().fg(Color::DarkGray),
        )],
    };
    let paragraph = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Profile"),
    );
    f.render_widget(paragraph, area);
}

/// Draw the Products tab: one card line per product
pub fn draw_products_tab(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title("Products");
    let catalog = &app.products;
    if catalog.products().is_empty() {
        let paragraph = Paragraph::new("No products found.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = catalog
        .products()
        .iter()
        .map(|product| {
            let level = product.stock_level();
            let stock = match level {
                StockLevel::Out => level.label().to_string(),
                _ => format!("{} in stock", product.stock),
            };
            ListItem::new(Text::from(vec![
                Line::from(vec![
                    Span::styled(
                        product.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", product.category),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]),
                Line::from(vec![
                    Span::raw(format!("{}  ", product.price)),
                    Span::styled(stock, Style::default().fg(tone_color(level.tone()))),
                ]),
            ]))
        })
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default();
    state.select(Some(catalog.cursor()));
    f.render_stateful_widget(list, area, &mut state);
}

/// Draw the Settings tab: sub-tabs plus the effective configuration
pub fn draw_settings_tab(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4), Constraint::Length(9)])
        .split(area);

    let titles: Vec<&str> = SettingsTab::ALL.iter().map(|tab| tab.title()).collect();
    let selected = SettingsTab::ALL
        .iter()
        .position(|tab| *tab == app.settings_tab)
        .unwrap_or(0);
    let tabs = RataTabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("Settings (Enter: next)"),
        )
        .select(selected)
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, chunks[0]);

    let body = match app.settings_tab {
        SettingsTab::Channels => {
            "Connect messaging channels (WhatsApp, Instagram, Facebook, SMS) so customer \
             conversations arrive in the inbox."
        }
        SettingsTab::AgentConfig => {
            "Configure how the assistant greets customers, its tone of voice and when it \
             hands a conversation to a human agent."
        }
        SettingsTab::Notifications => {
            "Choose which events raise notifications: new orders, payments and low stock."
        }
    };
    f.render_widget(
        Paragraph::new(body)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(app.settings_tab.title())),
        chunks[1],
    );

    let show = |path: Option<&std::path::Path>| {
        path.map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string())
    };
    let config = &app.config;
    let lines = vec![
        Line::raw(format!("Config       {}", show(app.sources.config_path.as_deref()))),
        Line::raw(format!("Fixtures     {}", app.sources.fixtures)),
        Line::raw(format!("Page size    {}", config.page_size)),
        Line::raw(format!("Size options {:?}", config.page_size_options)),
        Line::raw(format!("Loaders      {}", config.loaders)),
        Line::raw(format!("Export dir   {}", show(config.export_dir.as_deref()))),
        Line::raw(format!("Log file     {}", show(app.sources.log_file.as_deref()))),
    ];
    f.render_widget(
        Paragraph::new(Text::from(lines)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title("Effective configuration"),
        ),
        chunks[2],
    );
}
