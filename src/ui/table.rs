//! Draws a [`RenderedTable`] with ratatui.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell as TableCell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::domain::Tone;
use crate::table::{Cell, PaginationFooter, RenderedTable, TableBody, NO_RESULTS};

const SKELETON: &str = "░░░░░░";

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Success => Color::Green,
        Tone::Warning => Color::Yellow,
        Tone::Info => Color::Blue,
        Tone::Accent => Color::Magenta,
        Tone::Danger => Color::Red,
        Tone::Muted => Color::DarkGray,
    }
}

pub fn cell_line(cell: &Cell) -> Line<'static> {
    match cell {
        Cell::Text(text) => Line::raw(text.clone()),
        Cell::Muted(text) => Line::styled(text.clone(), Style::default().fg(Color::DarkGray)),
        Cell::Strong(text) => Line::styled(
            text.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Cell::Avatar { initials, name } => Line::from(vec![
            Span::styled(
                format!("({initials}) "),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(name.clone()),
        ]),
        Cell::Stacked { primary, secondary } => Line::from(vec![
            Span::raw(primary.clone()),
            Span::raw(" "),
            Span::styled(secondary.clone(), Style::default().fg(Color::DarkGray)),
        ]),
        Cell::Badge(badge) => Line::styled(
            badge.label,
            Style::default().fg(tone_color(badge.tone)),
        ),
        Cell::Currency(amount) => Line::raw(amount.to_string()),
        Cell::Count(count) => Line::raw(count.to_string()),
        Cell::Actions(_) => Line::styled("⋯", Style::default().fg(Color::DarkGray)),
    }
}

/// Draw `table` inside a bordered block titled `title`.
pub fn draw_table(f: &mut Frame, area: Rect, table: &RenderedTable, title: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title.to_string());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let footer_height = u16::from(table.footer.is_some());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
        .split(inner);

    let widths: Vec<Constraint> = table
        .header
        .iter()
        .map(|column| Constraint::Length(column.size))
        .collect();
    let header = Row::new(
        table
            .header
            .iter()
            .map(|column| TableCell::from(column.label.unwrap_or(""))),
    )
    .style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = TableState::default();
    let rows: Vec<Row> = match &table.body {
        TableBody::Loading { rows, columns } => (0..*rows)
            .map(|_| {
                Row::new((0..*columns).map(|_| {
                    TableCell::from(Span::styled(SKELETON, Style::default().fg(Color::DarkGray)))
                }))
            })
            .collect(),
        TableBody::Empty { .. } => Vec::new(),
        TableBody::Rows(rows) => {
            state.select(rows.iter().position(|row| row.focused));
            rows.iter()
                .map(|row| {
                    let mut style = Style::default();
                    if row.selected {
                        style = style.fg(Color::LightCyan);
                    }
                    let cells = row.cells.iter().enumerate().map(|(idx, cell)| {
                        let mut line = cell_line(cell);
                        if idx == 0 && row.selected {
                            line.spans.insert(0, Span::raw("● "));
                        }
                        TableCell::from(line)
                    });
                    Row::new(cells).style(style)
                })
                .collect()
        }
    };

    let widget = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_stateful_widget(widget, chunks[0], &mut state);

    if let TableBody::Empty { .. } = table.body {
        // Full-width row under the header.
        let body = chunks[0];
        if body.height > 1 {
            let row = Rect {
                x: body.x,
                y: body.y + 1,
                width: body.width,
                height: 1,
            };
            let empty = Paragraph::new(NO_RESULTS)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            f.render_widget(empty, row);
        }
    }

    if let Some(footer) = &table.footer {
        f.render_widget(Paragraph::new(footer_line(footer)), chunks[1]);
    }
}

pub fn footer_line(footer: &PaginationFooter) -> Line<'static> {
    let nav = |label: &'static str, enabled: bool| {
        let color = if enabled { Color::White } else { Color::DarkGray };
        Span::styled(label, Style::default().fg(color))
    };
    Line::from(vec![
        Span::styled("Rows per page ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}   ", footer.state.page_size)),
        Span::raw(format!("{}   ", footer.label)),
        nav("« ", footer.can_previous),
        nav("‹ ", footer.can_previous),
        nav("› ", footer.can_next),
        nav("»", footer.can_next),
    ])
}
