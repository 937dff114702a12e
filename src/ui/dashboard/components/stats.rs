//! Inventory statistics cards
//!
//! Total products, total stock and the low-stock alert count. All three are
//! computed over the full collection; the filter bar does not affect them.

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_stats_row(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_stat_card(
        f,
        chunks[0],
        "Total Products",
        state.total_products().to_string(),
        Color::Cyan,
    );
    render_stat_card(
        f,
        chunks[1],
        "Total Stock",
        state.total_stock().to_string(),
        Color::Green,
    );

    let low_stock = state.low_stock_count();
    let alert_color = if low_stock > 0 { Color::Red } else { Color::Gray };
    render_stat_card(f, chunks[2], "Low Stock", low_stock.to_string(), alert_color);
}

fn render_stat_card(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    label: &str,
    value: String,
    color: Color,
) {
    let lines = vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            label.to_string(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let card = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color)),
    );
    f.render_widget(card, area);
}
