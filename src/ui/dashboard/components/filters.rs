//! Filter bar component
//!
//! Search box, category filter and the low-stock-only toggle. The three
//! filters are independent and combine with AND.

use super::super::state::{DashboardState, Focus};
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_filter_bar(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let search_focused = state.focus == Focus::Search;
    let category_focused = state.focus == Focus::CategoryFilter;
    let toggle_focused = state.focus == Focus::LowStockToggle;

    let search_text = if state.filters.search_term.is_empty() && !search_focused {
        "Search products...".to_string()
    } else if search_focused {
        format!("{}_", state.filters.search_term)
    } else {
        state.filters.search_term.clone()
    };

    let category_text = match state.filters.category {
        Some(category) => category.to_string(),
        None => "All Categories".to_string(),
    };

    let toggle_mark = if state.filters.low_stock_only { "x" } else { " " };

    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::Gray)),
        Span::styled(search_text, style_for(search_focused)),
        Span::styled("  |  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Category: ", Style::default().fg(Color::Gray)),
        Span::styled(format!("< {} >", category_text), style_for(category_focused)),
        Span::styled("  |  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("[{}] Low Stock Only", toggle_mark),
            style_for(toggle_focused),
        ),
    ]);

    let any_focused = search_focused || category_focused || toggle_focused;
    let block = Block::default()
        .title("FILTERS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if any_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));

    f.render_widget(Paragraph::new(line).block(block), area);
}

fn style_for(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}
