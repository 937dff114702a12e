//! Product table component
//!
//! Renders the filtered product view with stock status and the per-product
//! add-stock input.

use super::super::state::{DashboardState, Focus};
use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

pub fn render_products(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let focused = state.focus == Focus::Products;
    let filtered = state.filtered_products();

    let block = Block::default()
        .title(format!("PRODUCTS ({} shown)", filtered.len()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray }));

    if filtered.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No products match the current filters",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Product"),
        Cell::from("Category"),
        Cell::from("Price"),
        Cell::from("Stock"),
        Cell::from("Status"),
        Cell::from("Add"),
    ])
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = filtered
        .iter()
        .enumerate()
        .map(|(i, product)| {
            let selected = focused && i == state.selected;
            let busy = state.is_updating(&product.product_id);

            let status_cell = if product.is_low_stock() {
                Cell::from("LOW STOCK").style(
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Cell::from("OK").style(Style::default().fg(Color::Green))
            };

            // Input is constrained to [0, max_addable]; 0 cannot be sent.
            let add_cell = if busy {
                Cell::from("Updating...").style(Style::default().fg(Color::Yellow))
            } else if product.max_addable() == 0 {
                Cell::from("Stock is sufficient").style(Style::default().fg(Color::Green))
            } else {
                Cell::from(format!(
                    "{} / {}",
                    state.add_amount(&product.product_id),
                    product.max_addable()
                ))
                .style(Style::default().fg(Color::White))
            };

            let row_style = if selected {
                Style::default()
                    .bg(Color::Rgb(30, 40, 50))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(product.product_name.clone()),
                Cell::from(product.category.to_string()),
                Cell::from(format!("{:.2}", product.price)),
                Cell::from(format!("{} / {}", product.quantity, product.threshold)),
                status_cell,
                add_cell,
            ])
            .style(row_style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Fill(2),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Fill(1),
        ],
    )
    .header(header)
    .block(block);

    f.render_widget(table, area);
}
