//! Add-product form component
//!
//! Five required fields. Numeric fields are free text here and coerced on
//! submit; the submit control is disabled while a create is in flight.

use super::super::state::{DashboardState, Focus, FormField};
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_form(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let category_text = match state.form.category {
        Some(category) => category.to_string(),
        None => "Select Category".to_string(),
    };

    let mut lines = vec![
        field_line(state, FormField::Name, "Product Name", &state.form.product_name),
        field_line(state, FormField::Category, "Category", &category_text),
        field_line(state, FormField::Price, "Price", &state.form.price),
        field_line(state, FormField::Threshold, "Threshold", &state.form.threshold),
        field_line(state, FormField::Quantity, "Initial Stock", &state.form.quantity),
    ];

    let submit_text = if state.adding_product {
        "Adding..."
    } else {
        "[Enter] Add Product"
    };
    lines.push(Line::from(Span::styled(
        submit_text,
        Style::default()
            .fg(if state.adding_product {
                Color::DarkGray
            } else {
                Color::LightGreen
            })
            .add_modifier(Modifier::BOLD),
    )));

    // The single error slot lives on this card, as a plain text line.
    if let Some(error) = &state.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let in_form = matches!(state.focus, Focus::Form(_));
    let block = Block::default()
        .title("ADD PRODUCT")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if in_form { Color::Cyan } else { Color::DarkGray }))
        .padding(Padding::horizontal(1));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line<'a>(
    state: &DashboardState,
    field: FormField,
    label: &'a str,
    value: &str,
) -> Line<'a> {
    let focused = state.focus == Focus::Form(field);
    let value_text = if value.is_empty() && !focused {
        format!("<{}>", label.to_lowercase())
    } else if focused {
        format!("{}_", value)
    } else {
        value.to_string()
    };

    Line::from(vec![
        Span::styled(
            format!("{:<14}", label),
            Style::default().fg(if focused { Color::Cyan } else { Color::Gray }),
        ),
        Span::styled(
            value_text,
            Style::default()
                .fg(if focused { Color::White } else { Color::Gray })
                .add_modifier(if focused {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                }),
        ),
    ])
}
