//! Dashboard main renderer

use super::components::{filters, footer, form, header, logs, products, stats};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);
    stats::render_stats_row(f, main_chunks[1], state);
    filters::render_filter_bar(f, main_chunks[2], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(main_chunks[3]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Fill(1)])
        .split(content_chunks[0]);

    form::render_form(f, side_chunks[0], state);
    logs::render_logs_panel(f, side_chunks[1], state);
    products::render_products(f, content_chunks[1], state);

    footer::render_footer(f, main_chunks[4], state);
}
