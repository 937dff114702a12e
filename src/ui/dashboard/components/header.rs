//! Dashboard header component
//!
//! Renders the title line and the session/environment summary.

use super::super::state::DashboardState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the header with title, signed-in user and uptime.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("INVENTORY DASHBOARD v{}", version))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let username = state.username.as_deref().unwrap_or("guest");
    let uptime_secs = state.start_time.elapsed().as_secs();
    let uptime = format!("{:02}:{:02}", uptime_secs / 60, uptime_secs % 60);

    let summary = Line::from(vec![
        Span::styled("Welcome, ", Style::default().fg(Color::Gray)),
        Span::styled(
            username.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  •  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}", state.environment),
            Style::default().fg(Color::LightBlue),
        ),
        Span::styled("  •  up ", Style::default().fg(Color::DarkGray)),
        Span::styled(uptime, Style::default().fg(Color::Gray)),
    ]);

    let summary = Paragraph::new(summary).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(summary, header_chunks[1]);
}
