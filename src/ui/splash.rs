//! Splash screen rendering module.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const LOGO_NAME: &str = r#"
  ███████╗  ██╗  ██╗  ███████╗  ██╗      ███████╗
  ██╔════╝  ██║  ██║  ██╔════╝  ██║      ██╔════╝
  ███████╗  ███████║  █████╗    ██║      █████╗
  ╚════██║  ██╔══██║  ██╔══╝    ██║      ██╔══╝
  ███████║  ██║  ██║  ███████╗  ███████╗ ██║
  ╚══════╝  ╚═╝  ╚═╝  ╚══════╝  ╚══════╝ ╚═╝
"#;

pub fn render_splash(f: &mut Frame) {
    // Convert LOGO_NAME into styled Lines
    let mut lines: Vec<Line> = LOGO_NAME
        .trim_matches('\n')
        .lines()
        .map(|line| {
            Span::styled(
                line.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .into()
        })
        .collect();

    // Add a spacer line
    lines.push(Line::from(Span::raw(" ")));

    // Add the product name and version
    lines.push(
        Span::styled(
            format!("shelfwatch {} - inventory dashboard", env!("CARGO_PKG_VERSION")),
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::ITALIC),
        )
        .into(),
    );

    // Determine the logo height
    let logo_height = (lines.len() + 2) as u16;

    // Center the logo vertically
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(logo_height),
            Constraint::Min(0),
        ])
        .split(f.area());

    let logo_area: Rect = chunks[1];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));

    f.render_widget(paragraph, logo_area);
}
