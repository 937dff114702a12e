//! Dashboard footer component
//!
//! Renders footer with key bindings for the focused control.

use super::super::state::{DashboardState, Focus};
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render enhanced footer.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let hints = match state.focus {
        Focus::Search => "[Tab] Next | Type to search | [Esc] Quit",
        Focus::CategoryFilter => "[Tab] Next | [←/→] Category | [Esc] Quit",
        Focus::LowStockToggle => "[Tab] Next | [Space] Toggle | [Esc] Quit",
        Focus::Form(_) => "[Tab] Next | [Enter] Add Product | [←/→] Category | [Esc] Quit",
        Focus::Products => {
            "[↑/↓] Select | [+/-] Amount | [Enter] Add Stock | [R] Refresh | [Q] Quit"
        }
    };

    let footer = Paragraph::new(hints)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
