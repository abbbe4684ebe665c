// Header component
//
// App title on the left; user avatar chip, name, dogs on screen and logout
// hint on the right.

use crate::router::Route;
use crate::session::Session;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const APP_TITLE: &str = "Dog Lover";

/// Count of the last fetched dogs, hidden while there are none
pub fn dogs_label(session: &Session) -> Option<String> {
    match session.dogs().len() {
        0 => None,
        1 => Some("1 dog".to_string()),
        n => Some(format!("{} dogs", n)),
    }
}

pub fn render(f: &mut Frame, area: Rect, session: &Session, route: Route, theme: &Theme) {
    let title = Paragraph::new(Line::from(Span::styled(
        format!(" 🐶 {}", APP_TITLE),
        Style::default()
            .fg(theme.title)
            .add_modifier(Modifier::BOLD),
    )));

    let mut chip = Vec::new();
    if let Some(initial) = session.initial() {
        chip.push(Span::styled(
            format!(" {} ", initial),
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.avatar)
                .add_modifier(Modifier::BOLD),
        ));
        chip.push(Span::styled(
            format!(" {} ", session.user_name()),
            Style::default().fg(theme.foreground),
        ));
    }
    if route == Route::Search {
        if let Some(label) = dogs_label(session) {
            chip.push(Span::styled(
                format!("│ {} ", label),
                Style::default().fg(theme.muted),
            ));
        }
        chip.push(Span::styled("│ L logout ", Style::default().fg(theme.muted)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.title))
        .title_top(Line::from(chip).right_aligned());

    f.render_widget(title.block(block), area);
}
