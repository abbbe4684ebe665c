// Toolbar above the dog table
//
// "Available dogs" or the selection count, plus whichever actions apply:
// match + clear while dogs are selected, the filter control otherwise.

use crate::search::SearchController;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const MATCH_LABEL: &str = "Generate a matched dog";

pub fn title(selected: usize) -> String {
    if selected == 0 {
        "Available dogs".to_string()
    } else {
        format!("{} favorite dogs selected", selected)
    }
}

pub fn render(f: &mut Frame, area: Rect, search: &SearchController, spinner: char, theme: &Theme) {
    let selected = search.selected().len();
    let key = Style::default().fg(theme.highlight);
    let text = Style::default().fg(theme.foreground);

    let actions = if selected > 0 {
        let match_label = if search.is_matching() {
            format!("{} {}", spinner, MATCH_LABEL)
        } else {
            MATCH_LABEL.to_string()
        };
        Line::from(vec![
            Span::styled(" m ", key),
            Span::styled(match_label, text),
            Span::styled("  x ", key),
            Span::styled("Clear selection ", text),
        ])
    } else {
        let active = search.query().filters.active_count();
        let label = if active > 0 {
            format!("Filter ({} active) ", active)
        } else {
            "Filter ".to_string()
        };
        Line::from(vec![Span::styled(" f ", key), Span::styled(label, text)])
    };

    let heading = Paragraph::new(Span::styled(
        format!(" {}", title(selected)),
        Style::default()
            .fg(theme.title)
            .add_modifier(Modifier::BOLD),
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title_top(actions.right_aligned()),
    );

    f.render_widget(heading, area);
}
