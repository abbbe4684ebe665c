// Logs panel component
//
// Tail of the in-memory log buffer, color-coded by level. Toggled with `l`.

use crate::logging::{LogBuffer, LogEntry};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn format_log_entry(entry: &LogEntry) -> String {
    // doglover::search::table -> search::table
    let module = entry
        .target
        .strip_prefix("doglover::")
        .unwrap_or(&entry.target);
    format!(
        "[{}] {:5} {}: {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        module,
        entry.message
    )
}

pub fn render(f: &mut Frame, area: Rect, buffer: &LogBuffer, theme: &Theme) {
    let visible = area.height.saturating_sub(2) as usize;

    let items: Vec<ListItem> = buffer
        .recent(visible)
        .iter()
        .map(|entry| ListItem::new(format_log_entry(entry)).style(theme.log_level(entry.level)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .title(" Logs "),
    );

    f.render_widget(list, area);
}
