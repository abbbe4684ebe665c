// Filter flyout panel
//
// Drawn over the right edge of the search view. Shows the draft, not the
// committed filters.

use crate::filter::{FilterFlyout, FlyoutField};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

pub const FLYOUT_TITLE: &str = " Dog filter ";

/// First breed index to draw so the cursor stays inside `height` rows
pub fn breed_window_start(cursor: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    cursor.saturating_sub(height - 1)
}

fn field_block<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(theme.border_style(focused))
        .title(title)
}

fn text_input<'a>(value: &str, focused: bool, theme: &Theme) -> Line<'a> {
    let mut spans = vec![Span::styled(
        value.to_string(),
        Style::default().fg(theme.foreground),
    )];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(theme.highlight)));
    }
    Line::from(spans)
}

pub fn render(f: &mut Frame, area: Rect, flyout: &FilterFlyout, theme: &Theme) {
    f.render_widget(Clear, area);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.highlight))
        .style(Style::default().bg(theme.background))
        .title(FLYOUT_TITLE);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let error_height = if flyout.age_error.is_some() { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(error_height),
            Constraint::Length(1),
        ])
        .split(inner);

    // Breeds
    let focused = flyout.focus == FlyoutField::Breeds;
    let visible = chunks[0].height.saturating_sub(2) as usize;
    let start = breed_window_start(flyout.breed_cursor, visible);
    let items: Vec<ListItem> = flyout
        .breed_options
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .map(|(i, breed)| {
            let mark = if flyout.is_breed_selected(breed) { "[x]" } else { "[ ]" };
            let style = if focused && i == flyout.breed_cursor {
                theme.selected()
            } else if flyout.is_breed_selected(breed) {
                Style::default().fg(theme.checked)
            } else {
                Style::default().fg(theme.foreground)
            };
            ListItem::new(format!("{} {}", mark, breed)).style(style)
        })
        .collect();
    let breeds_title = format!(" Breeds ({}) ", flyout.breeds.len());
    f.render_widget(
        List::new(items).block(field_block(&breeds_title, focused, theme)),
        chunks[0],
    );

    // Zip codes
    let focused = flyout.focus == FlyoutField::ZipCodes;
    f.render_widget(
        Paragraph::new(text_input(&flyout.zip_text(), focused, theme))
            .block(field_block(" Zip codes (comma separated) ", focused, theme)),
        chunks[1],
    );

    // Ages
    let ages = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    let error_style = |has_error: bool| {
        if has_error {
            Style::default().fg(theme.error)
        } else {
            Style::default()
        }
    };
    for (field, value, title, area) in [
        (FlyoutField::MinAge, &flyout.min_age, " Min age ", ages[0]),
        (FlyoutField::MaxAge, &flyout.max_age, " Max age ", ages[1]),
    ] {
        let focused = flyout.focus == field;
        let mut block = field_block(title, focused, theme);
        if flyout.age_error.is_some() {
            block = block.border_style(error_style(true));
        }
        f.render_widget(Paragraph::new(text_input(value, focused, theme)).block(block), area);
    }
    if let Some(error) = flyout.age_error {
        f.render_widget(
            Paragraph::new(Span::styled(format!(" {}", error), error_style(true))),
            chunks[3],
        );
    }

    // Buttons
    let button = |field: FlyoutField, label: &str| {
        let style = if flyout.focus == field {
            theme.selected()
        } else {
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD)
        };
        Span::styled(format!("[ {} ]", label), style)
    };
    let buttons = Line::from(vec![
        button(FlyoutField::Reset, "Reset"),
        Span::raw(" "),
        button(FlyoutField::Cancel, "Cancel"),
        Span::raw(" "),
        button(FlyoutField::Apply, "Apply"),
    ])
    .right_aligned();
    f.render_widget(Paragraph::new(buttons), chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breed_window_follows_cursor() {
        assert_eq!(breed_window_start(0, 5), 0);
        assert_eq!(breed_window_start(4, 5), 0);
        assert_eq!(breed_window_start(5, 5), 1);
        assert_eq!(breed_window_start(20, 5), 16);
        assert_eq!(breed_window_start(3, 0), 0);
    }
}
