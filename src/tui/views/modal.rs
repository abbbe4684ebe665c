// Modal overlay rendering
//
// - Help: keyboard shortcuts
// - MatchedDog: the dog the match endpoint picked

use crate::model::Dog;
use crate::tui::modal::Modal;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, modal: &Modal, theme: &Theme) {
    let content = match modal {
        Modal::Help => help_text(theme),
        Modal::MatchedDog(dog) => matched_dog_text(dog, theme),
    };

    let width = 64;
    let height = content.lines.len() as u16 + 2;
    let area = centered_rect(width, height, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.highlight))
        .style(Style::default().bg(theme.background))
        .title(modal.title());

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

/// Calculate centered rect for a modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn help_text(theme: &Theme) -> Text<'static> {
    let key_style = Style::default().fg(theme.highlight);
    let desc_style = Style::default().fg(theme.foreground);
    let header_style = Style::default()
        .fg(theme.title)
        .add_modifier(Modifier::BOLD);

    let kb = |key: &'static str, desc: &'static str| -> Line<'static> {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc, desc_style),
        ])
    };

    Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Table", header_style)),
        kb("↑/↓", "Move row cursor"),
        kb("Space", "Select / unselect dog"),
        kb("a", "Select all shown / clear"),
        kb("x, Del", "Clear selection"),
        kb("←/→", "Move column cursor"),
        kb("s, Enter", "Sort by column (again to flip)"),
        Line::raw(""),
        Line::from(Span::styled("  Pages", header_style)),
        kb("n, PgDn", "Next page"),
        kb("p, PgUp", "Previous page"),
        kb("+ / -", "More / fewer rows per page"),
        Line::raw(""),
        Line::from(Span::styled("  Actions", header_style)),
        kb("f", "Filter (when nothing is selected)"),
        kb("m", "Generate a matched dog"),
        kb("L", "Log out"),
        kb("l", "Toggle logs"),
        kb("q, Ctrl-C", "Quit"),
        Line::raw(""),
    ])
}

fn matched_dog_text(dog: &Dog, theme: &Theme) -> Text<'static> {
    let label = Style::default().fg(theme.muted);
    let value = Style::default().fg(theme.foreground);
    let row = |name: &'static str, text: String| -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {:<10}", name), label),
            Span::styled(text, value),
        ])
    };

    Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!("  {}", dog.name),
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        row("Breed", dog.breed.clone()),
        row("Age", dog.age.to_string()),
        row("Zip code", dog.zip_code.clone()),
        row("Image", dog.img.clone()),
        Line::raw(""),
        Line::from(Span::styled("  y copy image URL · Enter close", label)),
    ])
}
