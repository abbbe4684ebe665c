// Login form component
//
// Centered card: greeting, optional error banner, name and email inputs with
// helper text, and the submit button.

use crate::login::{LoginField, LoginForm, LoginPhase};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const GREETING: &str = "Welcome to Dog Lover!";

const CARD_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 17;

fn centered(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn input<'a>(
    title: &'a str,
    value: &str,
    focused: bool,
    has_error: bool,
    theme: &Theme,
) -> Paragraph<'a> {
    let border = if has_error {
        Style::default().fg(theme.error)
    } else {
        theme.border_style(focused)
    };
    let mut spans = vec![Span::styled(
        value.to_string(),
        Style::default().fg(theme.foreground),
    )];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(theme.highlight)));
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(border)
            .title(title),
    )
}

fn helper<'a>(text: Option<&'static str>, theme: &Theme) -> Paragraph<'a> {
    Paragraph::new(text.unwrap_or("")).style(Style::default().fg(theme.error))
}

pub fn render(f: &mut Frame, area: Rect, form: &LoginForm, spinner: char, theme: &Theme) {
    let card = centered(CARD_WIDTH, CARD_HEIGHT, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.title));
    let inner = block.inner(card);
    f.render_widget(block, card);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // greeting
            Constraint::Length(2), // banner
            Constraint::Length(3), // name
            Constraint::Length(1),
            Constraint::Length(3), // email
            Constraint::Length(1),
            Constraint::Length(1), // button
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(GREETING)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.title)
                    .add_modifier(Modifier::BOLD),
            ),
        rows[0],
    );

    if let Some(message) = form.error_message {
        f.render_widget(
            Paragraph::new(message)
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.error)),
            rows[1],
        );
    }

    f.render_widget(
        input(
            " Name ",
            &form.name,
            form.focus == LoginField::Name,
            form.name_error,
            theme,
        ),
        rows[2],
    );
    f.render_widget(helper(form.name_helper(), theme), rows[3]);

    f.render_widget(
        input(
            " Email ",
            &form.email,
            form.focus == LoginField::Email,
            form.email_error,
            theme,
        ),
        rows[4],
    );
    f.render_widget(helper(form.email_helper(), theme), rows[5]);

    let label = if form.phase == LoginPhase::Submitting {
        format!("[ {} Logging in… ]", spinner)
    } else {
        "[ Log in ]".to_string()
    };
    let style = if form.focus == LoginField::Submit {
        theme.selected()
    } else {
        Style::default()
            .fg(theme.foreground)
            .add_modifier(Modifier::BOLD)
    };
    f.render_widget(
        Paragraph::new(Span::styled(label, style)).alignment(Alignment::Center),
        rows[6],
    );
}
