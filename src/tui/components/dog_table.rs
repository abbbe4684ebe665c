// Dog table component
//
// Header row with the select-all checkbox and sort arrows, one row per dog.
// Everything shown here comes from the SearchController; this file only
// decides how it looks.

use crate::model::SearchQuery;
use crate::search::table::{Align, Column};
use crate::search::SearchController;
use crate::tui::layout::Breakpoint;
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

pub const EMPTY_MESSAGE: &str = "Sorry, no dogs available under current filter selections.";

/// Column label with the sort arrow when it is the active sort column
pub fn header_label(column: Column, query: &SearchQuery) -> String {
    match column.sort_field() {
        Some(field) if field == query.order_by => {
            format!("{} {}", column.label(), query.order.arrow())
        }
        _ => column.label().to_string(),
    }
}

fn alignment(align: Align) -> Alignment {
    match align {
        Align::Center => Alignment::Center,
        Align::Right => Alignment::Right,
    }
}

fn width(column: Column) -> Constraint {
    match column {
        Column::Image => Constraint::Min(24),
        Column::Name => Constraint::Length(18),
        Column::Breed => Constraint::Length(28),
        Column::Age => Constraint::Length(6),
        Column::ZipCode => Constraint::Length(9),
    }
}

pub fn render(f: &mut Frame, area: Rect, search: &SearchController, spinner: char, theme: &Theme) {
    let loading = search.is_loading();
    let title = if loading {
        format!(" {} Loading dogs… ", spinner)
    } else {
        String::new()
    };
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(theme.border))
        .title(title);

    if search.dogs().is_empty() {
        let message = if loading { "" } else { EMPTY_MESSAGE };
        let empty = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.muted))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let columns: Vec<Column> = Column::ALL
        .iter()
        .copied()
        .filter(|c| *c != Column::Image || Breakpoint::from_width(area.width).shows_images())
        .collect();
    let focused = search.focused_column();

    let mut header_cells = vec![Cell::from(search.header_checkbox().symbol())];
    header_cells.extend(columns.iter().map(|&column| {
        let style = if column == focused {
            theme.selected()
        } else if column.is_sortable() {
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted).add_modifier(Modifier::BOLD)
        };
        Cell::from(Line::from(header_label(column, search.query())).alignment(alignment(column.align())))
            .style(style)
    }));

    let rows: Vec<Row> = search
        .dogs()
        .iter()
        .enumerate()
        .map(|(i, dog)| {
            let checked = search.is_selected(&dog.id);
            let checkbox = Cell::from(if checked { "[x]" } else { "[ ]" })
                .style(Style::default().fg(if checked { theme.checked } else { theme.muted }));

            let mut cells = vec![checkbox];
            cells.extend(columns.iter().map(|&column| {
                Cell::from(Line::from(column.cell(dog)).alignment(alignment(column.align())))
            }));

            let style = if i == search.row_cursor {
                theme.selected()
            } else {
                Style::default().fg(theme.foreground)
            };
            Row::new(cells).style(style)
        })
        .collect();

    let mut widths = vec![Constraint::Length(3)];
    widths.extend(columns.iter().map(|&c| width(c)));

    let table = Table::new(rows, widths)
        .header(Row::new(header_cells).bottom_margin(1))
        .column_spacing(2)
        .block(block);

    f.render_widget(table, area);
}
