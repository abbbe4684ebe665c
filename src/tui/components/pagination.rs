// Pagination footer
//
// Rows per page, the visible range and prev/next controls. Controls render
// dimmed while a fetch is in flight or at either end of the results.

use crate::search::SearchController;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// "26–50 of 120"
pub fn range_label(search: &SearchController) -> String {
    let (from, to) = search.page_range();
    format!("{}–{} of {}", from, to, search.total())
}

pub fn render(f: &mut Frame, area: Rect, search: &SearchController, theme: &Theme) {
    let loading = search.is_loading();
    let can_prev = !loading && search.query().page_num > 0;
    let can_next = !loading && search.has_next_page();

    let control = |enabled: bool| {
        if enabled {
            Style::default().fg(theme.highlight)
        } else {
            Style::default().fg(theme.muted)
        }
    };
    let text = Style::default().fg(theme.foreground);

    let line = Line::from(vec![
        Span::styled(
            format!(" Rows per page: {} ", search.query().page_size.get()),
            text,
        ),
        Span::styled("(+/-)", control(!loading)),
        Span::styled(format!("   {}   ", range_label(search)), text),
        Span::styled("‹ p", control(can_prev)),
        Span::raw("  "),
        Span::styled("n ›", control(can_next)),
    ])
    .right_aligned();

    let footer = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border)),
    );

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PageSize, SearchPage};

    #[test]
    fn test_range_label() {
        let mut search = SearchController::new(PageSize::Five);
        assert_eq!(range_label(&search), "0–0 of 0");

        let request = search.begin_fetch();
        search.on_ids(
            request.generation,
            Ok(SearchPage {
                result_ids: Vec::new(),
                total: 12,
            }),
        );
        assert!(search.next_page());
        assert_eq!(range_label(&search), "6–10 of 12");
    }
}
