// Status bar component
//
// One line of key hints for whatever currently has the keyboard.

use crate::router::Route;
use crate::tui::theme::Theme;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

const LOGIN_HINTS: &str = " Tab/Shift-Tab field │ Enter log in │ Ctrl-C quit";
const SEARCH_HINTS: &str = " ↑↓ row │ Space select │ a all │ x clear │ ←→ column │ s sort │ n/p page │ +/- rows │ f filter │ m match │ l logs │ ? help │ q quit";
const FLYOUT_HINTS: &str = " Tab field │ ↑↓ Space breeds │ Ctrl-R reset │ Esc cancel │ Enter apply";
const MODAL_HINTS: &str = " Esc close";

/// Hints for the active input layer
pub fn hints(route: Route, flyout_open: bool, modal_open: bool) -> &'static str {
    if modal_open {
        return MODAL_HINTS;
    }
    match route {
        Route::Search if flyout_open => FLYOUT_HINTS,
        Route::Search => SEARCH_HINTS,
        Route::Login | Route::NotFound => LOGIN_HINTS,
    }
}

pub fn render(f: &mut Frame, area: Rect, hints: &str, theme: &Theme) {
    let bar = Paragraph::new(hints).style(Style::default().fg(theme.status_bar));
    f.render_widget(bar, area);
}
