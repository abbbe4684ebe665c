// Views module - screen-level layout
//
// Shell: header on top, the current route's view in the middle, optional
// logs panel, key hints at the bottom. Modals and toasts draw last.

mod modal;
mod search;

use super::app::App;
use super::components::{header, login_form, logs_panel, status_bar};
use crate::api::DogApi;
use crate::router::Route;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

const LOGS_HEIGHT: u16 = 10;

/// Main render function - called on every frame
pub fn draw<A: DogApi>(f: &mut Frame, app: &App<A>) {
    let bg = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg, f.area());

    let logs_height = if app.show_logs { LOGS_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(logs_height),
            Constraint::Length(1),
        ])
        .split(f.area());

    header::render(f, chunks[0], &app.session, app.route, &app.theme);

    match app.route {
        Route::Search => search::render(f, chunks[1], app),
        Route::Login | Route::NotFound => {
            login_form::render(f, chunks[1], &app.login, app.spinner(), &app.theme)
        }
    }

    if app.show_logs {
        logs_panel::render(f, chunks[2], &app.log_buffer, &app.theme);
    }

    let hints = status_bar::hints(app.route, app.flyout.open, app.modal.is_some());
    status_bar::render(f, chunks[3], hints, &app.theme);

    if let Some(active) = &app.modal {
        modal::render(f, active, &app.theme);
    }

    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}
