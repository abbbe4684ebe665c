// Search view: toolbar, dog table, pagination, and the filter flyout on top

use crate::api::DogApi;
use crate::tui::app::App;
use crate::tui::components::{dog_table, filter_flyout, pagination, toolbar};
use crate::tui::layout::Breakpoint;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

pub fn render<A: DogApi>(f: &mut Frame, area: Rect, app: &App<A>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(area);

    let spinner = app.spinner();
    toolbar::render(f, chunks[0], &app.search, spinner, &app.theme);
    dog_table::render(f, chunks[1], &app.search, spinner, &app.theme);
    pagination::render(f, chunks[2], &app.search, &app.theme);

    if app.flyout.open {
        let width = Breakpoint::from_width(area.width)
            .flyout_width()
            .min(area.width);
        let flyout_area = Rect::new(area.right() - width, area.y, width, area.height);
        filter_flyout::render(f, flyout_area, &app.flyout, &app.theme);
    }
}
