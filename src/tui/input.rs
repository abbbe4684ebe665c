// Keyboard dispatch
//
// Layered: Ctrl-C → modal → filter flyout → global keys → current view.
// The login view takes every printable key as text, so global letter
// shortcuts only apply on the search view.

use super::app::App;
use super::modal::{Modal, ModalAction};
use crate::api::DogApi;
use crate::filter::FlyoutField;
use crate::router::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key_event<A: DogApi>(app: &mut App<A>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if handle_modal_input(app, &key) {
        return;
    }

    match app.route {
        Route::Search if app.flyout.open => handle_flyout_keys(app, &key),
        Route::Search => {
            if !handle_global_keys(app, &key) {
                handle_search_keys(app, &key);
            }
        }
        Route::Login | Route::NotFound => handle_login_keys(app, &key),
    }
}

/// Returns true if a modal absorbed the input
fn handle_modal_input<A: DogApi>(app: &mut App<A>, key: &KeyEvent) -> bool {
    let Some(modal) = &app.modal else {
        return false;
    };

    match modal.handle_input(key.code) {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
        ModalAction::CopyImageUrl => {
            if let Some(Modal::MatchedDog(dog)) = &app.modal {
                let url = dog.img.clone();
                app.copy_text(&url, "image URL");
            }
        }
    }
    true
}

fn handle_global_keys<A: DogApi>(app: &mut App<A>, key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.modal = Some(Modal::Help),
        KeyCode::Char('l') => app.show_logs = !app.show_logs,
        _ => return false,
    }
    true
}

fn handle_login_keys<A: DogApi>(app: &mut App<A>, key: &KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => app.login.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.login.focus_prev(),
        KeyCode::Enter => app.submit_login(),
        KeyCode::Backspace => app.login.backspace(),
        KeyCode::Char(c) => app.login.insert_char(c),
        _ => {}
    }
}

fn handle_search_keys<A: DogApi>(app: &mut App<A>, key: &KeyEvent) {
    let search = &mut app.search;
    match key.code {
        // Rows
        KeyCode::Up => search.row_up(),
        KeyCode::Down => search.row_down(),
        KeyCode::Char(' ') => search.toggle_row_at_cursor(),
        KeyCode::Char('a') => search.toggle_all(),
        KeyCode::Char('x') | KeyCode::Delete => search.clear_selection(),

        // Header
        KeyCode::Left => search.column_left(),
        KeyCode::Right => search.column_right(),
        KeyCode::Char('s') | KeyCode::Enter => {
            let changed = search.sort_by_focused();
            app.refetch_if(changed);
        }

        // Pagination
        KeyCode::Char('n') | KeyCode::PageDown => {
            let changed = search.next_page();
            app.refetch_if(changed);
        }
        KeyCode::Char('p') | KeyCode::PageUp => {
            let changed = search.prev_page();
            app.refetch_if(changed);
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            let size = search.query().page_size.larger();
            let changed = search.set_page_size(size);
            app.refetch_if(changed);
        }
        KeyCode::Char('-') => {
            let size = search.query().page_size.smaller();
            let changed = search.set_page_size(size);
            app.refetch_if(changed);
        }

        // Toolbar
        KeyCode::Char('f') => app.open_filter(),
        KeyCode::Char('m') => app.start_match(),
        KeyCode::Char('L') => app.logout(),
        _ => {}
    }
}

fn handle_flyout_keys<A: DogApi>(app: &mut App<A>, key: &KeyEvent) {
    let flyout = &mut app.flyout;
    let on_breeds = flyout.focus == FlyoutField::Breeds;

    match key.code {
        KeyCode::Esc => {
            let action = flyout.cancel();
            app.finish_flyout(action);
        }
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => flyout.reset(),
        KeyCode::Tab => flyout.focus = flyout.focus.next(),
        KeyCode::BackTab => flyout.focus = flyout.focus.prev(),
        KeyCode::Up if on_breeds => flyout.breed_cursor_up(),
        KeyCode::Down if on_breeds => flyout.breed_cursor_down(),
        KeyCode::Enter => {
            // Enter applies from anywhere except the Reset/Cancel buttons
            let action = if on_breeds {
                flyout.apply()
            } else {
                flyout.activate()
            };
            app.finish_flyout(action);
        }
        KeyCode::Char(' ') if !flyout_is_text(flyout.focus) => {
            let action = flyout.activate();
            app.finish_flyout(action);
        }
        KeyCode::Backspace => flyout.backspace(),
        KeyCode::Char(c) => flyout.insert_char(c),
        _ => {}
    }
}

fn flyout_is_text(field: FlyoutField) -> bool {
    matches!(
        field,
        FlyoutField::ZipCodes | FlyoutField::MinAge | FlyoutField::MaxAge
    )
}
