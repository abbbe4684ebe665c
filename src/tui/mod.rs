// TUI module - Terminal User Interface
//
// Manages the terminal with ratatui:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, redraw ticks, task results)
// - Rendering the current view

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod theme;
pub mod views;

use crate::api::DogApi;
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::session::Session;
use anyhow::{Context, Result};
use app::{App, AppMessage};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI until the user quits
///
/// Sets up the terminal, mounts `initial_route`, runs the event loop, and
/// restores the terminal even when the loop fails.
pub async fn run_tui<A: DogApi>(
    api: A,
    session: Session,
    config: &Config,
    log_buffer: LogBuffer,
    initial_route: &str,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (tx, mut rx) = mpsc::channel(64);
    let mut app = App::new(Arc::new(api), session, config, log_buffer, tx);
    app.navigate(initial_route);

    let result = run_event_loop(&mut terminal, &mut app, &mut rx).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on whichever comes first:
/// 1. Keyboard input
/// 2. Timer ticks (spinners, toast expiry)
/// 3. Results from background API tasks
async fn run_event_loop<A: DogApi>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<A>,
    rx: &mut mpsc::Receiver<AppMessage>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(150));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        input::handle_key_event(app, key_event);
                    }
                }
            } => {}

            _ = tick_interval.tick() => app.tick(),

            Some(message) = rx.recv() => app.handle_message(message),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
