// Dog Lover - browse shelter dogs and find a match from the terminal
//
// Architecture:
// - API client (reqwest): typed calls to the dog search service, session
//   cookie kept in the client's cookie store
// - Views (login, search, filter flyout): plain state machines, no I/O
// - TUI (ratatui): renders the views, runs API calls as background tasks
//   and feeds their results back through an mpsc channel
// - Logging (tracing): captured in memory for the logs panel, optionally
//   mirrored to rotating JSON files

mod api;
mod cli;
mod config;
mod filter;
mod logging;
mod login;
mod model;
mod router;
mod search;
mod session;
mod tui;
mod validation;

use anyhow::Result;
use api::HttpDogApi;
use clap::Parser;
use config::Config;
use logging::LogBuffer;
use router::Route;
use session::{FileSessionStore, Session};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Subcommands (config --show, --path, --reset) exit early
    if cli::handle_cli(&cli)? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::load(&cli.overrides());

    // Logs go to the in-TUI panel (stdout would garble the alternate screen).
    // The guard flushes the file writer and must outlive the TUI.
    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init(&config.logging, &log_buffer);

    tracing::info!(
        "doglover {} starting against {}",
        config::VERSION,
        config.api_url
    );

    let api = HttpDogApi::new(&config.api_url, config.request_timeout())?;
    let session = Session::load(Box::new(FileSessionStore::new(config.session_file.clone())));

    let route = cli.route.as_deref().unwrap_or(Route::ROOT);
    tui::run_tui(api, session, &config, log_buffer, route).await?;

    tracing::info!("Shutting down");
    Ok(())
}
