//! System clipboard access via `arboard`
//!
//! A new handle is opened per copy; nothing is held between calls.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard. Fails on headless sessions.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    Clipboard::new()
        .context("Failed to access clipboard")?
        .set_text(text)
        .context("Failed to set clipboard text")
}
