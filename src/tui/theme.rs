// Color themes for the TUI
//
// Two built-in themes, picked by name from config. Unknown names fall back
// to dark.

use crate::logging::LogLevel;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Resolved theme with every color the views use
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // ─── UI Element Colors ───────────────────────────────────
    pub title: Color,
    pub border: Color,
    pub highlight: Color,
    pub status_bar: Color,
    pub avatar: Color,

    // ─── Selection Colors ────────────────────────────────────
    pub selection: Color,
    pub selection_fg: Color,
    pub checked: Color,

    // ─── Feedback ────────────────────────────────────────────
    pub error: Color,
    pub success: Color,

    // ─── Log Levels ──────────────────────────────────────────
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,

    pub border_type: BorderType,
}

impl Theme {
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "dark" => Self::dark(),
            other => {
                tracing::warn!("Unknown theme {:?}, using dark", other);
                Self::dark()
            }
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::Reset,
            foreground: Color::Gray,
            muted: Color::DarkGray,
            title: Color::Cyan,
            border: Color::DarkGray,
            highlight: Color::Yellow,
            status_bar: Color::Gray,
            avatar: Color::Magenta,
            selection: Color::Rgb(60, 60, 90),
            selection_fg: Color::White,
            checked: Color::Green,
            error: Color::LightRed,
            success: Color::LightGreen,
            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Cyan,
            log_debug: Color::DarkGray,
            border_type: BorderType::Rounded,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::White,
            foreground: Color::Black,
            muted: Color::Gray,
            title: Color::Blue,
            border: Color::Gray,
            highlight: Color::Rgb(200, 110, 0),
            status_bar: Color::DarkGray,
            avatar: Color::Rgb(150, 40, 160),
            selection: Color::Rgb(210, 220, 245),
            selection_fg: Color::Black,
            checked: Color::Rgb(0, 130, 60),
            error: Color::Red,
            success: Color::Rgb(0, 130, 60),
            log_error: Color::Red,
            log_warn: Color::Rgb(170, 100, 0),
            log_info: Color::Blue,
            log_debug: Color::Gray,
            border_type: BorderType::Plain,
        }
    }

    pub fn log_level(&self, level: LogLevel) -> Style {
        let color = match level {
            LogLevel::Error => self.log_error,
            LogLevel::Warn => self.log_warn,
            LogLevel::Info => self.log_info,
            LogLevel::Debug | LogLevel::Trace => self.log_debug,
        };
        Style::default().fg(color)
    }

    /// Style for the focused row / control
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused { self.highlight } else { self.border })
    }
}
