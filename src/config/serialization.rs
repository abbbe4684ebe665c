//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the full config as a commented TOML document
    pub fn to_toml(&self) -> String {
        format!(
            r#"# doglover configuration
# Precedence: command-line flags > environment variables > this file > defaults

# Dog search service (env: DOGLOVER_API_URL)
api_url = "{api_url}"

# Transport timeout for each request, in seconds
request_timeout_secs = {timeout}

# Rows per page when the search view opens: 5, 10 or 25
default_page_size = {page_size}

# Where the logged-in user name is remembered (env: DOGLOVER_SESSION_FILE)
session_file = {session_file:?}

# Theme: "dark" or "light" (env: DOGLOVER_THEME)
theme = "{theme}"

[logging]
# Log level: trace, debug, info, warn, error (RUST_LOG overrides)
level = "{level}"
# Also write JSON logs to rotating files
file_enabled = {file_enabled}
file_dir = {file_dir:?}
# Rotation: hourly, daily, never
file_rotation = "{rotation}"
file_prefix = "{prefix}"
"#,
            api_url = self.api_url,
            timeout = self.request_timeout_secs,
            page_size = self.default_page_size.get(),
            session_file = self.session_file.display().to_string(),
            theme = self.theme,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display().to_string(),
            rotation = self.logging.file_rotation.as_str(),
            prefix = self.logging.file_prefix,
        )
    }
}
