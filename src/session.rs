// Session context - who is logged in, and the last dogs we fetched
//
// The user name survives restarts through a `SessionStore` (a small TOML
// file in normal use). The server's session cookie is not stored here; it
// lives in the HTTP client's cookie jar for the lifetime of the process.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::model::Dog;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session file io: {0}")]
    Io(#[from] std::io::Error),
    #[error("session file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize session: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Persistence backend for the user name
pub trait SessionStore: Send {
    fn load(&self) -> Result<Option<String>, SessionError>;
    fn save(&mut self, user_name: &str) -> Result<(), SessionError>;
}

/// On-disk layout of the session file
#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(rename = "dog_lover_user_name", default)]
    user_name: Option<String>,
}

/// Stores the user name in a TOML file
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let file: SessionFile = toml::from_str(&contents)?;
                Ok(file.user_name)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, user_name: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = SessionFile {
            user_name: Some(user_name.to_string()),
        };
        std::fs::write(&self.path, toml::to_string(&file)?)?;
        Ok(())
    }
}

/// Keeps the user name in memory only
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    user_name: Option<String>,
}

#[cfg(test)]
impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        Ok(self.user_name.clone())
    }

    fn save(&mut self, user_name: &str) -> Result<(), SessionError> {
        self.user_name = Some(user_name.to_string());
        Ok(())
    }
}

/// Application-wide session state, passed explicitly to the views
pub struct Session {
    user_name: String,
    dogs: Vec<Dog>,
    store: Box<dyn SessionStore>,
}

impl Session {
    /// Initialize from the persisted user name (empty if none)
    pub fn load(store: Box<dyn SessionStore>) -> Self {
        let user_name = match store.load() {
            Ok(name) => name.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("Could not read saved session: {}", e);
                String::new()
            }
        };

        Self {
            user_name,
            dogs: Vec::new(),
            store,
        }
    }

    /// Empty until someone logs in
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Upper-cased first character, for the header avatar
    pub fn initial(&self) -> Option<char> {
        self.user_name.chars().next().map(|c| {
            c.to_uppercase().next().unwrap_or(c)
        })
    }

    /// Persist and remember the user name. No validation happens here.
    pub fn update_user_name(&mut self, name: &str) {
        if let Err(e) = self.store.save(name) {
            tracing::warn!("Could not persist user name: {}", e);
        }
        self.user_name = name.to_string();
    }

    pub fn dogs(&self) -> &[Dog] {
        &self.dogs
    }

    pub fn set_dogs(&mut self, dogs: Vec<Dog>) {
        self.dogs = dogs;
    }
}
