//! Light/dark theme and its persisted preference.
//!
//! # Invariants
//! - A missing or unreadable preference falls back to the OS default.
//! - The JSON file store only ever writes `{"theme": "light"|"dark"}`.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Theme picked when nothing is persisted.
    pub fn os_default(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Theme preference persistence failure.
#[derive(Debug)]
pub enum PreferenceError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl Display for PreferenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "theme preference io failed: {err}"),
            Self::Json(err) => write!(f, "theme preference is malformed: {err}"),
        }
    }
}

impl Error for PreferenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for PreferenceError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for PreferenceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Where the theme choice survives between sessions.
pub trait ThemePreferenceStore {
    fn load(&self) -> Result<Option<Theme>, PreferenceError>;
    fn save(&mut self, theme: Theme) -> Result<(), PreferenceError>;
}

/// Process-local store, for tests and headless use.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    theme: Option<Theme>,
}

impl MemoryThemeStore {
    pub fn new(theme: Option<Theme>) -> Self {
        Self { theme }
    }
}

impl ThemePreferenceStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<Theme>, PreferenceError> {
        Ok(self.theme)
    }

    fn save(&mut self, theme: Theme) -> Result<(), PreferenceError> {
        self.theme = Some(theme);
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeFile {
    theme: Theme,
}

/// Stores the preference as a small JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileThemeStore {
    path: PathBuf,
}

impl JsonFileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemePreferenceStore for JsonFileThemeStore {
    fn load(&self) -> Result<Option<Theme>, PreferenceError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let file: ThemeFile = serde_json::from_str(&raw)?;
        Ok(Some(file.theme))
    }

    fn save(&mut self, theme: Theme) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(&ThemeFile { theme })?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}
