// src/theme.rs

//! Persisted light/dark/system preference for the whole display surface.
//!
//! The scan pipeline never reads this; only the UI does.

use color_eyre::eyre::{Result, WrapErr};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::{info, warn};

use crate::logging::get_data_dir;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub fn all() -> Vec<ThemeMode> {
        ThemeMode::iter().collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        }
    }
}

/// Colors used by every widget for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Fill behind every widget.
    pub background: Color,
    /// Body text.
    pub text: Color,
    /// Labels and disabled controls.
    pub muted: Color,
    /// Titles and highlights.
    pub accent: Color,
    pub border: Color,
    /// Detection status when the backend says `Safe`.
    pub safe: Color,
    /// Any other detection status, and errors.
    pub unsafe_: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                background: Color::White,
                text: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Blue,
                border: Color::Gray,
                safe: Color::Green,
                unsafe_: Color::Red,
            },
            ThemeMode::Dark => Self {
                background: Color::Black,
                text: Color::White,
                muted: Color::Gray,
                accent: Color::LightBlue,
                border: Color::DarkGray,
                safe: Color::LightGreen,
                unsafe_: Color::LightRed,
            },
            // Leave the terminal's own colors alone.
            ThemeMode::System => Self {
                background: Color::Reset,
                text: Color::Reset,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                border: Color::Reset,
                safe: Color::Green,
                unsafe_: Color::Red,
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredTheme {
    mode: ThemeMode,
}

/// Read/write handle on the persisted theme preference.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
    mode: ThemeMode,
}

impl ThemeStore {
    pub fn default_path() -> PathBuf {
        get_data_dir().join("theme.json")
    }

    /// Reads the persisted preference, falling back to `System`.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mode = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<StoredTheme>(&raw) {
                Ok(stored) => stored.mode,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Ignoring unreadable theme file.");
                    ThemeMode::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => ThemeMode::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Could not read theme file.");
                ThemeMode::default()
            }
        };
        info!(%mode, "Theme loaded.");
        Self { path, mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.mode)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Switches to `mode` and persists it.
    pub fn set(&mut self, mode: ThemeMode) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(&StoredTheme { mode })?;
        fs::write(&self.path, raw)
            .wrap_err_with(|| format!("failed to write {}", self.path.display()))?;
        self.mode = mode;
        info!(%mode, "Theme changed.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn missing_file_defaults_to_system() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::load(dir.path().join("theme.json"));
        assert_eq!(store.mode(), ThemeMode::System);
    }

    #[test]
    fn preference_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("theme.json");
        let mut store = ThemeStore::load(&path);
        store.set(ThemeMode::Dark).unwrap();

        let reloaded = ThemeStore::load(&path);
        assert_eq!(reloaded.mode(), ThemeMode::Dark);
        assert_eq!(fs::read_to_string(&path).unwrap(), r#"{"mode":"dark"}"#);
    }

    #[test]
    fn corrupt_file_falls_back_to_system() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        fs::write(&path, "{\"mode\":\"sepia\"}").unwrap();
        assert_eq!(ThemeStore::load(&path).mode(), ThemeMode::System);
    }

    #[test]
    fn modes_use_lowercase_names() {
        assert_eq!(ThemeMode::Light.to_string(), "light");
        assert_eq!(ThemeMode::from_str("system").unwrap(), ThemeMode::System);
        assert_eq!(ThemeMode::all(), vec![ThemeMode::Light, ThemeMode::Dark, ThemeMode::System]);
    }

    #[test]
    fn unreadable_path_falls_back_to_system() {
        // A directory where the file should be: the read fails with
        // something other than NotFound.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        fs::create_dir(&path).unwrap();
        let store = ThemeStore::load(path.clone());
        assert_eq!(store.mode(), ThemeMode::System);
        assert_eq!(store.path(), path.as_path());
    }
}
