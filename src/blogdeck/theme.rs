//! Persisted light/dark preference.
//!
//! A single value stored under the `"theme"` key of `preferences.json`. Read at startup,
//! written on toggle.

use crate::error::{BlogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const PREFERENCES_FILENAME: &str = "preferences.json";

/// Key the theme is stored under.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = BlogError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(BlogError::Config(format!(
                "Unknown theme: {} (expected light or dark)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Preferences {
    #[serde(default)]
    theme: ThemeMode,
}

/// Reads the saved theme, `Light` when nothing was saved yet.
pub fn load_theme<P: AsRef<Path>>(dir: P) -> Result<ThemeMode> {
    let path = dir.as_ref().join(PREFERENCES_FILENAME);
    if !path.exists() {
        return Ok(ThemeMode::default());
    }

    let content = fs::read_to_string(&path)?;
    let prefs: Preferences = serde_json::from_str(&content)?;
    Ok(prefs.theme)
}

pub fn save_theme<P: AsRef<Path>>(dir: P, theme: ThemeMode) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let content = serde_json::to_string_pretty(&Preferences { theme })?;
    fs::write(dir.join(PREFERENCES_FILENAME), content)?;
    Ok(())
}

/// Flips the saved theme and persists it. Returns the new theme.
pub fn toggle_theme<P: AsRef<Path>>(dir: P) -> Result<ThemeMode> {
    let dir = dir.as_ref();
    let next = load_theme(dir)?.toggled();
    save_theme(dir, next)?;
    Ok(next)
}
