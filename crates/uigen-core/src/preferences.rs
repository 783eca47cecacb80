use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strum::Display;

use crate::utils::AppPaths;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SpinnerStyle {
    #[default]
    Braille,
    Line,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Preferences {
    #[serde(default)]
    pub ui: UiPreferences,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UiPreferences {
    pub theme: Option<String>,
    #[serde(default)]
    pub spinner: SpinnerStyle,
    /// Prefix every status label with the raw tool name
    #[serde(default)]
    pub show_tool_name: bool,
}

impl Preferences {
    /// Get the path to the preferences file
    pub fn config_path() -> Result<PathBuf, crate::error::Error> {
        AppPaths::preferences_file().ok_or_else(|| {
            crate::error::Error::Configuration("Could not determine config directory".to_string())
        })
    }

    /// Load preferences from disk, or return defaults if not found
    pub fn load() -> Result<Self, crate::error::Error> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load preferences from `path`. A missing file yields defaults, and so
    /// does a file that fails to parse (with a warning).
    pub fn load_from(path: &Path) -> Result<Self, crate::error::Error> {
        if !path.exists() {
            tracing::debug!("No preferences file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        match toml::from_str(&contents) {
            Ok(prefs) => Ok(prefs),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse preferences file at {:?}: {}. Using defaults.",
                    path,
                    e
                );
                Ok(Self::default())
            }
        }
    }

    /// Save preferences to disk
    pub fn save(&self) -> Result<(), crate::error::Error> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), crate::error::Error> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ui_section() {
        let prefs: Preferences = toml::from_str(
            r#"
            [ui]
            theme = "default-light"
            spinner = "line"
            show_tool_name = true
            "#,
        )
        .unwrap();

        assert_eq!(prefs.ui.theme.as_deref(), Some("default-light"));
        assert_eq!(prefs.ui.spinner, SpinnerStyle::Line);
        assert!(prefs.ui.show_tool_name);
    }

    #[test]
    fn empty_file_gives_defaults() {
        let prefs: Preferences = toml::from_str("").unwrap();
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.ui.spinner, SpinnerStyle::Braille);
    }

    #[test]
    fn spinner_style_display() {
        assert_eq!(SpinnerStyle::Braille.to_string(), "braille");
        assert_eq!(SpinnerStyle::Line.to_string(), "line");
    }
}
