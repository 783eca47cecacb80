//! Theme loading functionality

use super::{RawTheme, Theme, ThemeError};
use std::fs;
use std::path::{Path, PathBuf};
use uigen_core::utils::AppPaths;

/// Bundled themes included with the application
const BUNDLED_THEMES: &[(&str, &str)] = &[
    (
        "default-dark",
        include_str!("../../../themes/default-dark.toml"),
    ),
    (
        "default-light",
        include_str!("../../../themes/default-light.toml"),
    ),
];

/// Theme loader responsible for finding and loading theme files
pub struct ThemeLoader {
    search_paths: Vec<PathBuf>,
}

impl ThemeLoader {
    /// Create a new theme loader searching the user config and data dirs
    pub fn new() -> Self {
        Self {
            search_paths: AppPaths::theme_dirs(),
        }
    }

    /// Add a custom search path
    pub fn add_search_path(&mut self, path: PathBuf) {
        self.search_paths.push(path);
    }

    /// Load a theme by name, bundled themes first
    pub fn load_theme(&self, name: &str) -> Result<Theme, ThemeError> {
        if let Some((_, content)) = BUNDLED_THEMES.iter().find(|(id, _)| *id == name) {
            let raw_theme: RawTheme = toml::from_str(content)?;
            return raw_theme.into_theme();
        }

        let theme_file = self.find_theme_file(name)?;
        tracing::debug!("Loading theme '{}' from {:?}", name, theme_file);

        let content = fs::read_to_string(&theme_file)?;
        let raw_theme: RawTheme = toml::from_str(&content)?;

        if raw_theme.name.to_lowercase() != name.to_lowercase() {
            return Err(ThemeError::Validation(format!(
                "Theme name mismatch: expected '{}', found '{}'",
                name, raw_theme.name
            )));
        }

        raw_theme.into_theme()
    }

    /// Load a theme from a specific file path
    pub fn load_theme_from_path(&self, path: &Path) -> Result<Theme, ThemeError> {
        let content = fs::read_to_string(path)?;
        let raw_theme: RawTheme = toml::from_str(&content)?;
        raw_theme.into_theme()
    }

    /// Load `name` if given, falling back to the built-in theme when it is
    /// unset or fails to load.
    pub fn load_or_default(&self, name: Option<&str>) -> Theme {
        let Some(name) = name else {
            return Theme::default();
        };
        match self.load_theme(name) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!("Failed to load theme '{}': {}. Using default.", name, e);
                Theme::default()
            }
        }
    }

    /// List all available themes, sorted
    pub fn list_themes(&self) -> Vec<String> {
        let mut themes: Vec<String> = BUNDLED_THEMES
            .iter()
            .map(|(name, _)| (*name).to_string())
            .collect();

        for search_path in &self.search_paths {
            let Ok(entries) = fs::read_dir(search_path) else {
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if !path.is_file() || path.extension().is_none_or(|ext| ext != "toml") {
                    continue;
                }
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    if !themes.iter().any(|t| t == stem) {
                        themes.push(stem.to_string());
                    }
                }
            }
        }

        themes.sort();
        themes
    }

    fn find_theme_file(&self, name: &str) -> Result<PathBuf, ThemeError> {
        let filename = format!("{name}.toml");

        self.search_paths
            .iter()
            .map(|dir| dir.join(&filename))
            .find(|path| path.exists())
            .ok_or_else(|| ThemeError::NotFound(name.to_string()))
    }
}

impl Default for ThemeLoader {
    fn default() -> Self {
        Self::new()
    }
}
