use std::path::PathBuf;

/// Standardized application directories for uigen.
///
/// - User-level config: uses OS-specific dirs
/// - User-level data: uses OS-specific dirs
pub struct AppPaths;

impl AppPaths {
    /// Return the user-level config directory (platform-specific)
    pub fn user_config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "uigen").map(|d| d.config_dir().to_path_buf())
    }

    /// Return the user-level data directory (platform-specific)
    pub fn user_data_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "uigen").map(|d| d.data_dir().to_path_buf())
    }

    /// Return the user-level preferences path
    pub fn preferences_file() -> Option<PathBuf> {
        Self::user_config_dir().map(|d| d.join("preferences.toml"))
    }

    /// Directories searched for user themes, config dir first
    pub fn theme_dirs() -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        if let Some(config) = Self::user_config_dir() {
            dirs.push(config.join("themes"));
        }
        if let Some(data) = Self::user_data_dir() {
            dirs.push(data.join("themes"));
        }
        dirs
    }
}
