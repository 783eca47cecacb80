//! `uigen preferences`: show what the renderer will actually use, edit the
//! file with a check on save, or delete it.

use super::Command;
use crate::error::Error;
use async_trait::async_trait;
use eyre::Result;
use std::io::Write;
use std::path::Path;
use std::process::Command as ProcessCommand;
use uigen_core::preferences::Preferences;
use uigen_tui::ThemeLoader;
use uigen_tui::tui::get_spinner_char;

/// Keys read from the `[ui]` table
const UI_KEYS: &[&str] = &["theme", "spinner", "show_tool_name"];

pub struct PreferencesCommand {
    pub action: PreferencesAction,
}

pub enum PreferencesAction {
    Show,
    Edit,
    Reset,
}

#[async_trait]
impl Command for PreferencesCommand {
    async fn execute(&self) -> Result<()> {
        let path = Preferences::config_path()?;
        let mut stdout = std::io::stdout();

        match self.action {
            PreferencesAction::Show => {
                let prefs = Preferences::load_from(&path)?;
                writeln!(stdout, "{}", summary(&path, &prefs, &ThemeLoader::new()))?;
            }
            PreferencesAction::Edit => {
                if !path.exists() {
                    Preferences::default().save_to(&path)?;
                }
                open_in_editor(&path, &editor_from_env())?;

                let mut stderr = std::io::stderr();
                for warning in check_file(&path, &ThemeLoader::new())? {
                    tracing::warn!(path = %path.display(), "{warning}");
                    writeln!(stderr, "warning: {warning}")?;
                }
            }
            PreferencesAction::Reset => {
                if path.exists() {
                    std::fs::remove_file(&path)?;
                    writeln!(stdout, "Removed {}; defaults apply", path.display())?;
                } else {
                    writeln!(stdout, "No preferences file at {}", path.display())?;
                }
            }
        }
        Ok(())
    }
}

/// Effective settings after theme fallback
fn summary(path: &Path, prefs: &Preferences, loader: &ThemeLoader) -> String {
    let file = if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not created, using defaults)", path.display())
    };

    let theme = match prefs.ui.theme.as_deref() {
        None => "built-in default".to_string(),
        Some(name) => match loader.load_theme(name) {
            Ok(theme) => theme.name,
            Err(e) => format!("built-in default ('{name}' failed to load: {e})"),
        },
    };

    format!(
        "Preferences file: {file}\n\n\
         theme          = {theme}\n\
         spinner        = {} ({})\n\
         show_tool_name = {}",
        prefs.ui.spinner,
        get_spinner_char(prefs.ui.spinner, 0),
        prefs.ui.show_tool_name,
    )
}

/// Re-reads a saved preferences file. Unreadable TOML or wrongly typed
/// values are errors; unknown keys and unloadable themes are warnings.
fn check_file(path: &Path, loader: &ThemeLoader) -> Result<Vec<String>, Error> {
    let contents = std::fs::read_to_string(path)?;
    let invalid = |source| Error::InvalidPreferences {
        path: path.to_path_buf(),
        source,
    };
    let table: toml::Table = toml::from_str(&contents).map_err(invalid)?;
    let prefs: Preferences = toml::from_str(&contents).map_err(invalid)?;

    let mut warnings = Vec::new();
    for (section, value) in &table {
        if section != "ui" {
            warnings.push(format!("unknown section `{section}` is ignored"));
            continue;
        }
        if let Some(ui) = value.as_table() {
            for key in ui.keys().filter(|k| !UI_KEYS.contains(&k.as_str())) {
                warnings.push(format!("unknown key `ui.{key}` is ignored"));
            }
        }
    }

    if let Some(name) = prefs.ui.theme.as_deref() {
        if let Err(e) = loader.load_theme(name) {
            warnings.push(format!(
                "theme `{name}` cannot be loaded ({e}); the built-in theme will be used"
            ));
        }
    }

    Ok(warnings)
}

fn editor_from_env() -> String {
    ["VISUAL", "EDITOR"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "vi".to_string()
            }
        })
}

/// Splits an editor command line like `code --wait` into program and args.
fn split_editor(editor: &str) -> Result<(String, Vec<String>), Error> {
    let editor_error = |reason: String| Error::Editor {
        command: editor.to_string(),
        reason,
    };
    let mut parts = shell_words::split(editor).map_err(|e| editor_error(e.to_string()))?;
    if parts.is_empty() {
        return Err(editor_error("empty command".to_string()));
    }
    let program = parts.remove(0);
    Ok((program, parts))
}

fn open_in_editor(path: &Path, editor: &str) -> Result<(), Error> {
    let (program, mut args) = split_editor(editor)?;
    args.push(path.to_string_lossy().into_owned());

    let status = ProcessCommand::new(&program)
        .args(&args)
        .status()
        .map_err(|e| Error::Editor {
            command: editor.to_string(),
            reason: e.to_string(),
        })?;

    if !status.success() {
        return Err(Error::Editor {
            command: editor.to_string(),
            reason: format!("exited with {status}"),
        });
    }
    Ok(())
}
