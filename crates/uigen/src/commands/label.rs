use super::Command;
use crate::error::Error;
use crate::input::{parse_invocations, read_input};
use async_trait::async_trait;
use crossterm::tty::IsTty;
use eyre::Result;
use std::io::{self, Write};
use std::path::PathBuf;
use uigen_core::preferences::Preferences;
use uigen_tools::ToolInvocation;
use uigen_tui::tui::get_spinner_char;
use uigen_tui::{Theme, ThemeLoader, ToolStatusWidget, write_line};

pub struct LabelCommand {
    pub input: Option<PathBuf>,
    pub frame: usize,
    pub show_tool_name: bool,
    /// Never emit escapes, even on a terminal
    pub plain: bool,
    pub preferences: Preferences,
}

#[async_trait]
impl Command for LabelCommand {
    async fn execute(&self) -> Result<()> {
        let text = read_input(self.input.as_deref()).await?;
        let parsed = parse_invocations(&text);

        let styled = !self.plain && io::stdout().is_tty();
        let theme = self.theme();

        let mut stdout = io::stdout().lock();
        for invocation in &parsed.invocations {
            self.write(&mut stdout, invocation, &theme, styled)?;
        }

        if parsed.invalid.is_empty() {
            Ok(())
        } else {
            Err(Error::InvalidInput {
                failed: parsed.invalid.len(),
                total: parsed.total(),
            }
            .into())
        }
    }
}

impl LabelCommand {
    /// The configured theme, or the built-in one when unset or unloadable
    fn theme(&self) -> Theme {
        ThemeLoader::new().load_or_default(self.preferences.ui.theme.as_deref())
    }

    fn widget(&self, invocation: &ToolInvocation) -> ToolStatusWidget {
        let spinner = get_spinner_char(self.preferences.ui.spinner, self.frame);
        ToolStatusWidget::new(invocation)
            .with_spinner(spinner)
            .with_tool_name(self.show_tool_name || self.preferences.ui.show_tool_name)
    }

    fn write<W: Write>(
        &self,
        out: &mut W,
        invocation: &ToolInvocation,
        theme: &Theme,
        styled: bool,
    ) -> io::Result<()> {
        let widget = self.widget(invocation);
        if styled {
            write_line(out, &widget.line(theme))
        } else {
            writeln!(out, "{}", widget.plain())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uigen_core::preferences::SpinnerStyle;

    fn command(preferences: Preferences, frame: usize) -> LabelCommand {
        LabelCommand {
            input: None,
            frame,
            show_tool_name: false,
            plain: false,
            preferences,
        }
    }

    fn pending() -> ToolInvocation {
        ToolInvocation::call("file_manager", json!({ "command": "delete", "path": "/a.js" }))
    }

    fn emitted(command: &LabelCommand, invocation: &ToolInvocation, styled: bool) -> String {
        let mut out = Vec::new();
        command
            .write(&mut out, invocation, &command.theme(), styled)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn pending_uses_configured_spinner() {
        let mut prefs = Preferences::default();
        prefs.ui.spinner = SpinnerStyle::Line;

        assert_eq!(emitted(&command(prefs, 2), &pending(), false), "| Deleting a.js\n");
    }

    #[test]
    fn preference_enables_tool_name_prefix() {
        let mut prefs = Preferences::default();
        prefs.ui.show_tool_name = true;
        let invocation = ToolInvocation::call("web_search", json!({})).with_result(json!(["hit"]));

        assert_eq!(
            emitted(&command(prefs, 0), &invocation, false),
            "● web_search web_search\n"
        );
    }

    #[test]
    fn configured_theme_colors_the_indicator() {
        let builtin = emitted(&command(Preferences::default(), 0), &pending(), true);
        assert!(builtin.starts_with("\u{1b}[38;2;37;99;235m"));

        let mut prefs = Preferences::default();
        prefs.ui.theme = Some("default-dark".to_string());
        let dark = emitted(&command(prefs, 0), &pending(), true);
        assert!(dark.starts_with("\u{1b}[38;2;59;130;246m"));
        assert!(dark.contains("Deleting a.js"));
    }

    #[test]
    fn unknown_theme_falls_back_to_builtin() {
        let mut prefs = Preferences::default();
        prefs.ui.theme = Some("no-such-theme".to_string());

        assert_eq!(
            emitted(&command(prefs, 0), &pending(), true),
            emitted(&command(Preferences::default(), 0), &pending(), true)
        );
    }

    #[test]
    fn plain_output_has_no_escapes() {
        let mut prefs = Preferences::default();
        prefs.ui.theme = Some("default-dark".to_string());

        assert!(!emitted(&command(prefs, 0), &pending(), false).contains('\u{1b}'));
    }
}
