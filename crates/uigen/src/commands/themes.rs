use super::Command;
use async_trait::async_trait;
use eyre::Result;
use std::io::Write;
use uigen_tui::ThemeLoader;

pub struct ThemesCommand {
    pub current: Option<String>,
}

#[async_trait]
impl Command for ThemesCommand {
    async fn execute(&self) -> Result<()> {
        let loader = ThemeLoader::new();
        let mut stdout = std::io::stdout();
        for name in loader.list_themes() {
            let marker = if self.current.as_deref() == Some(name.as_str()) {
                "*"
            } else {
                " "
            };
            writeln!(stdout, "{marker} {name}")?;
        }
        Ok(())
    }
}
