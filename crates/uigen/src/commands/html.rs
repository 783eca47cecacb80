use super::Command;
use crate::error::Error;
use crate::input::{parse_invocations, read_input};
use async_trait::async_trait;
use eyre::Result;
use std::io::Write;
use std::path::PathBuf;
use uigen_tui::markup::render_html;

pub struct HtmlCommand {
    pub input: Option<PathBuf>,
}

#[async_trait]
impl Command for HtmlCommand {
    async fn execute(&self) -> Result<()> {
        let text = read_input(self.input.as_deref()).await?;
        let parsed = parse_invocations(&text);

        let mut stdout = std::io::stdout().lock();
        for invocation in &parsed.invocations {
            writeln!(stdout, "{}", render_html(invocation))?;
        }

        if !parsed.invalid.is_empty() {
            return Err(Error::InvalidInput {
                failed: parsed.invalid.len(),
                total: parsed.total(),
            }
            .into());
        }
        Ok(())
    }
}
