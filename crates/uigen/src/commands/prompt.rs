use super::Command;
use async_trait::async_trait;
use eyre::Result;
use std::io::Write;
use uigen_core::prompts::generation_prompt;

pub struct PromptCommand;

#[async_trait]
impl Command for PromptCommand {
    async fn execute(&self) -> Result<()> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{}", generation_prompt())?;
        Ok(())
    }
}
