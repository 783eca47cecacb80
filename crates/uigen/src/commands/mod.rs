use async_trait::async_trait;
use eyre::Result;

pub mod html;
pub mod label;
pub mod preferences;
pub mod prompt;
pub mod themes;

#[async_trait]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}
