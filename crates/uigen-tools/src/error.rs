use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ToolError {
    #[error("Invalid tool invocation: {message}")]
    InvalidInvocation { message: String },
}

impl ToolError {
    pub fn invalid_invocation<M: Into<String>>(message: M) -> Self {
        ToolError::InvalidInvocation {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        ToolError::invalid_invocation(err.to_string())
    }
}
