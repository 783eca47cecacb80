use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;

pub const FILE_MANAGER_TOOL_NAME: &str = "file_manager";

/// Sub-operation of the `file_manager` tool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FileManagerCommand {
    Rename,
    Delete,
    Other(String),
}

impl FileManagerCommand {
    pub fn as_str(&self) -> &str {
        match self {
            FileManagerCommand::Rename => "rename",
            FileManagerCommand::Delete => "delete",
            FileManagerCommand::Other(command) => command,
        }
    }
}

impl From<String> for FileManagerCommand {
    fn from(command: String) -> Self {
        match command.as_str() {
            "rename" => FileManagerCommand::Rename,
            "delete" => FileManagerCommand::Delete,
            _ => FileManagerCommand::Other(command),
        }
    }
}

impl From<FileManagerCommand> for String {
    fn from(command: FileManagerCommand) -> Self {
        command.as_str().to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileManagerParams {
    #[serde(default, deserialize_with = "lenient::command")]
    pub command: Option<FileManagerCommand>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub path: Option<String>,
    /// Destination for `rename`
    #[serde(default, deserialize_with = "lenient::string")]
    pub new_path: Option<String>,
}

impl FileManagerParams {
    pub fn from_args(args: &Value) -> Self {
        lenient::params(FILE_MANAGER_TOOL_NAME, args)
    }
}
