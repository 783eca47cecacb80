use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;

pub const STR_REPLACE_EDITOR_TOOL_NAME: &str = "str_replace_editor";

/// Sub-operation of the `str_replace_editor` tool.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EditorCommand {
    View,
    Create,
    StrReplace,
    Insert,
    UndoEdit,
    /// Any command outside the known vocabulary, kept verbatim
    Other(String),
}

impl EditorCommand {
    pub fn as_str(&self) -> &str {
        match self {
            EditorCommand::View => "view",
            EditorCommand::Create => "create",
            EditorCommand::StrReplace => "str_replace",
            EditorCommand::Insert => "insert",
            EditorCommand::UndoEdit => "undo_edit",
            EditorCommand::Other(command) => command,
        }
    }
}

impl From<String> for EditorCommand {
    fn from(command: String) -> Self {
        match command.as_str() {
            "view" => EditorCommand::View,
            "create" => EditorCommand::Create,
            "str_replace" => EditorCommand::StrReplace,
            "insert" => EditorCommand::Insert,
            "undo_edit" => EditorCommand::UndoEdit,
            _ => EditorCommand::Other(command),
        }
    }
}

impl From<EditorCommand> for String {
    fn from(command: EditorCommand) -> Self {
        command.as_str().to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrReplaceEditorParams {
    #[serde(default, deserialize_with = "lenient::command")]
    pub command: Option<EditorCommand>,
    /// Absolute path inside the virtual file system
    #[serde(default, deserialize_with = "lenient::string")]
    pub path: Option<String>,
}

impl StrReplaceEditorParams {
    pub fn from_args(args: &Value) -> Self {
        lenient::params(STR_REPLACE_EDITOR_TOOL_NAME, args)
    }
}
