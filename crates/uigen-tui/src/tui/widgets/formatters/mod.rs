//! Status labels for tool calls.
//!
//! Dispatch goes through the typed [`ToolArgs`] union: each known tool has a
//! module producing its label, and anything else is labelled with its raw
//! tool name. Formatting never fails.

use uigen_tools::{ToolArgs, ToolInvocation};

pub mod default;
pub mod file_manager;
pub mod helpers;
pub mod str_replace_editor;

/// Label for a tool invocation, e.g. "Creating Button.jsx".
pub fn tool_message(invocation: &ToolInvocation) -> String {
    format_message(&invocation.typed_args())
}

pub fn format_message(args: &ToolArgs) -> String {
    match args {
        ToolArgs::StrReplaceEditor(params) => str_replace_editor::message(params),
        ToolArgs::FileManager(params) => file_manager::message(params),
        ToolArgs::Unknown { tool_name, .. } => default::message(tool_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn label(tool_name: &str, args: serde_json::Value) -> String {
        tool_message(&ToolInvocation::call(tool_name, args))
    }

    #[test]
    fn test_create_uses_file_name() {
        assert_eq!(
            label(
                "str_replace_editor",
                json!({ "command": "create", "path": "/src/components/Button.jsx" })
            ),
            "Creating Button.jsx"
        );
    }

    #[test]
    fn test_unknown_tool_ignores_args() {
        assert_eq!(
            label("unknown_tool", json!({ "command": "delete", "path": "/a.js" })),
            "unknown_tool"
        );
        assert_eq!(label("unknown_tool", json!({})), "unknown_tool");
    }

    #[test]
    fn test_tool_name_match_is_case_sensitive() {
        assert_eq!(
            label("File_Manager", json!({ "command": "delete", "path": "/a.js" })),
            "File_Manager"
        );
    }
}
