use serde_json::Value;

pub mod file_manager;
mod lenient;
pub mod str_replace_editor;

pub use file_manager::{FILE_MANAGER_TOOL_NAME, FileManagerCommand, FileManagerParams};
pub use str_replace_editor::{EditorCommand, STR_REPLACE_EDITOR_TOOL_NAME, StrReplaceEditorParams};

/// Typed view of a tool call's argument bag.
///
/// Known tools get their parameters decoded leniently: malformed or missing
/// fields become `None` rather than failing, so every call maps to a variant.
/// Anything else keeps the raw arguments under `Unknown`.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolArgs {
    StrReplaceEditor(StrReplaceEditorParams),
    FileManager(FileManagerParams),
    Unknown { tool_name: String, args: Value },
}

impl ToolArgs {
    pub fn from_call(tool_name: &str, args: &Value) -> Self {
        match tool_name {
            STR_REPLACE_EDITOR_TOOL_NAME => {
                ToolArgs::StrReplaceEditor(StrReplaceEditorParams::from_args(args))
            }
            FILE_MANAGER_TOOL_NAME => ToolArgs::FileManager(FileManagerParams::from_args(args)),
            _ => ToolArgs::Unknown {
                tool_name: tool_name.to_string(),
                args: args.clone(),
            },
        }
    }

    pub fn tool_name(&self) -> &str {
        match self {
            ToolArgs::StrReplaceEditor(_) => STR_REPLACE_EDITOR_TOOL_NAME,
            ToolArgs::FileManager(_) => FILE_MANAGER_TOOL_NAME,
            ToolArgs::Unknown { tool_name, .. } => tool_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dispatches_on_exact_tool_name() {
        let args = json!({ "command": "create", "path": "/App.jsx" });

        assert!(matches!(
            ToolArgs::from_call("str_replace_editor", &args),
            ToolArgs::StrReplaceEditor(_)
        ));
        assert!(matches!(
            ToolArgs::from_call("file_manager", &args),
            ToolArgs::FileManager(_)
        ));
        assert!(matches!(
            ToolArgs::from_call("Str_Replace_Editor", &args),
            ToolArgs::Unknown { .. }
        ));
    }

    #[test]
    fn unknown_keeps_raw_args() {
        let args = json!({ "query": "buttons" });
        let typed = ToolArgs::from_call("web_search", &args);

        assert_eq!(typed.tool_name(), "web_search");
        assert_eq!(
            typed,
            ToolArgs::Unknown {
                tool_name: "web_search".to_string(),
                args,
            }
        );
    }

    #[test]
    fn non_object_args_decode_to_empty_params() {
        let typed = ToolArgs::from_call("file_manager", &Value::Null);
        assert_eq!(typed, ToolArgs::FileManager(FileManagerParams::default()));
    }
}
