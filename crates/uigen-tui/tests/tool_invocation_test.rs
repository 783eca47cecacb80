use serde_json::{Value, json};
use uigen_tools::ToolInvocation;
use uigen_tui::markup::{COMPLETED_MARKER, SPINNER_MARKER, render_html};
use uigen_tui::{ToolStatusWidget, tool_message};

fn completed(tool_name: &str, args: Value, result: Value) -> ToolInvocation {
    ToolInvocation::call(tool_name, args)
        .with_id("123")
        .with_result(result)
}

fn assert_label(invocation: &ToolInvocation, expected: &str) {
    assert_eq!(tool_message(invocation), expected);
    assert!(
        render_html(invocation).contains(&format!(">{expected}</span>")),
        "markup should carry label {expected:?}"
    );
}

#[test]
fn create_command_shows_creating() {
    let tool = completed(
        "str_replace_editor",
        json!({ "command": "create", "path": "/src/components/Button.jsx" }),
        json!("Success"),
    );
    assert_label(&tool, "Creating Button.jsx");
}

#[test]
fn str_replace_and_insert_show_editing() {
    let replace = completed(
        "str_replace_editor",
        json!({
            "command": "str_replace",
            "path": "/src/App.jsx",
            "old_str": "old code",
            "new_str": "new code"
        }),
        json!("Success"),
    );
    assert_label(&replace, "Editing App.jsx");

    let insert = completed(
        "str_replace_editor",
        json!({
            "command": "insert",
            "path": "/src/utils/helpers.js",
            "insert_line": 10,
            "new_str": "new line"
        }),
        json!("Success"),
    );
    assert_label(&insert, "Editing helpers.js");
}

#[test]
fn view_and_undo_edit() {
    assert_label(
        &completed(
            "str_replace_editor",
            json!({ "command": "view", "path": "/src/config.json" }),
            json!("Success"),
        ),
        "Viewing config.json",
    );
    assert_label(
        &completed(
            "str_replace_editor",
            json!({ "command": "undo_edit", "path": "/src/index.tsx" }),
            json!("Success"),
        ),
        "Undoing edit in index.tsx",
    );
}

#[test]
fn file_manager_commands() {
    assert_label(
        &completed(
            "file_manager",
            json!({ "command": "delete", "path": "/src/old-component.jsx" }),
            json!({ "success": true }),
        ),
        "Deleting old-component.jsx",
    );
    assert_label(
        &completed(
            "file_manager",
            json!({
                "command": "rename",
                "path": "/src/OldName.jsx",
                "new_path": "/src/NewName.jsx"
            }),
            json!({ "success": true }),
        ),
        "Renaming OldName.jsx to NewName.jsx",
    );
    assert_label(
        &completed(
            "file_manager",
            json!({ "command": "rename", "path": "/src/Component.jsx" }),
            json!({ "success": true }),
        ),
        "Renaming Component.jsx",
    );
    assert_label(
        &completed(
            "file_manager",
            json!({ "command": "unknown_command", "path": "/src/file.js" }),
            json!({ "success": true }),
        ),
        "Managing file.js",
    );
}

#[test]
fn nested_path_extracts_file_name() {
    let tool = completed(
        "str_replace_editor",
        json!({ "command": "create", "path": "/src/components/ui/cards/ProfileCard.tsx" }),
        json!("Success"),
    );
    assert_label(&tool, "Creating ProfileCard.tsx");
}

#[test]
fn graceful_fallbacks() {
    assert_label(
        &completed("unknown_tool", json!({}), json!("Success")),
        "unknown_tool",
    );
    assert_label(
        &completed("str_replace_editor", json!({ "command": "create" }), json!("Success")),
        "Creating file",
    );
    assert_label(
        &completed(
            "str_replace_editor",
            json!({ "command": "unknown_command", "path": "/src/file.js" }),
            json!("Success"),
        ),
        "Working on file.js",
    );
}

#[test]
fn completed_tool_shows_green_dot() {
    let tool = completed(
        "str_replace_editor",
        json!({ "command": "create", "path": "/App.jsx" }),
        json!("Success"),
    );

    let html = render_html(&tool);
    assert!(html.contains(COMPLETED_MARKER));
    assert!(!html.contains(SPINNER_MARKER));
    assert!(ToolStatusWidget::new(&tool).plain().starts_with('●'));
}

#[test]
fn in_progress_tool_shows_spinner() {
    let tool = ToolInvocation::call(
        "str_replace_editor",
        json!({ "command": "create", "path": "/App.jsx" }),
    );

    let html = render_html(&tool);
    assert!(html.contains(SPINNER_MARKER));
    assert!(!html.contains(COMPLETED_MARKER));
    assert!(!ToolStatusWidget::new(&tool).plain().starts_with('●'));
}

#[test]
fn result_state_with_falsy_result_is_still_pending() {
    for result in [json!(""), json!(0), json!(false), Value::Null] {
        let tool = completed("file_manager", json!({ "command": "delete" }), result);
        let html = render_html(&tool);
        assert!(html.contains(SPINNER_MARKER));
        assert!(!html.contains(COMPLETED_MARKER));
    }
}
