use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::Display;

use crate::error::ToolError;
use crate::result::is_truthy;
use crate::tools::ToolArgs;

/// Lifecycle state of a tool invocation as reported by the chat stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ToolInvocationState {
    /// Arguments are still streaming in
    PartialCall,
    Call,
    Result,
}

/// Visual state of a tool invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ToolStatus {
    Pending,
    Completed,
}

/// A single agent tool call, its arguments and completion state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToolInvocation {
    #[serde(default)]
    pub tool_call_id: String,
    pub tool_name: String,
    #[serde(default = "empty_args")]
    pub args: Value,
    pub state: ToolInvocationState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

fn empty_args() -> Value {
    Value::Object(serde_json::Map::new())
}

impl ToolInvocation {
    /// An invocation in the `call` state with no result yet.
    pub fn call(tool_name: impl Into<String>, args: Value) -> Self {
        Self {
            tool_call_id: String::new(),
            tool_name: tool_name.into(),
            args,
            state: ToolInvocationState::Call,
            result: None,
        }
    }

    /// Moves the invocation to the `result` state carrying `result`.
    pub fn with_result(mut self, result: Value) -> Self {
        self.state = ToolInvocationState::Result;
        self.result = Some(result);
        self
    }

    pub fn with_id(mut self, tool_call_id: impl Into<String>) -> Self {
        self.tool_call_id = tool_call_id.into();
        self
    }

    pub fn from_json(input: &str) -> Result<Self, ToolError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_value(value: Value) -> Result<Self, ToolError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Typed view of the argument bag, keyed by tool name and command.
    pub fn typed_args(&self) -> ToolArgs {
        ToolArgs::from_call(&self.tool_name, &self.args)
    }

    /// Completed only when the stream delivered a result and that result is truthy.
    pub fn status(&self) -> ToolStatus {
        let has_result = self.result.as_ref().is_some_and(is_truthy);
        if self.state == ToolInvocationState::Result && has_result {
            ToolStatus::Completed
        } else {
            ToolStatus::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_stream_shape() {
        let invocation = ToolInvocation::from_json(
            r#"{
                "toolCallId": "123",
                "toolName": "str_replace_editor",
                "args": { "command": "create", "path": "/App.jsx" },
                "state": "result",
                "result": "Success"
            }"#,
        )
        .expect("valid invocation");

        assert_eq!(invocation.tool_call_id, "123");
        assert_eq!(invocation.tool_name, "str_replace_editor");
        assert_eq!(invocation.state, ToolInvocationState::Result);
        assert_eq!(invocation.result, Some(json!("Success")));
    }

    #[test]
    fn missing_args_default_to_empty_object() {
        let invocation =
            ToolInvocation::from_json(r#"{"toolName": "noop", "state": "call"}"#).unwrap();
        assert_eq!(invocation.args, json!({}));
        assert_eq!(invocation.result, None);
        assert_eq!(invocation.tool_call_id, "");
    }

    #[test]
    fn partial_call_state_is_accepted() {
        let invocation =
            ToolInvocation::from_json(r#"{"toolName": "noop", "state": "partial-call"}"#).unwrap();
        assert_eq!(invocation.state, ToolInvocationState::PartialCall);
        assert_eq!(invocation.status(), ToolStatus::Pending);
    }

    #[test]
    fn unknown_state_is_rejected() {
        let err = ToolInvocation::from_json(r#"{"toolName": "noop", "state": "done"}"#)
            .expect_err("unknown state");
        assert!(matches!(err, ToolError::InvalidInvocation { .. }));
    }

    #[test]
    fn status_requires_result_state_and_truthy_result() {
        let call = ToolInvocation::call("noop", json!({}));
        assert_eq!(call.status(), ToolStatus::Pending);

        assert_eq!(
            call.clone().with_result(json!("Success")).status(),
            ToolStatus::Completed
        );
        assert_eq!(
            call.clone().with_result(json!({ "success": true })).status(),
            ToolStatus::Completed
        );
        assert_eq!(call.clone().with_result(json!("")).status(), ToolStatus::Pending);
        assert_eq!(call.clone().with_result(json!(0)).status(), ToolStatus::Pending);
        assert_eq!(call.clone().with_result(Value::Null).status(), ToolStatus::Pending);

        let mut stale = call.with_result(json!("Success"));
        stale.state = ToolInvocationState::Call;
        assert_eq!(stale.status(), ToolStatus::Pending);
    }

    #[test]
    fn state_display_matches_wire_names() {
        assert_eq!(ToolInvocationState::PartialCall.to_string(), "partial-call");
        assert_eq!(ToolInvocationState::Result.to_string(), "result");
        assert_eq!(ToolStatus::Completed.to_string(), "completed");
    }
}
