//! Reading tool invocations from files or stdin.
//!
//! Input is either a single JSON array of invocations or one JSON object per
//! line. Blank lines are skipped.

use std::path::Path;
use tokio::io::AsyncReadExt;
use uigen_tools::{ToolError, ToolInvocation};

/// An invocation that failed to decode, with its 1-based line number
#[derive(Debug)]
pub struct InvalidLine {
    pub line: usize,
    pub error: ToolError,
}

#[derive(Debug, Default)]
pub struct ParsedInput {
    pub invocations: Vec<ToolInvocation>,
    pub invalid: Vec<InvalidLine>,
}

impl ParsedInput {
    pub fn total(&self) -> usize {
        self.invocations.len() + self.invalid.len()
    }
}

pub async fn read_input(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path).await,
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            Ok(buf)
        }
    }
}

pub fn parse_invocations(text: &str) -> ParsedInput {
    if text.trim_start().starts_with('[') {
        return match serde_json::from_str::<Vec<ToolInvocation>>(text) {
            Ok(invocations) => ParsedInput {
                invocations,
                invalid: Vec::new(),
            },
            Err(e) => ParsedInput {
                invocations: Vec::new(),
                invalid: vec![InvalidLine {
                    line: e.line(),
                    error: e.into(),
                }],
            },
        };
    }

    let mut parsed = ParsedInput::default();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match ToolInvocation::from_json(line) {
            Ok(invocation) => parsed.invocations.push(invocation),
            Err(error) => {
                tracing::warn!(line = idx + 1, %error, "Skipping malformed tool invocation");
                parsed.invalid.push(InvalidLine {
                    line: idx + 1,
                    error,
                });
            }
        }
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_lines_and_skips_blanks() {
        let text = r#"
{"toolName": "file_manager", "args": {"command": "delete", "path": "/a.js"}, "state": "call"}

{"toolName": "noop", "state": "result", "result": "ok"}
"#;
        let parsed = parse_invocations(text);
        assert_eq!(parsed.invocations.len(), 2);
        assert!(parsed.invalid.is_empty());
        assert_eq!(parsed.invocations[1].tool_name, "noop");
    }

    #[test]
    fn records_bad_lines_with_line_numbers() {
        let text = "{\"toolName\": \"a\", \"state\": \"call\"}\nnot json\n{\"toolName\": \"b\"}\n";
        let parsed = parse_invocations(text);
        assert_eq!(parsed.invocations.len(), 1);
        let lines: Vec<usize> = parsed.invalid.iter().map(|i| i.line).collect();
        assert_eq!(lines, vec![2, 3]);
        assert_eq!(parsed.total(), 3);
    }

    #[test]
    fn parses_json_array() {
        let text = r#"[
            {"toolName": "a", "state": "call"},
            {"toolName": "b", "state": "partial-call"}
        ]"#;
        let parsed = parse_invocations(text);
        assert_eq!(parsed.invocations.len(), 2);
    }

    #[test]
    fn malformed_array_is_one_failure() {
        let parsed = parse_invocations("[{\"toolName\": \"a\"}]");
        assert!(parsed.invocations.is_empty());
        assert_eq!(parsed.invalid.len(), 1);
    }
}
