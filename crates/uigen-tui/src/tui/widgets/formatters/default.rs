/// Tools outside the known vocabulary are labelled with their raw name.
pub fn message(tool_name: &str) -> String {
    tracing::trace!(tool_name, "No formatter for tool, using raw name");
    tool_name.to_string()
}
