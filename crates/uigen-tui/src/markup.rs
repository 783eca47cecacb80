//! HTML rendering of the tool status badge for the web chat.
//!
//! The class names are the Tailwind utilities the chat stylesheet ships;
//! `animate-spin` and `bg-emerald-500` double as the state markers.

use uigen_tools::{ToolInvocation, ToolStatus};

use crate::tui::widgets::formatters;

pub const CONTAINER_CLASS: &str = "inline-flex items-center gap-2 mt-2 px-3 py-1.5 bg-neutral-50 rounded-lg text-xs font-mono border border-neutral-200";
pub const COMPLETED_CLASS: &str = "w-2 h-2 rounded-full bg-emerald-500";
pub const SPINNER_CLASS: &str = "w-3 h-3 animate-spin text-blue-600";
pub const LABEL_CLASS: &str = "text-neutral-700";

/// Class present only in the completed state
pub const COMPLETED_MARKER: &str = "bg-emerald-500";
/// Class present only in the pending state
pub const SPINNER_MARKER: &str = "animate-spin";

const LOADER_ICON_BODY: &str = r#"<path d="M21 12a9 9 0 1 1-6.219-8.56"></path>"#;

pub fn render_html(invocation: &ToolInvocation) -> String {
    let message = formatters::tool_message(invocation);
    render_badge(invocation.status(), &message)
}

pub fn render_badge(status: ToolStatus, message: &str) -> String {
    let indicator = match status {
        ToolStatus::Completed => format!(r#"<div class="{COMPLETED_CLASS}"></div>"#),
        ToolStatus::Pending => format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="{SPINNER_CLASS}">{LOADER_ICON_BODY}</svg>"#
        ),
    };

    format!(
        r#"<div class="{CONTAINER_CLASS}">{indicator}<span class="{LABEL_CLASS}">{}</span></div>"#,
        html_escape::encode_text(message)
    )
}
