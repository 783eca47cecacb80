//! One-line status indicator for a tool invocation
//!
//! Renders `<indicator> <message>`: a spinner frame while the tool is
//! pending, a filled dot once it has completed.

use crate::tui::theme::{Component, Theme};
use crate::tui::widgets::formatters;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use uigen_tools::{ToolInvocation, ToolStatus};

/// Indicator shown once a tool has a result
pub const COMPLETED_GLYPH: char = '●';
/// First braille spinner frame, used when the caller supplies none
pub const DEFAULT_SPINNER: char = '⠋';

pub struct ToolStatusWidget {
    tool_name: String,
    message: String,
    status: ToolStatus,
    spinner: char,
    show_tool_name: bool,
}

impl ToolStatusWidget {
    pub fn new(invocation: &ToolInvocation) -> Self {
        Self {
            tool_name: invocation.tool_name.clone(),
            message: formatters::tool_message(invocation),
            status: invocation.status(),
            spinner: DEFAULT_SPINNER,
            show_tool_name: false,
        }
    }

    /// Spinner glyph for the current animation frame
    pub fn with_spinner(mut self, spinner: char) -> Self {
        self.spinner = spinner;
        self
    }

    pub fn with_tool_name(mut self, show: bool) -> Self {
        self.show_tool_name = show;
        self
    }

    pub fn status(&self) -> ToolStatus {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn indicator(&self) -> char {
        match self.status {
            ToolStatus::Pending => self.spinner,
            ToolStatus::Completed => COMPLETED_GLYPH,
        }
    }

    pub fn line(&self, theme: &Theme) -> Line<'static> {
        let indicator_style = match self.status {
            ToolStatus::Pending => theme.style(Component::ToolPending),
            ToolStatus::Completed => theme.style(Component::ToolSuccess),
        };

        let mut spans = vec![
            Span::styled(self.indicator().to_string(), indicator_style),
            Span::raw(" "),
        ];
        if self.show_tool_name {
            spans.push(Span::styled(
                format!("{} ", self.tool_name),
                theme.style(Component::ToolCallHeader),
            ));
        }
        spans.push(Span::styled(
            self.message.clone(),
            theme.style(Component::ToolLabel),
        ));

        Line::from(spans)
    }

    /// Unstyled rendering for non-terminal output
    pub fn plain(&self) -> String {
        if self.show_tool_name {
            format!("{} {} {}", self.indicator(), self.tool_name, self.message)
        } else {
            format!("{} {}", self.indicator(), self.message)
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if let Some(bg) = theme.get_background_color() {
            buf.set_style(area, Style::default().bg(bg));
        }
        self.line(theme).render(area, buf);
    }
}
