pub mod markup;
pub mod tui;

pub use tui::ansi::write_line;
pub use tui::theme::{Theme, ThemeLoader};
pub use tui::widgets::formatters::{format_message, tool_message};
pub use tui::widgets::tool_status::ToolStatusWidget;
