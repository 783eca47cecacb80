pub mod formatters;
pub mod tool_status;

pub use tool_status::ToolStatusWidget;
