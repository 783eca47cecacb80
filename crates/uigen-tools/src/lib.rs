pub mod error;
pub mod result;
pub mod schema;
pub mod tools;

pub use error::ToolError;
pub use result::is_truthy;
pub use schema::{ToolInvocation, ToolInvocationState, ToolStatus};
pub use tools::ToolArgs;
