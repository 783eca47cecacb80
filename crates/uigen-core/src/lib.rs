pub mod error;
pub mod preferences;
pub mod prompts;
pub mod utils;

pub use error::{Error, Result};
pub use preferences::Preferences;
