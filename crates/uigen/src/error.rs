use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] uigen_core::Error),

    /// `$VISUAL`/`$EDITOR` could not be parsed, launched, or exited non-zero
    #[error("Cannot use editor `{command}`: {reason}. Set $VISUAL or $EDITOR to a working editor.")]
    Editor { command: String, reason: String },

    /// The preferences file was saved in a shape uigen cannot read
    #[error("{} is not a valid preferences file: {source}", .path.display())]
    InvalidPreferences {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("{failed} of {total} tool invocations could not be read")]
    InvalidInput { failed: usize, total: usize },
}
