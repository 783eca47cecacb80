use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Failed to parse preferences: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("Failed to serialize preferences: {0}")]
    TomlSer(#[from] toml::ser::Error),
}
