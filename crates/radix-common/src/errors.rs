use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("options file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("options parse error: {0}")]
    ParseError(String),

    #[error("options validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("serialize error: {0}")]
    Serialize(String),

    #[error("{0}")]
    Other(String),
}
