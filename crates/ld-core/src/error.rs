use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigestError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Unknown severity: {0}")]
    UnknownSeverity(String),
    #[error("Log file not found: {path}")]
    LogNotFound { path: String },
    #[error("Access to {path} is not allowed")]
    PathNotAllowed { path: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DigestError>;
