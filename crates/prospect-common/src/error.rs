use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProspectError {
    #[error("source file not found or unreadable: {0}")]
    SourceMissing(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ProspectError>;
