use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PwnFinderError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus {
        url: String,
        status: u16,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("File error: {path:?} - {message}")]
    FileError {
        path: PathBuf,
        message: String,
    },

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl From<anyhow::Error> for PwnFinderError {
    fn from(error: anyhow::Error) -> Self {
        PwnFinderError::UnexpectedError(error.to_string())
    }
}

impl From<config::ConfigError> for PwnFinderError {
    fn from(error: config::ConfigError) -> Self {
        PwnFinderError::ConfigError(error.to_string())
    }
}

pub type PwnFinderResult<T> = std::result::Result<T, PwnFinderError>;
