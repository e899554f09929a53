use thiserror::Error;

use crate::modules::config::ConfigError;
use crate::modules::expression::{ApplicationError, RepositoryError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("Storage error: {0}")]
    StorageError(#[from] RepositoryError),

    #[error("Application error: {0}")]
    ApplicationError(#[from] ApplicationError),

    #[error("Invalid session id: {0}")]
    InvalidSessionId(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
