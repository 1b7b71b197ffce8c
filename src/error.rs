use thiserror::Error;
use crate::fields::Field;

/// Errors raised while turning console text into typed values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid id: {0:?} is not an integer")]
    InvalidId(String),
    #[error("{0} must not be empty")]
    EmptyField(Field),
}

/// Errors raised by the storage layer.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Store communication error: {0}")]
    ActorCommunication(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(e: sqlx::Error) -> Self {
        StorageError::Database(e.to_string())
    }
}

/// Everything that can end a console session early.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Console error: {0}")]
    Io(String),
    #[error("Input closed before a line was entered")]
    InputClosed,
    #[error("A command has already been run in this session")]
    CommandAlreadyRun,
    #[error("Startup failed: {0}")]
    Startup(String),
}

impl From<std::io::Error> for SessionError {
    fn from(e: std::io::Error) -> Self {
        SessionError::Io(e.to_string())
    }
}
