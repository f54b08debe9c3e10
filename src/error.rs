use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("scan error: {0}")]
    Scan(String),
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },
    #[error("delivery error: {0}")]
    Delivery(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl AppError {
    pub fn read(path: impl Into<String>, message: impl ToString) -> Self {
        AppError::Read {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
