use crate::storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PracticeError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("lookup error: {0}")]
    Lookup(String),
    #[error("no data: {0}")]
    NoData(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("io error: {0}")]
    Io(String),
}

impl PracticeError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn lookup(msg: impl Into<String>) -> Self {
        Self::Lookup(msg.into())
    }
}

impl From<StorageError> for PracticeError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for PracticeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<std::io::Error> for PracticeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<chrono::ParseError> for PracticeError {
    fn from(err: chrono::ParseError) -> Self {
        Self::Parse(err.to_string())
    }
}
