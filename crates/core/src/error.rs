use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotegraphError {
    #[error("Invalid source path: {0:?}")]
    InvalidPath(String),
    #[error("Duplicate identity key: {0}")]
    DuplicateKey(String),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NotegraphError>;
