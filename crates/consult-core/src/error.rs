use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Snapshot not found: {0}")]
    SnapshotNotFound(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
