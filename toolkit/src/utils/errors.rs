use artkit::utils::errors::ArtkitError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolkitError {
    #[error("ArtkitError: {0}")]
    ArtkitError(#[from] ArtkitError),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Error while walking directory: {0}")]
    WalkError(#[from] walkdir::Error),
    #[error("Error while serializing: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    #[error("Not found: {0}")]
    NotFoundError(String),
}

pub type Result<T> = std::result::Result<T, ToolkitError>;

impl From<ToolkitError> for String {
    fn from(e: ToolkitError) -> Self {
        e.to_string()
    }
}
