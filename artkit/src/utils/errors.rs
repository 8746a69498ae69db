use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtkitError {
    #[error("Division by zero: {0} / 0")]
    DivisionByZero(f64),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArtkitError>;

impl From<ArtkitError> for String {
    fn from(e: ArtkitError) -> Self {
        e.to_string()
    }
}
