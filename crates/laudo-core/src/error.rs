use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid measurement '{0}': expected a non-negative decimal in millimetres")]
    InvalidMeasurement(String),

    #[error("invalid finding id: {0}")]
    InvalidFindingId(#[from] uuid::Error),
}
