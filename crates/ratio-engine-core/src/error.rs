use thiserror::Error;

#[derive(Debug, Error)]
pub enum RatioEngineError {
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Report export to '{path}' failed: {reason}")]
    ExportFailed { path: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for RatioEngineError {
    fn from(e: serde_json::Error) -> Self {
        RatioEngineError::SerializationError(e.to_string())
    }
}
