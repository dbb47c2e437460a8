//! Custom error types for the analysis/cleaning pipeline.
//!
//! Errors are serializable as `{code, message}` structs so callers (the HTTP
//! server, the CLI) can forward them without re-wrapping.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// The main error type for analysis and cleaning operations.
#[derive(Error, Debug)]
pub enum ProcessingError {
    /// Dataset analysis failed.
    #[error("Failed to analyze dataset: {0}")]
    AnalysisFailed(String),

    /// Dataset cleaning failed.
    #[error("Failed to clean dataset: {0}")]
    CleaningFailed(String),

    /// Column was not found in the dataset.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProcessingError {
    /// Get a stable error code for downstream handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AnalysisFailed(_) => "ANALYSIS_FAILED",
            Self::CleaningFailed(_) => "CLEANING_FAILED",
            Self::ColumnNotFound(_) => "COLUMN_NOT_FOUND",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
        }
    }

    /// Whether the error stems from unparseable input rather than an
    /// environment failure. Callers translate these into client errors.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::AnalysisFailed(_)
                | Self::CleaningFailed(_)
                | Self::ColumnNotFound(_)
                | Self::Polars(_)
        )
    }
}

/// Errors serialize as a struct with `code` and `message` fields.
impl Serialize for ProcessingError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("ProcessingError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for processing operations.
pub type Result<T> = std::result::Result<T, ProcessingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        assert_eq!(
            ProcessingError::AnalysisFailed("x".to_string()).error_code(),
            "ANALYSIS_FAILED"
        );
        assert_eq!(
            ProcessingError::ColumnNotFound("age".to_string()).error_code(),
            "COLUMN_NOT_FOUND"
        );
    }

    #[test]
    fn test_is_input_error() {
        assert!(ProcessingError::CleaningFailed("bad".to_string()).is_input_error());
        let io = ProcessingError::Io(std::io::Error::other("disk"));
        assert!(!io.is_input_error());
    }

    #[test]
    fn test_error_serialization() {
        let error = ProcessingError::ColumnNotFound("Age".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("COLUMN_NOT_FOUND"));
        assert!(json.contains("Age"));
    }
}
