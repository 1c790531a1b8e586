//! # Error Types
//!
//! Custom error types for Buoy Ingest using `thiserror`.

use thiserror::Error;

/// Main error type for Buoy Ingest
#[derive(Debug, Error)]
pub enum IngestError {
    /// Malformed input: bad digit string, invalid hex, or invalid UTF-8
    #[error("format error: {0}")]
    Format(String),

    /// Timestamp component outside calendar range
    #[error("range error: {0}")]
    Range(String),

    /// Non-numeric text where a numeric field was expected
    #[error("type error: field `{field}` is not numeric: `{value}`")]
    Type { field: &'static str, value: String },

    /// Required field absent after payload truncation or envelope extraction
    #[error("missing field: `{0}`")]
    MissingField(&'static str),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Time-series storage write failures
    #[error("storage error: {0}")]
    Storage(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IngestError {
    /// Short stable name of the error kind, for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            IngestError::Format(_) => "format",
            IngestError::Range(_) => "range",
            IngestError::Type { .. } => "type",
            IngestError::MissingField(_) => "missing_field",
            IngestError::Config(_) => "config",
            IngestError::Storage(_) => "storage",
            IngestError::Io(_) => "io",
        }
    }
}

/// Result type alias for Buoy Ingest
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds_are_stable() {
        assert_eq!(IngestError::Format("x".into()).kind(), "format");
        assert_eq!(IngestError::Range("x".into()).kind(), "range");
        assert_eq!(
            IngestError::Type { field: "lat", value: "abc".into() }.kind(),
            "type"
        );
        assert_eq!(IngestError::MissingField("logic_4").kind(), "missing_field");
        assert_eq!(IngestError::Storage("down".into()).kind(), "storage");
    }

    #[test]
    fn test_type_error_names_field_and_value() {
        let err = IngestError::Type { field: "panel_voltage", value: "n/a".into() };
        let msg = err.to_string();
        assert!(msg.contains("panel_voltage"));
        assert!(msg.contains("n/a"));
    }
}
