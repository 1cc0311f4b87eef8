//! Error types for catalog import, drawing, and interpretation.
//!
//! Interpretation itself is pure in-memory computation, so the only
//! failures are input-contract violations. The catalog helpers add I/O
//! and JSON errors on top.

use thiserror::Error;

/// Errors produced by the reading engine.
#[derive(Debug, Error)]
pub enum ReadingError {
    /// The caller supplied input the engine cannot interpret
    /// (empty card list, draw count out of range).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// A catalog record is missing a required field.
    #[error("malformed catalog entry {entry:?}: missing or invalid `{field}`")]
    MalformedCatalogEntry { entry: String, field: &'static str },

    /// Two catalog records share the same name.
    #[error("duplicate card in catalog: {0}")]
    DuplicateCard(String),

    /// The catalog document is not valid JSON for the entry schema.
    #[error("catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// A reading could not be rendered as JSON.
    #[error("failed to render reading as JSON: {0}")]
    Render(#[source] serde_json::Error),

    /// The catalog file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReadingError {
    /// Shorthand for an `InvalidInput` error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Shorthand for a `MalformedCatalogEntry` error.
    pub fn malformed(entry: impl Into<String>, field: &'static str) -> Self {
        Self::MalformedCatalogEntry {
            entry: entry.into(),
            field,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReadingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = ReadingError::invalid_input("no cards drawn");
        assert!(matches!(err, ReadingError::InvalidInput { .. }));
        assert_eq!(err.to_string(), "invalid input: no cards drawn");
    }

    #[test]
    fn test_malformed_entry_message() {
        let err = ReadingError::malformed("The Fool", "upright");
        assert_eq!(
            err.to_string(),
            "malformed catalog entry \"The Fool\": missing or invalid `upright`"
        );
    }

    #[test]
    fn test_json_error_converts() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: ReadingError = parse.unwrap_err().into();
        assert!(matches!(err, ReadingError::CatalogParse(_)));
    }

    #[test]
    fn test_render_error_is_not_a_parse_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ReadingError::Render(json_err);
        assert!(err.to_string().starts_with("failed to render reading as JSON: "));
        assert!(std::error::Error::source(&err).is_some());
    }
}
