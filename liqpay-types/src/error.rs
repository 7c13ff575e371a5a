//! Error types for payload handling.

use serde_json::error::Category;

/// Errors raised while converting records to or from wire bytes.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("Failed to serialize payload: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Malformed payload at line {line}, column {column}: {source}")]
    Malformed {
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl PayloadError {
    pub(crate) fn malformed(source: serde_json::Error) -> Self {
        PayloadError::Malformed {
            line: source.line(),
            column: source.column(),
            source,
        }
    }

    /// True when the payload was well-formed JSON but a field had the wrong type.
    pub fn is_type_mismatch(&self) -> bool {
        match self {
            PayloadError::Malformed { source, .. } => source.classify() == Category::Data,
            PayloadError::Serialize(_) => false,
        }
    }

    /// True when the payload was not valid JSON (including truncated input).
    pub fn is_syntax(&self) -> bool {
        match self {
            PayloadError::Malformed { source, .. } => {
                matches!(source.classify(), Category::Syntax | Category::Eof)
            }
            PayloadError::Serialize(_) => false,
        }
    }
}

/// An enumerated field holds a token outside its value set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid value for `{field}`: {value:?}")]
    InvalidValue { field: &'static str, value: String },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidValue { field, .. } => field,
        }
    }
}
