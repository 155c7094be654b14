//! Custom error types for amountfmt
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions. Transcoding errors never escape the
//! public `format`/`parse`/`normalize_for_export`/`mask` entry points; they
//! are recovered locally and only surface through the `try_*` variants.

use thiserror::Error;

/// The main error type for amountfmt operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    /// Locale tag is malformed or not supported by the locale provider
    #[error("Invalid locale '{tag}': {reason}")]
    InvalidLocale { tag: String, reason: String },

    /// Currency code is absent from the registry
    #[error("Unresolved currency: {0}")]
    UnresolvedCurrency(String),

    /// Input does not reduce to a valid numeric literal
    #[error("Unparsable input: '{0}'")]
    UnparsableInput(String),

    /// Format options failed validation
    #[error("Invalid format options: {0}")]
    InvalidOptions(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl AmountError {
    /// Create an "invalid locale" error
    pub fn invalid_locale(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidLocale {
            tag: tag.into(),
            reason: reason.into(),
        }
    }

    /// Create an "unparsable input" error
    pub fn unparsable(input: impl Into<String>) -> Self {
        Self::UnparsableInput(input.into())
    }

    /// Check if this is an invalid locale error
    pub fn is_invalid_locale(&self) -> bool {
        matches!(self, Self::InvalidLocale { .. })
    }

    /// Check if this is an unresolved currency error
    pub fn is_unresolved_currency(&self) -> bool {
        matches!(self, Self::UnresolvedCurrency(_))
    }

    /// Check if this is an unparsable input error
    pub fn is_unparsable(&self) -> bool {
        matches!(self, Self::UnparsableInput(_))
    }
}

impl From<std::io::Error> for AmountError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AmountError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for amountfmt operations
pub type AmountResult<T> = Result<T, AmountError>;
