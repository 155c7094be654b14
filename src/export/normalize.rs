//! Locale-agnostic amount normalization for export
//!
//! Input here has no known locale (pasted text, third-party imports), so the
//! decimal separator is guessed:
//!
//! - comma but no period: the comma is the decimal separator
//! - comma and period: whichever comes last is the decimal separator, every
//!   occurrence of the other one is grouping
//! - period only, or neither: taken as-is
//!
//! Input that still does not parse is returned trimmed and otherwise
//! untouched, so an export never swaps a value for a sentinel.

use crate::error::{AmountError, AmountResult};
use crate::services::parser::{parse_literal, GROUPING_SPACES};

/// Raw value handed to the normalizer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExportValue<'a> {
    Number(f64),
    Text(&'a str),
}

impl From<f64> for ExportValue<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl<'a> From<&'a str> for ExportValue<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for ExportValue<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

/// Normalize a value to a canonical numeric string for export
pub fn normalize_for_export<'a>(input: impl Into<ExportValue<'a>>) -> String {
    match input.into() {
        ExportValue::Number(value) => canonical_number(value),
        ExportValue::Text(text) => match parse_unknown(text) {
            Ok(value) => canonical_number(value),
            Err(err) => {
                tracing::debug!(error = %err, "keeping unparsable export value as-is");
                text.trim().to_string()
            }
        },
    }
}

/// Parse a string of unknown locale
pub fn parse_unknown(text: &str) -> AmountResult<f64> {
    let compact: String = text
        .trim()
        .chars()
        .filter(|c| !GROUPING_SPACES.contains(c))
        .collect();

    let resolved = match (compact.rfind(','), compact.rfind('.')) {
        (Some(_), None) => compact.replace(',', "."),
        (Some(comma), Some(period)) if comma > period => compact.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => compact.replace(',', ""),
        _ => compact,
    };

    let literal: String = resolved
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-'))
        .collect();

    parse_literal(&literal).ok_or_else(|| AmountError::unparsable(text.trim()))
}

/// Shortest round-trip text for a value; negative zero prints as "0"
pub fn canonical_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
