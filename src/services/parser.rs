//! Parse service
//!
//! Recovers canonical values from strings the formatter produced for a known
//! locale. Separators are never hard-coded per locale: they are read off the
//! provider's rendering of a sample value.

use crate::error::{AmountError, AmountResult};
use crate::locale::{LocaleProvider, Separators};
use crate::models::LocaleTag;

/// Whitespace variants locales use as grouping separators
pub(crate) const GROUPING_SPACES: [char; 3] = [' ', '\u{a0}', '\u{202f}'];

/// Service for reading display strings back into numbers
pub struct ParseService<'a> {
    provider: &'a dyn LocaleProvider,
}

impl<'a> ParseService<'a> {
    /// Create a new parse service
    pub fn new(provider: &'a dyn LocaleProvider) -> Self {
        Self { provider }
    }

    /// Parse display text; any failure yields NaN
    pub fn parse(&self, text: &str, locale: &LocaleTag) -> f64 {
        match self.try_parse(text, locale) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(error = %err, "parse failed, returning NaN");
                f64::NAN
            }
        }
    }

    /// Parse display text, reporting `UnparsableInput` on failure
    pub fn try_parse(&self, text: &str, locale: &LocaleTag) -> AmountResult<f64> {
        if text.trim().is_empty() {
            return Err(AmountError::unparsable(text));
        }

        let compact: String = text.chars().filter(|c| !GROUPING_SPACES.contains(c)).collect();

        let separators = self.provider.separators(locale).unwrap_or_else(|err| {
            tracing::debug!(locale = %locale, error = %err, "separator lookup failed, assuming comma grouping");
            Separators::default()
        });

        let mut cleaned = compact;
        if let Some(group) = separators.group.as_deref().filter(|g| !g.is_empty()) {
            if group != separators.decimal {
                cleaned = cleaned.replace(group, "");
            }
        }
        if separators.decimal != "." && !separators.decimal.is_empty() {
            cleaned = cleaned.replace(separators.decimal.as_str(), ".");
        }

        parse_literal(&numeric_literal(&cleaned))
            .ok_or_else(|| AmountError::unparsable(text.trim()))
    }
}

/// Reduce cleaned text to `[+-]digits[.digits]`.
///
/// Only signs survive outside the run between the first and last digit, so
/// symbols such as "Fr." cannot inject a stray period. A period directly
/// before the first digit is kept when nothing but signs precedes it.
fn numeric_literal(cleaned: &str) -> String {
    let is_sign = |c: &char| matches!(*c, '+' | '-');
    let (Some(first), Some(last)) = (
        cleaned.find(|c: char| c.is_ascii_digit()),
        cleaned.rfind(|c: char| c.is_ascii_digit()),
    ) else {
        return String::new();
    };

    let mut start = first;
    if let Some(head) = cleaned[..first].strip_suffix('.') {
        if head.chars().all(|c| is_sign(&c)) {
            start -= 1;
        }
    }

    let mut literal: String = cleaned[..start].chars().filter(is_sign).collect();
    literal.extend(
        cleaned[start..=last]
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || is_sign(c)),
    );
    literal.extend(cleaned[last + 1..].chars().filter(is_sign));
    literal
}

/// Parse a cleaned `[+-]digits[.digits]` literal into a finite value
pub(crate) fn parse_literal(literal: &str) -> Option<f64> {
    literal.parse::<f64>().ok().filter(|v| v.is_finite())
}
