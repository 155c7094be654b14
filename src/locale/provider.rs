//! Locale capability provider interface
//!
//! The formatter and parser never touch locale data directly. They ask a
//! [`LocaleProvider`] to render numbers into structural parts, and derive
//! separators by rendering a fixed sample value.

use crate::error::AmountResult;
use crate::models::{LocaleTag, NumberStyle};

/// Value rendered to discover a locale's separators. Five integer digits
/// keep grouping visible even for locales that only group from 10 000 up.
pub const SAMPLE_VALUE: f64 = 12345.6;

/// Kind of a rendered number fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    MinusSign,
    Integer,
    Group,
    Decimal,
    Fraction,
}

/// One fragment of a rendered number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPart {
    pub kind: PartKind,
    pub value: String,
}

impl NumberPart {
    pub fn new(kind: PartKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

/// Concatenate parts into display text
pub fn join_parts(parts: &[NumberPart]) -> String {
    parts.iter().map(|p| p.value.as_str()).collect()
}

/// Grouping and decimal separators of a locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separators {
    /// Absent when the locale renders the sample without grouping
    pub group: Option<String>,
    pub decimal: String,
}

impl Separators {
    /// Read separators out of a rendered sample
    pub fn from_parts(parts: &[NumberPart]) -> Self {
        let find = |kind| {
            parts
                .iter()
                .find(|p| p.kind == kind)
                .map(|p| p.value.clone())
        };

        Self {
            group: find(PartKind::Group),
            decimal: find(PartKind::Decimal).unwrap_or_else(|| ".".to_string()),
        }
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            group: Some(",".to_string()),
            decimal: ".".to_string(),
        }
    }
}

/// Native number formatting facility for a set of locales
pub trait LocaleProvider: Send + Sync {
    /// Locale used when a requested one is unavailable
    fn default_locale(&self) -> LocaleTag;

    /// Render a finite value into structural parts.
    ///
    /// Fails with `InvalidLocale` when the tag is malformed or unsupported.
    fn format_to_parts(
        &self,
        locale: &LocaleTag,
        value: f64,
        style: &NumberStyle,
    ) -> AmountResult<Vec<NumberPart>>;

    /// Render a finite value as display text
    fn format_number(
        &self,
        locale: &LocaleTag,
        value: f64,
        style: &NumberStyle,
    ) -> AmountResult<String> {
        Ok(join_parts(&self.format_to_parts(locale, value, style)?))
    }

    /// Discover separators by rendering [`SAMPLE_VALUE`]
    fn separators(&self, locale: &LocaleTag) -> AmountResult<Separators> {
        let style = NumberStyle {
            min_fraction_digits: 1,
            max_fraction_digits: 1,
            use_grouping: true,
        };
        let parts = self.format_to_parts(locale, SAMPLE_VALUE, &style)?;
        Ok(Separators::from_parts(&parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_from_parts() {
        let parts = vec![
            NumberPart::new(PartKind::Integer, "12"),
            NumberPart::new(PartKind::Group, "."),
            NumberPart::new(PartKind::Integer, "345"),
            NumberPart::new(PartKind::Decimal, ","),
            NumberPart::new(PartKind::Fraction, "6"),
        ];
        let seps = Separators::from_parts(&parts);
        assert_eq!(seps.group.as_deref(), Some("."));
        assert_eq!(seps.decimal, ",");
        assert_eq!(join_parts(&parts), "12.345,6");
    }

    #[test]
    fn test_separators_without_group_or_decimal() {
        let parts = vec![NumberPart::new(PartKind::Integer, "12345")];
        let seps = Separators::from_parts(&parts);
        assert_eq!(seps.group, None);
        assert_eq!(seps.decimal, ".");
    }
}
