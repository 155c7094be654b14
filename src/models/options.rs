//! Format options
//!
//! `FormatOptions` is validated at construction: a maximum fraction-digit
//! count below the minimum is rejected, as is anything above
//! [`MAX_FRACTION_DIGITS`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AmountError, AmountResult};

/// Upper bound for fraction digits
pub const MAX_FRACTION_DIGITS: u8 = 20;

/// Output style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
    /// Plain locale number
    #[default]
    Decimal,
    /// Number with a currency symbol
    Currency,
}

impl fmt::Display for FormatStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decimal => write!(f, "decimal"),
            Self::Currency => write!(f, "currency"),
        }
    }
}

/// The subset of options a locale provider needs to render digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberStyle {
    pub min_fraction_digits: u8,
    pub max_fraction_digits: u8,
    pub use_grouping: bool,
}

/// Per-call formatting options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    style: FormatStyle,
    currency_code: Option<String>,
    min_fraction_digits: u8,
    max_fraction_digits: u8,
    use_grouping: bool,
}

impl FormatOptions {
    /// Create validated options
    pub fn new(
        style: FormatStyle,
        currency_code: Option<String>,
        min_fraction_digits: u8,
        max_fraction_digits: u8,
        use_grouping: bool,
    ) -> AmountResult<Self> {
        validate_fraction_digits(min_fraction_digits, max_fraction_digits)?;

        Ok(Self {
            style,
            currency_code: currency_code
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            min_fraction_digits,
            max_fraction_digits,
            use_grouping,
        })
    }

    /// Decimal style with 0 to 3 fraction digits and grouping
    pub fn decimal() -> Self {
        Self {
            style: FormatStyle::Decimal,
            currency_code: None,
            min_fraction_digits: 0,
            max_fraction_digits: 3,
            use_grouping: true,
        }
    }

    /// Currency style with exactly 2 fraction digits and grouping
    pub fn currency(code: impl Into<String>) -> Self {
        let code = code.into().trim().to_string();
        Self {
            style: FormatStyle::Currency,
            currency_code: Some(code).filter(|c| !c.is_empty()),
            min_fraction_digits: 2,
            max_fraction_digits: 2,
            use_grouping: true,
        }
    }

    /// Replace the fraction-digit bounds
    pub fn with_fraction_digits(mut self, min: u8, max: u8) -> AmountResult<Self> {
        validate_fraction_digits(min, max)?;
        self.min_fraction_digits = min;
        self.max_fraction_digits = max;
        Ok(self)
    }

    /// Switch to currency style for the given code, keeping digit rules
    pub fn with_currency(mut self, code: &str) -> Self {
        self.style = FormatStyle::Currency;
        self.currency_code = Some(code.trim().to_string()).filter(|c| !c.is_empty());
        self
    }

    /// Enable or disable digit grouping
    pub fn with_grouping(mut self, use_grouping: bool) -> Self {
        self.use_grouping = use_grouping;
        self
    }

    pub fn style(&self) -> FormatStyle {
        self.style
    }

    pub fn currency_code(&self) -> Option<&str> {
        self.currency_code.as_deref()
    }

    pub fn min_fraction_digits(&self) -> u8 {
        self.min_fraction_digits
    }

    pub fn max_fraction_digits(&self) -> u8 {
        self.max_fraction_digits
    }

    pub fn use_grouping(&self) -> bool {
        self.use_grouping
    }

    /// Digit rendering rules for the locale provider
    pub fn number_style(&self) -> NumberStyle {
        NumberStyle {
            min_fraction_digits: self.min_fraction_digits,
            max_fraction_digits: self.max_fraction_digits,
            use_grouping: self.use_grouping,
        }
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::decimal()
    }
}

fn validate_fraction_digits(min: u8, max: u8) -> AmountResult<()> {
    if max < min {
        return Err(AmountError::InvalidOptions(format!(
            "max_fraction_digits ({}) is less than min_fraction_digits ({})",
            max, min
        )));
    }
    if max > MAX_FRACTION_DIGITS {
        return Err(AmountError::InvalidOptions(format!(
            "max_fraction_digits ({}) exceeds {}",
            max, MAX_FRACTION_DIGITS
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_max_below_min() {
        let err = FormatOptions::new(FormatStyle::Decimal, None, 3, 2, true).unwrap_err();
        assert!(matches!(err, AmountError::InvalidOptions(_)));
    }

    #[test]
    fn test_rejects_too_many_digits() {
        assert!(FormatOptions::decimal().with_fraction_digits(0, 21).is_err());
        assert!(FormatOptions::decimal().with_fraction_digits(0, 20).is_ok());
    }

    #[test]
    fn test_currency_defaults() {
        let opts = FormatOptions::currency("EUR");
        assert_eq!(opts.style(), FormatStyle::Currency);
        assert_eq!(opts.currency_code(), Some("EUR"));
        assert_eq!(opts.min_fraction_digits(), 2);
        assert_eq!(opts.max_fraction_digits(), 2);
        assert!(opts.use_grouping());
    }

    #[test]
    fn test_blank_currency_code_is_none() {
        let opts = FormatOptions::new(FormatStyle::Currency, Some("  ".into()), 2, 2, true).unwrap();
        assert_eq!(opts.currency_code(), None);
    }

    #[test]
    fn test_number_style() {
        let opts = FormatOptions::decimal()
            .with_fraction_digits(1, 4)
            .unwrap()
            .with_grouping(false);
        let style = opts.number_style();
        assert_eq!(style.min_fraction_digits, 1);
        assert_eq!(style.max_fraction_digits, 4);
        assert!(!style.use_grouping);
    }
}
