//! amountfmt - locale- and currency-aware amount transcoding
//!
//! This library converts between canonical numeric values and
//! human-readable, locale-formatted strings. It renders amounts with
//! currency symbols placed by the currency registry, reads locale-formatted
//! text back into numbers, normalizes strings of unknown locale for export
//! and masks amounts for privacy mode.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Currency definitions, locale tags and format options
//! - `currency`: Currency registry and built-in dataset
//! - `locale`: Locale provider trait and built-in conventions
//! - `services`: Formatting, parsing and masking
//! - `export`: Normalization of unknown-locale input
//! - `display`, `cli`: Terminal output and command handlers
//!
//! The free functions at the crate root use the built-in registry and the
//! shared built-in locale provider. None of them fail: bad locales degrade
//! to the default locale and then to fixed-point text, and unparsable input
//! becomes `NaN` or is passed through unchanged.
//!
//! # Example
//!
//! ```rust
//! use amountfmt::models::FormatOptions;
//!
//! let text = amountfmt::format(-1234.5, &"de-DE".into(), &FormatOptions::currency("EUR"));
//! assert_eq!(text, "-1.234,50 €");
//!
//! let value = amountfmt::parse(&text, &"de-DE".into());
//! assert_eq!(value, -1234.5);
//! ```

pub mod cli;
pub mod config;
pub mod currency;
pub mod display;
pub mod error;
pub mod export;
pub mod locale;
pub mod models;
pub mod services;

pub use error::{AmountError, AmountResult};
pub use export::normalize_for_export;

use currency::CurrencyRegistry;
use locale::BuiltinLocales;
use models::{FormatOptions, LocaleTag};
use services::{FormatService, ParseService};

fn default_service() -> FormatService<'static> {
    FormatService::new(CurrencyRegistry::builtin(), BuiltinLocales::shared())
}

/// Format a value for display; absent or non-finite values yield ""
pub fn format(value: impl Into<Option<f64>>, locale: &LocaleTag, opts: &FormatOptions) -> String {
    default_service().format(value, locale, opts)
}

/// Parse locale-formatted text; unparsable text yields `NaN`
pub fn parse(text: &str, locale: &LocaleTag) -> f64 {
    ParseService::new(BuiltinLocales::shared()).parse(text, locale)
}

/// Format a value with its digits replaced by filler glyphs
pub fn mask(
    value: impl Into<Option<f64>>,
    locale: &LocaleTag,
    opts: &FormatOptions,
    is_currency: bool,
) -> String {
    default_service().mask(value, locale, opts, is_currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graceful_degradation() {
        let text = format(10.0, &"not-a-real-locale".into(), &FormatOptions::decimal());
        assert!(!text.is_empty());
        assert!(text.contains("10"));

        let text = format(10.0, &"".into(), &FormatOptions::currency("USD"));
        assert!(text.contains("10"));
    }

    #[test]
    fn test_round_trip_through_root_functions() {
        let locale: LocaleTag = "fr-FR".into();
        let opts = FormatOptions::currency("EUR");
        let text = format(-98765.43, &locale, &opts);
        assert_eq!(parse(&text, &locale), -98765.43);
    }

    #[test]
    fn test_unparsable_is_nan() {
        assert!(parse("abc", &"en-US".into()).is_nan());
        assert!(parse("", &"en-US".into()).is_nan());
    }

    #[test]
    fn test_mask_keeps_symbol_and_sign() {
        let text = mask(-1234.5, &"en-US".into(), &FormatOptions::currency("USD"), true);
        assert!(text.starts_with("-$"));
        assert!(!text.chars().any(|c| c.is_ascii_digit()));

        assert_eq!(mask(None, &"en-US".into(), &FormatOptions::decimal(), false), "");
    }

    #[test]
    fn test_normalize_reexport() {
        assert_eq!(normalize_for_export("1.234,56"), "1234.56");
    }
}
