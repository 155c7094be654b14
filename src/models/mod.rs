//! Core data models for amountfmt
//!
//! Value objects shared by the formatter, parser and masker: currency
//! definitions, locale tags and format options.

pub mod currency;
pub mod locale;
pub mod options;

pub use currency::{CurrencyDefinition, SymbolPosition};
pub use locale::LocaleTag;
pub use options::{FormatOptions, FormatStyle, NumberStyle, MAX_FRACTION_DIGITS};
