//! Locale capability layer
//!
//! - `provider`: the [`LocaleProvider`] trait the formatter and parser depend on
//! - `conventions`: per-locale separators, grouping and rounding
//! - `builtin`: table-driven provider used by default

pub mod builtin;
pub mod conventions;
pub mod provider;

pub use builtin::{locale_from_vars, BuiltinLocales};
pub use conventions::LocaleConventions;
pub use provider::{join_parts, LocaleProvider, NumberPart, PartKind, Separators, SAMPLE_VALUE};
