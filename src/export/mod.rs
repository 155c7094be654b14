//! Export module for amountfmt
//!
//! Turns amounts of unknown origin into canonical numeric strings that an
//! export writer (CSV, spreadsheet, JSON) can embed verbatim.

pub mod normalize;

pub use normalize::{canonical_number, normalize_for_export, parse_unknown, ExportValue};
