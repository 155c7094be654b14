//! Display formatting for terminal output
//!
//! Provides table and detail views of registry data for the CLI.

pub mod currency;

pub use currency::{format_currency_details, format_currency_list};
