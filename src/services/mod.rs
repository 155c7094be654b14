//! Service layer for amountfmt
//!
//! The service layer renders and reads amounts on top of the currency
//! registry and a locale provider. Services borrow their collaborators and
//! hold no mutable state, so one instance can be shared across threads.

pub mod formatter;
pub mod masker;
pub mod parser;

pub use formatter::{fixed_point, FormatService, FormatTier, Formatted};
pub use masker::PrivacyMasker;
pub use parser::ParseService;
