//! Currency registry and its built-in dataset

pub mod builtin;
pub mod registry;

pub use registry::CurrencyRegistry;
