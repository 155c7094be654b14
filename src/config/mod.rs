//! Configuration module for amountfmt
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Per-call display preferences

pub mod paths;
pub mod settings;

pub use paths::AmountfmtPaths;
pub use settings::{Preferences, Settings};
