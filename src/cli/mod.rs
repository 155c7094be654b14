//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod amount;
pub mod config;
pub mod currency;

pub use amount::{handle_amount_command, AmountCommands, RenderArgs};
pub use config::{handle_config_command, ConfigCommands, Toggle};
pub use currency::{handle_currency_command, CurrencyCommands};
