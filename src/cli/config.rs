//! Config CLI commands
//!
//! Reads and updates the persisted settings: active locale, currency,
//! privacy mode and default digit rules.

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::config::{AmountfmtPaths, Settings};
use crate::currency::CurrencyRegistry;
use crate::error::{AmountError, AmountResult};
use crate::locale::BuiltinLocales;
use crate::models::LocaleTag;

/// On/off switch argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration and paths
    Show,
    /// Set the active locale
    SetLocale {
        /// Locale tag (e.g., "de-DE")
        tag: String,
    },
    /// Set the active currency
    SetCurrency {
        /// Currency code (e.g., "EUR")
        code: String,
    },
    /// Turn privacy mode on or off
    Privacy {
        #[arg(value_enum)]
        state: Toggle,
    },
    /// Set the default fraction-digit bounds
    Fraction {
        /// Minimum number of fraction digits
        min: u8,
        /// Maximum number of fraction digits
        max: u8,
    },
    /// Turn digit grouping on or off
    Grouping {
        #[arg(value_enum)]
        state: Toggle,
    },
    /// Use extra currency definitions from a JSON file (omit PATH to clear)
    CurrenciesFile {
        path: Option<PathBuf>,
    },
}

/// Handle a config command
pub fn handle_config_command(
    paths: &AmountfmtPaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> AmountResult<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("amountfmt Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Locale:          {}", settings.locale);
            println!("  Currency:        {}", settings.currency_code);
            println!(
                "  Privacy mode:    {}",
                if settings.privacy_mode { "on" } else { "off" }
            );
            println!(
                "  Fraction digits: {}..{}",
                settings.min_fraction_digits, settings.max_fraction_digits
            );
            println!(
                "  Grouping:        {}",
                if settings.use_grouping { "on" } else { "off" }
            );
            if let Some(file) = &settings.currencies_file {
                println!("  Currencies file: {}", file.display());
            }
            return Ok(());
        }

        ConfigCommands::SetLocale { tag } => {
            let tag = LocaleTag::new(tag.trim());
            if !BuiltinLocales::shared().supports(&tag) {
                return Err(AmountError::invalid_locale(
                    tag.as_str(),
                    "unsupported locale",
                ));
            }
            println!("Locale set to {}", tag);
            settings.locale = tag;
        }

        ConfigCommands::SetCurrency { code } => {
            let registry = settings.currency_registry();
            let currency = registry.require(&code)?;
            println!("Currency set to {}", currency);
            settings.currency_code = currency.code.clone();
        }

        ConfigCommands::Privacy { state } => {
            settings.privacy_mode = state.is_on();
            println!(
                "Privacy mode {}",
                if state.is_on() { "enabled" } else { "disabled" }
            );
        }

        ConfigCommands::Fraction { min, max } => {
            settings.set_fraction_digits(min, max)?;
            println!("Fraction digits set to {}..{}", min, max);
        }

        ConfigCommands::Grouping { state } => {
            settings.use_grouping = state.is_on();
            println!(
                "Grouping {}",
                if state.is_on() { "enabled" } else { "disabled" }
            );
        }

        ConfigCommands::CurrenciesFile { path } => {
            if let Some(path) = &path {
                let registry = CurrencyRegistry::load_extensions(path)?;
                println!(
                    "Using {} ({} currencies)",
                    path.display(),
                    registry.len()
                );
            } else {
                println!("Using built-in currencies only");
            }
            settings.currencies_file = path;
        }
    }

    settings.save(paths)
}
