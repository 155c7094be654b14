//! Currency CLI commands
//!
//! Lists and inspects the currency registry, including any extensions
//! configured in the settings file.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::currency::{format_currency_details, format_currency_list};
use crate::error::AmountResult;
use crate::locale::BuiltinLocales;
use crate::models::{FormatOptions, LocaleTag};
use crate::services::FormatService;

/// Sample value rendered by `currency show`
const SAMPLE_AMOUNT: f64 = -1234.5;

/// Currency subcommands
#[derive(Subcommand)]
pub enum CurrencyCommands {
    /// List all known currencies
    List,
    /// Show a currency and a sample amount
    Show {
        /// Currency code (e.g., "EUR")
        code: String,
        /// Locale for the sample; defaults to the configured locale
        #[arg(short, long)]
        locale: Option<String>,
    },
}

/// Handle a currency command
pub fn handle_currency_command(settings: &Settings, cmd: CurrencyCommands) -> AmountResult<()> {
    let registry = settings.currency_registry();

    match cmd {
        CurrencyCommands::List => {
            print!("{}", format_currency_list(&registry));
        }

        CurrencyCommands::Show { code, locale } => {
            let currency = registry.require(&code)?;
            let locale = locale
                .map(LocaleTag::new)
                .unwrap_or_else(|| settings.locale.clone());

            let service = FormatService::new(&registry, BuiltinLocales::shared());
            let sample = service.format(
                SAMPLE_AMOUNT,
                &locale,
                &FormatOptions::currency(currency.code.as_str()),
            );
            print!("{}", format_currency_details(currency, &sample));
        }
    }

    Ok(())
}
