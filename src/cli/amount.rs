//! Amount CLI commands
//!
//! Implements the top-level `format`, `mask`, `parse` and `normalize`
//! commands. Options not given on the command line come from the settings
//! file, which is read fresh on every invocation.

use std::io::BufRead;

use clap::{Args, Subcommand};

use crate::config::Settings;
use crate::error::AmountResult;
use crate::export::{canonical_number, normalize_for_export};
use crate::locale::BuiltinLocales;
use crate::models::{FormatOptions, FormatStyle, LocaleTag};
use crate::services::{FormatService, ParseService};

/// Rendering options shared by `format` and `mask`
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Locale tag (e.g., "de-DE"); defaults to the configured locale
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Currency code (e.g., "EUR"); defaults to the configured currency
    #[arg(short, long, conflicts_with = "decimal")]
    pub currency: Option<String>,

    /// Render a plain number without a currency symbol
    #[arg(short, long)]
    pub decimal: bool,

    /// Minimum number of fraction digits
    #[arg(long)]
    pub min_fraction: Option<u8>,

    /// Maximum number of fraction digits
    #[arg(long)]
    pub max_fraction: Option<u8>,

    /// Disable digit grouping
    #[arg(long)]
    pub no_grouping: bool,
}

impl RenderArgs {
    /// Locale for this call
    pub fn locale(&self, settings: &Settings) -> LocaleTag {
        match &self.locale {
            Some(tag) => LocaleTag::new(tag.as_str()),
            None => settings.locale.clone(),
        }
    }

    /// Options for this call, layered over the configured defaults.
    ///
    /// A single explicit bound drags the configured other bound along with
    /// it instead of failing validation.
    pub fn options(&self, settings: &Settings) -> AmountResult<FormatOptions> {
        let style = if self.decimal {
            FormatStyle::Decimal
        } else {
            FormatStyle::Currency
        };

        let (min, max) = match (self.min_fraction, self.max_fraction) {
            (Some(min), Some(max)) => (min, max),
            (Some(min), None) => (min, settings.max_fraction_digits.max(min)),
            (None, Some(max)) => (settings.min_fraction_digits.min(max), max),
            (None, None) => (settings.min_fraction_digits, settings.max_fraction_digits),
        };

        let mut opts = FormatOptions::decimal()
            .with_fraction_digits(min, max)?
            .with_grouping(settings.use_grouping && !self.no_grouping);

        if style == FormatStyle::Currency {
            let code = self.currency.as_deref().unwrap_or(&settings.currency_code);
            opts = opts.with_currency(code);
        }

        Ok(opts)
    }
}

/// Amount subcommands, flattened into the top-level command list
#[derive(Subcommand)]
pub enum AmountCommands {
    /// Format a number for display
    Format {
        /// Value to format (e.g., -1234.5)
        #[arg(allow_hyphen_values = true)]
        value: f64,
        #[command(flatten)]
        render: RenderArgs,
        /// Hide the digits even when privacy mode is off
        #[arg(short, long)]
        private: bool,
    },
    /// Format a number with its digits hidden
    Mask {
        /// Value to mask (e.g., -1234.5)
        #[arg(allow_hyphen_values = true)]
        value: f64,
        #[command(flatten)]
        render: RenderArgs,
    },
    /// Parse locale-formatted text back into a number
    Parse {
        /// Text to parse (e.g., "1.234,56 €")
        #[arg(allow_hyphen_values = true)]
        text: String,
        /// Locale the text was written in; defaults to the configured locale
        #[arg(short, long)]
        locale: Option<String>,
    },
    /// Normalize amounts of unknown locale for export (reads stdin when no input is given)
    Normalize {
        /// Values to normalize
        #[arg(allow_hyphen_values = true)]
        inputs: Vec<String>,
    },
}

/// Handle an amount command
pub fn handle_amount_command(settings: &Settings, cmd: AmountCommands) -> AmountResult<()> {
    let registry = settings.currency_registry();
    let provider = BuiltinLocales::shared();

    match cmd {
        AmountCommands::Format {
            value,
            render,
            private,
        } => {
            let service = FormatService::new(&registry, provider);
            let locale = render.locale(settings);
            let opts = render.options(settings)?;

            if private || settings.privacy_mode {
                let is_currency = opts.style() == FormatStyle::Currency;
                println!("{}", service.mask(value, &locale, &opts, is_currency));
            } else {
                let formatted = service.format_tagged(value, &locale, &opts);
                if let Some(code) = formatted.unresolved_currency() {
                    tracing::warn!(code, "unknown currency, rendered as a plain number");
                }
                if formatted.tier().is_degraded() {
                    tracing::warn!(locale = %locale, tier = ?formatted.tier(), "locale fallback used");
                }
                println!("{}", formatted);
            }
        }

        AmountCommands::Mask { value, render } => {
            let service = FormatService::new(&registry, provider);
            let locale = render.locale(settings);
            let opts = render.options(settings)?;
            let is_currency = opts.style() == FormatStyle::Currency;
            println!("{}", service.mask(value, &locale, &opts, is_currency));
        }

        AmountCommands::Parse { text, locale } => {
            let locale = locale
                .map(LocaleTag::new)
                .unwrap_or_else(|| settings.locale.clone());
            let value = ParseService::new(provider).try_parse(&text, &locale)?;
            println!("{}", canonical_number(value));
        }

        AmountCommands::Normalize { inputs } => {
            if inputs.is_empty() {
                for line in std::io::stdin().lock().lines() {
                    let line = line?;
                    println!("{}", normalize_for_export(line.as_str()));
                }
            } else {
                for input in &inputs {
                    println!("{}", normalize_for_export(input));
                }
            }
        }
    }

    Ok(())
}
