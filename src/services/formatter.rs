//! Format service
//!
//! Renders canonical values as display strings. Currency output is
//! assembled here from the registry's symbol position rather than from any
//! locale's native currency pattern, so "-1.234,50 €" and "-$1,234.50" come
//! out of the same code path.
//!
//! Locale failures walk a fixed ladder: requested locale, provider default
//! locale, then plain fixed-point text. The tier that produced the output is
//! reported in [`Formatted`].

use std::fmt;

use super::masker::PrivacyMasker;
use crate::config::Preferences;
use crate::currency::CurrencyRegistry;
use crate::locale::LocaleProvider;
use crate::models::{CurrencyDefinition, FormatOptions, FormatStyle, LocaleTag, NumberStyle};

/// Which rung of the fallback ladder produced a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatTier {
    /// No value to format
    Empty,
    /// Rendered with the requested locale
    Requested,
    /// Requested locale failed; rendered with the provider's default locale
    DefaultLocale,
    /// Both locales failed; rendered as fixed-point text
    FixedPoint,
}

impl FormatTier {
    /// Whether a fallback was taken
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::DefaultLocale | Self::FixedPoint)
    }
}

/// A formatted string together with how it was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatted {
    text: String,
    tier: FormatTier,
    unresolved_currency: Option<String>,
}

impl Formatted {
    fn empty() -> Self {
        Self {
            text: String::new(),
            tier: FormatTier::Empty,
            unresolved_currency: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tier(&self) -> FormatTier {
        self.tier
    }

    /// Currency code that was requested but missing from the registry
    pub fn unresolved_currency(&self) -> Option<&str> {
        self.unresolved_currency.as_deref()
    }

    /// True when any fallback, locale or currency, was taken
    pub fn is_degraded(&self) -> bool {
        self.tier.is_degraded() || self.unresolved_currency.is_some()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Numeric body of a value, rendered without sign or symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Body {
    pub text: String,
    pub negative: bool,
    pub tier: FormatTier,
}

/// Service for rendering values
pub struct FormatService<'a> {
    registry: &'a CurrencyRegistry,
    provider: &'a dyn LocaleProvider,
}

impl<'a> FormatService<'a> {
    /// Create a new format service
    pub fn new(registry: &'a CurrencyRegistry, provider: &'a dyn LocaleProvider) -> Self {
        Self { registry, provider }
    }

    /// Format a value; absent or non-finite values yield an empty string
    pub fn format(
        &self,
        value: impl Into<Option<f64>>,
        locale: &LocaleTag,
        opts: &FormatOptions,
    ) -> String {
        self.format_tagged(value, locale, opts).into_string()
    }

    /// Format a value and report which fallbacks were taken
    pub fn format_tagged(
        &self,
        value: impl Into<Option<f64>>,
        locale: &LocaleTag,
        opts: &FormatOptions,
    ) -> Formatted {
        let value = match value.into() {
            Some(v) if v.is_finite() => v,
            _ => return Formatted::empty(),
        };

        let (currency, unresolved_currency) = self.currency_for(opts);

        match currency {
            Some(currency) => {
                let body = self.render_body(value, locale, &opts.number_style());
                let sign = if body.negative { "-" } else { "" };
                Formatted {
                    text: currency.decorate(sign, &body.text),
                    tier: body.tier,
                    unresolved_currency: None,
                }
            }
            None => {
                let (text, tier) = self.render_number(value, locale, &opts.number_style());
                Formatted {
                    text,
                    tier,
                    unresolved_currency,
                }
            }
        }
    }

    /// Format a value with its digits hidden.
    ///
    /// The filler is exactly as long as the body `format` would render for
    /// the same value, locale and options.
    pub fn mask(
        &self,
        value: impl Into<Option<f64>>,
        locale: &LocaleTag,
        opts: &FormatOptions,
        is_currency: bool,
    ) -> String {
        self.mask_with(&PrivacyMasker::default(), value, locale, opts, is_currency)
    }

    /// Like [`mask`](Self::mask) with a caller-supplied masker
    pub fn mask_with(
        &self,
        masker: &PrivacyMasker,
        value: impl Into<Option<f64>>,
        locale: &LocaleTag,
        opts: &FormatOptions,
        is_currency: bool,
    ) -> String {
        let value = match value.into() {
            Some(v) if v.is_finite() => v,
            _ => return String::new(),
        };

        let body = self.render_body(value, locale, &opts.number_style());
        let currency = if is_currency {
            self.currency_for(opts).0
        } else {
            None
        };

        masker.mask(&body.text, body.negative, currency)
    }

    /// Render an amount in the user's currency, masked when privacy mode is on.
    ///
    /// Preferences are taken per call so a changed setting applies to the
    /// very next render.
    pub fn display_amount(
        &self,
        value: impl Into<Option<f64>>,
        prefs: &Preferences,
        opts: &FormatOptions,
    ) -> String {
        let opts = opts.clone().with_currency(prefs.currency_code.as_str());
        if prefs.privacy_mode {
            self.mask(value, &prefs.locale, &opts, true)
        } else {
            self.format(value, &prefs.locale, &opts)
        }
    }

    /// Resolve the currency named by currency-style options
    fn currency_for(&self, opts: &FormatOptions) -> (Option<&'a CurrencyDefinition>, Option<String>) {
        if opts.style() != FormatStyle::Currency {
            return (None, None);
        }

        let Some(code) = opts.currency_code() else {
            tracing::debug!("currency style without a currency code, formatting as decimal");
            return (None, None);
        };

        match self.registry.get(code) {
            Some(def) => (Some(def), None),
            None => {
                tracing::debug!(code, "unresolved currency, formatting as decimal");
                (None, Some(code.to_string()))
            }
        }
    }

    /// Render `|value|` and note whether the rendered digits are negative
    pub(crate) fn render_body(&self, value: f64, locale: &LocaleTag, style: &NumberStyle) -> Body {
        let (text, tier) = self.render_number(value.abs(), locale, style);
        Body {
            text,
            negative: value < 0.0,
            tier,
        }
    }

    /// Native rendering with the locale fallback ladder
    fn render_number(&self, value: f64, locale: &LocaleTag, style: &NumberStyle) -> (String, FormatTier) {
        let err = match self.provider.format_number(locale, value, style) {
            Ok(text) => return (text, FormatTier::Requested),
            Err(err) => err,
        };
        tracing::debug!(locale = %locale, error = %err, "locale unavailable, trying default locale");

        let default = self.provider.default_locale();
        if &default != locale {
            match self.provider.format_number(&default, value, style) {
                Ok(text) => return (text, FormatTier::DefaultLocale),
                Err(err) => {
                    tracing::debug!(locale = %default, error = %err, "default locale unavailable");
                }
            }
        }

        tracing::debug!("falling back to fixed-point formatting");
        (
            fixed_point(value, style.max_fraction_digits),
            FormatTier::FixedPoint,
        )
    }
}

/// Plain `[-]digits.digits` text with exactly `digits` fraction digits.
/// Negative zero prints without a sign.
pub fn fixed_point(value: f64, digits: u8) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}", digits as usize, value)
}
