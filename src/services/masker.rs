//! Privacy masking
//!
//! Replaces the numeric body of a formatted amount with a run of filler
//! glyphs of the same visible length. The sign and the currency symbol stay
//! where the formatter would have put them, so columns keep their width.
//! The sign is left visible on purpose.

use crate::models::CurrencyDefinition;

/// Masks formatted numeric bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivacyMasker {
    glyph: char,
}

impl PrivacyMasker {
    pub const DEFAULT_GLYPH: char = '•';

    pub fn new() -> Self {
        Self {
            glyph: Self::DEFAULT_GLYPH,
        }
    }

    /// Use a different filler glyph
    pub fn with_glyph(glyph: char) -> Self {
        Self { glyph }
    }

    /// Mask a numeric body.
    ///
    /// `body` is the formatter's rendering of the absolute value, without
    /// sign or symbol. The filler has one glyph per visible character of the
    /// body, never fewer than one.
    pub fn mask(&self, body: &str, negative: bool, currency: Option<&CurrencyDefinition>) -> String {
        let width = body.chars().count().max(1);
        let filler: String = std::iter::repeat(self.glyph).take(width).collect();
        let sign = if negative { "-" } else { "" };

        match currency {
            Some(currency) => currency.decorate(sign, &filler),
            None => format!("{}{}", sign, filler),
        }
    }
}

impl Default for PrivacyMasker {
    fn default() -> Self {
        Self::new()
    }
}
