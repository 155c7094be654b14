//! Currency definition model
//!
//! A currency definition ties an ISO 4217-like code to the symbol and name
//! shown to users, plus the side of the number the symbol is rendered on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a currency symbol sits relative to the numeric body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    /// Symbol before the number, after the sign (e.g., "-$10.00")
    #[default]
    Leading,
    /// Symbol after the number, separated by a space (e.g., "-10,00 €")
    Trailing,
}

impl fmt::Display for SymbolPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leading => write!(f, "leading"),
            Self::Trailing => write!(f, "trailing"),
        }
    }
}

/// A currency known to the registry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyDefinition {
    /// Currency code, the registry key (e.g., "USD")
    pub code: String,

    /// Display symbol (e.g., "$")
    pub symbol: String,

    /// Human-readable name (e.g., "US Dollar")
    pub display_name: String,

    /// Symbol placement
    #[serde(default)]
    pub position: SymbolPosition,
}

impl CurrencyDefinition {
    /// Create a new currency definition
    pub fn new(
        code: impl Into<String>,
        symbol: impl Into<String>,
        display_name: impl Into<String>,
        position: SymbolPosition,
    ) -> Self {
        Self {
            code: code.into(),
            symbol: symbol.into(),
            display_name: display_name.into(),
            position,
        }
    }

    /// The definition used when a code is not in the registry.
    ///
    /// The code doubles as symbol and name, rendered after the number.
    pub fn fallback(code: &str) -> Self {
        let code = code.trim().to_uppercase();
        Self {
            symbol: code.clone(),
            display_name: code.clone(),
            code,
            position: SymbolPosition::Trailing,
        }
    }

    /// Attach this currency's symbol to an already formatted numeric body
    pub fn decorate(&self, sign: &str, body: &str) -> String {
        match self.position {
            SymbolPosition::Leading => format!("{}{}{}", sign, self.symbol, body),
            SymbolPosition::Trailing => format!("{}{} {}", sign, body, self.symbol),
        }
    }
}

impl fmt::Display for CurrencyDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorate_leading() {
        let usd = CurrencyDefinition::new("USD", "$", "US Dollar", SymbolPosition::Leading);
        assert_eq!(usd.decorate("-", "10.00"), "-$10.00");
        assert_eq!(usd.decorate("", "10.00"), "$10.00");
    }

    #[test]
    fn test_decorate_trailing() {
        let eur = CurrencyDefinition::new("EUR", "€", "Euro", SymbolPosition::Trailing);
        assert_eq!(eur.decorate("-", "1.234,50"), "-1.234,50 €");
    }

    #[test]
    fn test_fallback_uses_code() {
        let def = CurrencyDefinition::fallback(" xyz ");
        assert_eq!(def.code, "XYZ");
        assert_eq!(def.symbol, "XYZ");
        assert_eq!(def.display_name, "XYZ");
        assert_eq!(def.position, SymbolPosition::Trailing);
    }

    #[test]
    fn test_serialization() {
        let json = r#"{"code":"CHF","symbol":"CHF","display_name":"Swiss Franc","position":"trailing"}"#;
        let def: CurrencyDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.position, SymbolPosition::Trailing);

        let json = r#"{"code":"ABC","symbol":"A","display_name":"Abc"}"#;
        let def: CurrencyDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.position, SymbolPosition::Leading);
    }
}
