//! Currency registry
//!
//! Read-only lookup from currency code to [`CurrencyDefinition`]. The
//! built-in registry is built once per process on first use; extended
//! registries are plain values owned by the caller.

use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

use super::builtin;
use crate::error::{AmountError, AmountResult};
use crate::models::CurrencyDefinition;

static BUILTIN: Lazy<CurrencyRegistry> =
    Lazy::new(|| CurrencyRegistry::from_definitions(builtin::definitions()));

/// Lookup table of known currencies keyed by upper-case code
#[derive(Debug, Clone, Default)]
pub struct CurrencyRegistry {
    currencies: Vec<CurrencyDefinition>,
    index: HashMap<String, usize>,
}

impl CurrencyRegistry {
    /// The process-wide built-in registry
    pub fn builtin() -> &'static CurrencyRegistry {
        &BUILTIN
    }

    /// Build a registry from definitions. A later definition replaces an
    /// earlier one with the same code.
    pub fn from_definitions(definitions: impl IntoIterator<Item = CurrencyDefinition>) -> Self {
        let mut registry = Self::default();
        for definition in definitions {
            registry.insert(definition);
        }
        registry
    }

    /// Build a registry from a JSON array of definitions.
    ///
    /// Symbols may not contain ASCII digits or sign characters, which the
    /// parser could not tell apart from the amount itself.
    pub fn from_json(json: &str) -> AmountResult<Self> {
        let definitions: Vec<CurrencyDefinition> = serde_json::from_str(json)
            .map_err(|e| AmountError::Json(format!("Failed to parse currency dataset: {}", e)))?;

        if let Some(bad) = definitions
            .iter()
            .find(|d| d.symbol.chars().any(|c| c.is_ascii_digit() || matches!(c, '+' | '-')))
        {
            return Err(AmountError::Json(format!(
                "Currency '{}' has symbol '{}' containing digits or signs",
                bad.code.trim(),
                bad.symbol
            )));
        }

        Ok(Self::from_definitions(definitions))
    }

    /// A copy of this registry with extra definitions layered on top
    pub fn with_extensions(
        &self,
        definitions: impl IntoIterator<Item = CurrencyDefinition>,
    ) -> Self {
        let mut registry = self.clone();
        for definition in definitions {
            registry.insert(definition);
        }
        registry
    }

    /// The built-in registry extended with the definitions in a JSON file
    pub fn load_extensions(path: &Path) -> AmountResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AmountError::Io(format!(
                "Failed to read currency file {}: {}",
                path.display(),
                e
            ))
        })?;
        let extra = Self::from_json(&contents)?;
        tracing::debug!(
            path = %path.display(),
            count = extra.len(),
            "loaded currency extensions"
        );
        Ok(Self::builtin().with_extensions(extra.currencies))
    }

    fn insert(&mut self, mut definition: CurrencyDefinition) {
        definition.code = normalize_code(&definition.code);
        if definition.code.is_empty() {
            return;
        }
        match self.index.get(&definition.code) {
            Some(&idx) => self.currencies[idx] = definition,
            None => {
                self.index
                    .insert(definition.code.clone(), self.currencies.len());
                self.currencies.push(definition);
            }
        }
    }

    /// Look up a currency by code (case-insensitive)
    pub fn get(&self, code: &str) -> Option<&CurrencyDefinition> {
        self.index
            .get(&normalize_code(code))
            .map(|&idx| &self.currencies[idx])
    }

    /// Look up a currency, failing with `UnresolvedCurrency`
    pub fn require(&self, code: &str) -> AmountResult<&CurrencyDefinition> {
        self.get(code)
            .ok_or_else(|| AmountError::UnresolvedCurrency(code.trim().to_string()))
    }

    /// Look up a currency, synthesizing a fallback definition for unknown codes
    pub fn resolve(&self, code: &str) -> Cow<'_, CurrencyDefinition> {
        match self.get(code) {
            Some(def) => Cow::Borrowed(def),
            None => Cow::Owned(CurrencyDefinition::fallback(code)),
        }
    }

    /// Display symbol for a code; unknown codes yield the code itself
    pub fn symbol(&self, code: &str) -> String {
        self.resolve(code).symbol.clone()
    }

    /// Display name for a code; unknown codes yield the code itself
    pub fn display_name(&self, code: &str) -> String {
        self.resolve(code).display_name.clone()
    }

    /// Check whether a code is registered
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Iterate over definitions in registration order
    pub fn iter(&self) -> impl Iterator<Item = &CurrencyDefinition> {
        self.currencies.iter()
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
