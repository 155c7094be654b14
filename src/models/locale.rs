//! Locale tag newtype
//!
//! A locale tag is an opaque key handed to the locale provider. Nothing
//! outside the provider looks inside it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A BCP-47-style locale identifier (e.g., "de-DE")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTag(String);

impl LocaleTag {
    /// Create a locale tag from any string
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Get the raw tag
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LocaleTag {
    fn default() -> Self {
        Self::new("en-US")
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocaleTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for LocaleTag {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl AsRef<str> for LocaleTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
