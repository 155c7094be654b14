//! User settings for amountfmt
//!
//! Holds the active locale, currency and privacy-mode preference plus
//! default digit rules. The formatting services never read this file
//! themselves; callers turn it into [`Preferences`] and [`FormatOptions`]
//! on every call.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::paths::AmountfmtPaths;
use crate::currency::CurrencyRegistry;
use crate::error::{AmountError, AmountResult};
use crate::models::{FormatOptions, FormatStyle, LocaleTag};

/// Per-call display preferences supplied by the settings store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub locale: LocaleTag,
    pub currency_code: String,
    pub privacy_mode: bool,
}

/// User settings for amountfmt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Active locale tag
    #[serde(default)]
    pub locale: LocaleTag,

    /// Active currency code
    #[serde(default = "default_currency")]
    pub currency_code: String,

    /// Hide digits when displaying amounts
    #[serde(default)]
    pub privacy_mode: bool,

    #[serde(default = "default_fraction_digits")]
    pub min_fraction_digits: u8,

    #[serde(default = "default_fraction_digits")]
    pub max_fraction_digits: u8,

    #[serde(default = "default_use_grouping")]
    pub use_grouping: bool,

    /// Extra currency definitions layered over the built-in registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currencies_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_fraction_digits() -> u8 {
    2
}

fn default_use_grouping() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            locale: LocaleTag::default(),
            currency_code: default_currency(),
            privacy_mode: false,
            min_fraction_digits: default_fraction_digits(),
            max_fraction_digits: default_fraction_digits(),
            use_grouping: default_use_grouping(),
            currencies_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if the file doesn't exist
    pub fn load_or_create(paths: &AmountfmtPaths) -> AmountResult<Self> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| AmountError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                AmountError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AmountfmtPaths) -> AmountResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| AmountError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| AmountError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Snapshot of the display preferences
    pub fn preferences(&self) -> Preferences {
        Preferences {
            locale: self.locale.clone(),
            currency_code: self.currency_code.clone(),
            privacy_mode: self.privacy_mode,
        }
    }

    /// Validated options in the given style using the configured digit rules
    pub fn format_options(&self, style: FormatStyle) -> AmountResult<FormatOptions> {
        let currency_code = match style {
            FormatStyle::Currency => Some(self.currency_code.clone()),
            FormatStyle::Decimal => None,
        };
        FormatOptions::new(
            style,
            currency_code,
            self.min_fraction_digits,
            self.max_fraction_digits,
            self.use_grouping,
        )
    }

    /// Set the fraction-digit bounds, rejecting `max < min`
    pub fn set_fraction_digits(&mut self, min: u8, max: u8) -> AmountResult<()> {
        FormatOptions::decimal().with_fraction_digits(min, max)?;
        self.min_fraction_digits = min;
        self.max_fraction_digits = max;
        Ok(())
    }

    /// Currency registry for these settings: built-in plus the configured
    /// extension file. A broken extension file is logged and ignored.
    pub fn currency_registry(&self) -> CurrencyRegistry {
        match &self.currencies_file {
            Some(path) => CurrencyRegistry::load_extensions(path).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), error = %err, "ignoring currency file");
                CurrencyRegistry::builtin().clone()
            }),
            None => CurrencyRegistry::builtin().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.locale.as_str(), "en-US");
        assert_eq!(settings.currency_code, "USD");
        assert!(!settings.privacy_mode);
        assert_eq!(settings.min_fraction_digits, 2);
        assert_eq!(settings.max_fraction_digits, 2);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AmountfmtPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.locale = "de-DE".into();
        settings.currency_code = "EUR".into();
        settings.privacy_mode = true;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.locale.as_str(), "de-DE");
        assert_eq!(loaded.currency_code, "EUR");
        assert!(loaded.privacy_mode);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"locale":"fr-FR"}"#).unwrap();
        assert_eq!(settings.locale.as_str(), "fr-FR");
        assert_eq!(settings.currency_code, "USD");
        assert!(settings.use_grouping);
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AmountfmtPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, AmountError::Config(_)));
    }

    #[test]
    fn test_preferences_reflect_changes() {
        let mut settings = Settings::default();
        let before = settings.preferences();
        settings.privacy_mode = true;
        settings.currency_code = "EUR".into();
        let after = settings.preferences();

        assert!(!before.privacy_mode);
        assert!(after.privacy_mode);
        assert_eq!(after.currency_code, "EUR");
    }

    #[test]
    fn test_format_options() {
        let mut settings = Settings::default();
        settings.currency_code = "EUR".into();

        let opts = settings.format_options(FormatStyle::Currency).unwrap();
        assert_eq!(opts.currency_code(), Some("EUR"));
        assert_eq!(opts.max_fraction_digits(), 2);

        let opts = settings.format_options(FormatStyle::Decimal).unwrap();
        assert_eq!(opts.currency_code(), None);

        settings.min_fraction_digits = 3;
        assert!(settings.format_options(FormatStyle::Decimal).is_err());
    }

    #[test]
    fn test_set_fraction_digits() {
        let mut settings = Settings::default();
        settings.set_fraction_digits(0, 4).unwrap();
        assert_eq!(settings.max_fraction_digits, 4);
        assert!(settings.set_fraction_digits(3, 1).is_err());
        assert_eq!(settings.min_fraction_digits, 0);
    }

    #[test]
    fn test_currency_registry_with_extension_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("currencies.json");
        std::fs::write(
            &path,
            r#"[{"code":"GLD","symbol":"oz","display_name":"Gold Ounce","position":"trailing"}]"#,
        )
        .unwrap();

        let mut settings = Settings::default();
        settings.currencies_file = Some(path);
        assert!(settings.currency_registry().contains("GLD"));

        settings.currencies_file = Some(temp_dir.path().join("missing.json"));
        let registry = settings.currency_registry();
        assert!(!registry.contains("GLD"));
        assert!(registry.contains("USD"));
    }
}
