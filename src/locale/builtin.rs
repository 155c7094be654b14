//! Built-in locale provider
//!
//! Ships CLDR-style separator and grouping data for common locales. Tags
//! resolve full tag first, then language-region, then bare language, so
//! "de-DE" and "de_DE" both land on the German entry while "de-CH" gets its
//! own Swiss conventions.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::conventions::LocaleConventions;
use super::provider::{LocaleProvider, NumberPart};
use crate::error::{AmountError, AmountResult};
use crate::models::{LocaleTag, NumberStyle};

const NBSP: &str = "\u{a0}";
const NNBSP: &str = "\u{202f}";
const APOSTROPHE: &str = "\u{2019}";

/// (tag, group, decimal, primary group, secondary group, min grouping digits)
const LOCALES: &[(&str, &str, &str, usize, usize, usize)] = &[
    ("en", ",", ".", 3, 3, 1),
    ("en-IN", ",", ".", 3, 2, 1),
    ("en-ZA", NBSP, ",", 3, 3, 1),
    ("hi", ",", ".", 3, 2, 1),
    ("de", ".", ",", 3, 3, 1),
    ("de-AT", NBSP, ",", 3, 3, 1),
    ("de-CH", APOSTROPHE, ".", 3, 3, 1),
    ("de-LI", APOSTROPHE, ".", 3, 3, 1),
    ("fr", NNBSP, ",", 3, 3, 1),
    ("fr-CH", NNBSP, ",", 3, 3, 1),
    ("it", ".", ",", 3, 3, 1),
    ("it-CH", APOSTROPHE, ".", 3, 3, 1),
    ("es", ".", ",", 3, 3, 2),
    ("es-MX", ",", ".", 3, 3, 1),
    ("es-US", ",", ".", 3, 3, 1),
    ("pt", ".", ",", 3, 3, 1),
    ("pt-PT", NBSP, ",", 3, 3, 2),
    ("nl", ".", ",", 3, 3, 1),
    ("da", ".", ",", 3, 3, 1),
    ("sv", NBSP, ",", 3, 3, 1),
    ("nb", NBSP, ",", 3, 3, 1),
    ("no", NBSP, ",", 3, 3, 1),
    ("nn", NBSP, ",", 3, 3, 1),
    ("fi", NBSP, ",", 3, 3, 1),
    ("pl", NBSP, ",", 3, 3, 2),
    ("cs", NBSP, ",", 3, 3, 1),
    ("sk", NBSP, ",", 3, 3, 1),
    ("hu", NBSP, ",", 3, 3, 1),
    ("ro", ".", ",", 3, 3, 1),
    ("bg", NBSP, ",", 3, 3, 2),
    ("uk", NBSP, ",", 3, 3, 1),
    ("ru", NBSP, ",", 3, 3, 1),
    ("el", ".", ",", 3, 3, 1),
    ("tr", ".", ",", 3, 3, 1),
    ("id", ".", ",", 3, 3, 1),
    ("vi", ".", ",", 3, 3, 1),
    ("he", ",", ".", 3, 3, 1),
    ("th", ",", ".", 3, 3, 1),
    ("ja", ",", ".", 3, 3, 1),
    ("zh", ",", ".", 3, 3, 1),
    ("ko", ",", ".", 3, 3, 1),
];

const FALLBACK_DEFAULT: &str = "en-US";

static SHARED: Lazy<BuiltinLocales> = Lazy::new(BuiltinLocales::from_env);

/// Locale provider backed by the built-in conventions table
#[derive(Debug, Clone)]
pub struct BuiltinLocales {
    default: LocaleTag,
    table: HashMap<String, LocaleConventions>,
}

impl BuiltinLocales {
    /// Provider with the built-in table and "en-US" as default locale
    pub fn new() -> Self {
        let table = LOCALES
            .iter()
            .map(|(tag, group, decimal, primary, secondary, min_grouping)| {
                let conventions = LocaleConventions::new(*group, *decimal)
                    .with_group_sizes(*primary, *secondary)
                    .with_min_grouping_digits(*min_grouping);
                (tag.to_string(), conventions)
            })
            .collect();

        Self {
            default: LocaleTag::new(FALLBACK_DEFAULT),
            table,
        }
    }

    /// Process-wide provider whose default locale comes from the environment
    pub fn shared() -> &'static BuiltinLocales {
        &SHARED
    }

    /// Provider whose default locale is read from `LC_ALL`, `LC_NUMERIC` or
    /// `LANG`, falling back to "en-US" when unset or unsupported
    pub fn from_env() -> Self {
        let provider = Self::new();
        match locale_from_vars(|name| std::env::var(name).ok()) {
            Some(tag) if provider.supports(&tag) => provider.with_default(tag),
            Some(tag) => {
                tracing::debug!(locale = %tag, "environment locale unsupported, using default");
                provider
            }
            None => provider,
        }
    }

    /// Replace the default locale
    pub fn with_default(mut self, tag: impl Into<LocaleTag>) -> Self {
        self.default = tag.into();
        self
    }

    /// Add or replace conventions for a locale tag
    pub fn with_locale(mut self, tag: &str, conventions: LocaleConventions) -> Self {
        let key = canonical_subtags(tag)
            .map(|subtags| subtags.join("-"))
            .unwrap_or_else(|_| tag.trim().to_string());
        self.table.insert(key, conventions);
        self
    }

    /// Resolve a locale tag to its conventions
    pub fn conventions(&self, locale: &LocaleTag) -> AmountResult<&LocaleConventions> {
        let subtags = canonical_subtags(locale.as_str())
            .map_err(|reason| AmountError::invalid_locale(locale.as_str(), reason))?;

        candidates(&subtags)
            .iter()
            .find_map(|key| self.table.get(key))
            .ok_or_else(|| AmountError::invalid_locale(locale.as_str(), "unsupported locale"))
    }

    /// Check whether a tag resolves
    pub fn supports(&self, locale: &LocaleTag) -> bool {
        self.conventions(locale).is_ok()
    }
}

impl Default for BuiltinLocales {
    fn default() -> Self {
        Self::new()
    }
}

impl LocaleProvider for BuiltinLocales {
    fn default_locale(&self) -> LocaleTag {
        self.default.clone()
    }

    fn format_to_parts(
        &self,
        locale: &LocaleTag,
        value: f64,
        style: &NumberStyle,
    ) -> AmountResult<Vec<NumberPart>> {
        if !value.is_finite() {
            return Err(AmountError::InvalidOptions(format!(
                "cannot render non-finite value {}",
                value
            )));
        }
        Ok(self.conventions(locale)?.render(value, style))
    }
}

/// Read a locale from POSIX-style variables, first non-empty wins.
///
/// "de_DE.UTF-8" becomes "de-DE"; "C" and "POSIX" count as unset.
pub fn locale_from_vars<F>(lookup: F) -> Option<LocaleTag>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = ["LC_ALL", "LC_NUMERIC", "LANG"]
        .into_iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())?;

    let tag = raw
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('_', "-");

    match tag.as_str() {
        "" | "C" | "POSIX" => None,
        _ => Some(LocaleTag::new(tag)),
    }
}

/// Split a tag into canonically-cased subtags, rejecting malformed input
fn canonical_subtags(tag: &str) -> Result<Vec<String>, &'static str> {
    let tag = tag.trim();
    if tag.is_empty() {
        return Err("empty locale tag");
    }

    let mut subtags = Vec::new();
    for (idx, sub) in tag.split(['-', '_']).enumerate() {
        if sub.is_empty() || sub.len() > 8 || !sub.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err("malformed subtag");
        }

        let canonical = if idx == 0 {
            if sub.len() < 2 || sub.len() == 4 || !sub.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err("malformed language subtag");
            }
            sub.to_ascii_lowercase()
        } else if is_region(sub) {
            sub.to_ascii_uppercase()
        } else if sub.len() == 4 && sub.chars().all(|c| c.is_ascii_alphabetic()) {
            let mut script = sub.to_ascii_lowercase();
            script[..1].make_ascii_uppercase();
            script
        } else {
            sub.to_ascii_lowercase()
        };
        subtags.push(canonical);
    }

    Ok(subtags)
}

fn is_region(sub: &str) -> bool {
    (sub.len() == 2 && sub.chars().all(|c| c.is_ascii_alphabetic()))
        || (sub.len() == 3 && sub.chars().all(|c| c.is_ascii_digit()))
}

/// Lookup keys from most to least specific
fn candidates(subtags: &[String]) -> Vec<String> {
    let mut keys = vec![subtags.join("-")];

    // Region subtags never follow a singleton (extension) subtag
    let region = subtags
        .iter()
        .skip(1)
        .take_while(|s| s.len() > 1)
        .find(|s| is_region(s));
    if let Some(region) = region {
        keys.push(format!("{}-{}", subtags[0], region));
    }
    keys.push(subtags[0].clone());

    keys.dedup();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::provider::SAMPLE_VALUE;

    fn style(min: u8, max: u8) -> NumberStyle {
        NumberStyle {
            min_fraction_digits: min,
            max_fraction_digits: max,
            use_grouping: true,
        }
    }

    #[test]
    fn test_resolution_order() {
        let provider = BuiltinLocales::new();
        let de_ch = provider.conventions(&"de-CH".into()).unwrap();
        assert_eq!(de_ch.decimal(), ".");

        let de_de = provider.conventions(&"de_de".into()).unwrap();
        assert_eq!(de_de.group(), ".");
        assert_eq!(de_de.decimal(), ",");

        let zh = provider.conventions(&"zh-Hans-CN".into()).unwrap();
        assert_eq!(zh.group(), ",");
    }

    #[test]
    fn test_malformed_and_unsupported_tags() {
        let provider = BuiltinLocales::new();
        for tag in ["", "   ", "e", "12-34", "en--US", "en-US!", "toolongsubtag"] {
            let err = provider.conventions(&tag.into()).unwrap_err();
            assert!(err.is_invalid_locale(), "tag {:?}", tag);
        }

        let err = provider.conventions(&"not-a-real-locale".into()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid locale 'not-a-real-locale': unsupported locale"
        );
    }

    #[test]
    fn test_format_number() {
        let provider = BuiltinLocales::new();
        let text = provider
            .format_number(&"fr-FR".into(), 1234.5, &style(2, 2))
            .unwrap();
        assert_eq!(text, "1\u{202f}234,50");

        let text = provider
            .format_number(&"en-IN".into(), 1234567.0, &style(0, 0))
            .unwrap();
        assert_eq!(text, "12,34,567");
    }

    #[test]
    fn test_non_finite_rejected() {
        let provider = BuiltinLocales::new();
        assert!(provider
            .format_to_parts(&"en-US".into(), f64::NAN, &style(0, 2))
            .is_err());
    }

    #[test]
    fn test_sample_separators() {
        let provider = BuiltinLocales::new();

        let seps = provider.separators(&"de-DE".into()).unwrap();
        assert_eq!(seps.group.as_deref(), Some("."));
        assert_eq!(seps.decimal, ",");

        let seps = provider.separators(&"de-CH".into()).unwrap();
        assert_eq!(seps.group.as_deref(), Some(APOSTROPHE));
        assert_eq!(seps.decimal, ".");

        // Sample is large enough to show grouping under min-grouping rules
        let seps = provider.separators(&"es-ES".into()).unwrap();
        assert_eq!(seps.group.as_deref(), Some("."));
        assert!(SAMPLE_VALUE >= 10_000.0);
    }

    #[test]
    fn test_custom_locale() {
        let provider = BuiltinLocales::new()
            .with_locale("x-test", LocaleConventions::new("_", ":"))
            .with_locale("qq-QQ", LocaleConventions::new("~", "|"));

        let text = provider
            .format_number(&"qq_qq".into(), 1234.5, &style(1, 1))
            .unwrap();
        assert_eq!(text, "1~234|5");
    }

    #[test]
    fn test_default_locale() {
        assert_eq!(BuiltinLocales::new().default_locale().as_str(), "en-US");
        let provider = BuiltinLocales::new().with_default("de-DE");
        assert_eq!(provider.default_locale().as_str(), "de-DE");
    }

    #[test]
    fn test_locale_from_vars() {
        let lookup = |vars: Vec<(&'static str, &'static str)>| {
            move |name: &str| {
                vars.iter()
                    .find(|(k, _)| *k == name)
                    .map(|(_, v)| v.to_string())
            }
        };

        let tag = locale_from_vars(lookup(vec![("LANG", "de_DE.UTF-8")])).unwrap();
        assert_eq!(tag.as_str(), "de-DE");

        let tag = locale_from_vars(lookup(vec![
            ("LC_ALL", ""),
            ("LC_NUMERIC", "fr_CH@euro"),
            ("LANG", "en_US.UTF-8"),
        ]))
        .unwrap();
        assert_eq!(tag.as_str(), "fr-CH");

        assert!(locale_from_vars(lookup(vec![("LANG", "C.UTF-8")])).is_none());
        assert!(locale_from_vars(lookup(vec![])).is_none());
    }
}
