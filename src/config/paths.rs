//! Path management for amountfmt
//!
//! ## Path Resolution Order
//!
//! 1. `AMOUNTFMT_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/amountfmt` or `~/.config/amountfmt`
//! 3. Windows: `%APPDATA%\amountfmt`

use std::path::PathBuf;

use crate::error::AmountError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "AMOUNTFMT_CONFIG_DIR";

/// Manages all paths used by amountfmt
#[derive(Debug, Clone)]
pub struct AmountfmtPaths {
    base_dir: PathBuf,
}

impl AmountfmtPaths {
    /// Resolve the config directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or app-data directory can be determined.
    pub fn new() -> Result<Self, AmountError> {
        let base_dir = match std::env::var(CONFIG_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default location of a custom currency dataset
    pub fn currencies_file(&self) -> PathBuf {
        self.base_dir.join("currencies.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), AmountError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| AmountError::Io(format!("Failed to create config directory: {}", e)))
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, AmountError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                AmountError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("amountfmt"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, AmountError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| AmountError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("amountfmt"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AmountfmtPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.currencies_file(),
            temp_dir.path().join("currencies.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let paths = AmountfmtPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();
        assert!(nested.exists());
    }
}
