//! User configuration.
//!
//! Settings are read from a JSON file. Without an explicit path the loader
//! looks for `$XDG_CONFIG_HOME/abacus/config.json`; a missing file simply
//! yields [`Config::default`].

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    display::DEFAULT_ERROR_TOKEN,
    error::{CalculatorError, Result},
};

/// File name looked up in the XDG configuration directories.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Calculator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text shown on the display after an invalid result
    pub error_token: String,
    /// Whether presentation layers may use colors and styling
    pub rich_output: bool,
}

impl Config {
    /// Checks that the settings can drive a calculator.
    ///
    /// # Errors
    ///
    /// Returns `CalculatorError::InvalidInput` if the error token is empty or
    /// could be mistaken for a number.
    pub fn validate(&self) -> Result<()> {
        let token = self.error_token.trim();
        if token.is_empty() {
            return Err(CalculatorError::invalid_input("error_token")
                .with_reason("must not be empty"));
        }
        if token.parse::<f64>().is_ok() || token != self.error_token {
            return Err(CalculatorError::invalid_input("error_token").with_reason(format!(
                "'{}' must be a non-numeric word without surrounding spaces",
                self.error_token
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            error_token: DEFAULT_ERROR_TOKEN.to_string(),
            rich_output: true,
        }
    }
}

/// Locates and reads the configuration file.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads from `path` instead of the XDG location.
    pub fn with_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `CalculatorError::FileSystem` if the file exists but cannot be
    /// read, `CalculatorError::Serialization` if it is not valid JSON, and
    /// `CalculatorError::InvalidInput` if a setting is unusable.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path.clone().or_else(Self::default_path) else {
            debug!("No configuration file found, using defaults");
            return Ok(Config::default());
        };

        if !path.exists() {
            debug!("Configuration file {} does not exist", path.display());
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| CalculatorError::FileSystem {
            path: path.clone(),
            source: e,
        })?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Existing configuration file in the XDG config directories, if any.
    fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("abacus").find_config_file(CONFIG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.error_token, "Error");
        assert!(config.rich_output);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = ConfigLoader::new()
            .with_path(Some(temp_dir.path().join("absent.json")))
            .load()
            .expect("Missing file should not be an error");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{ "error_token": "Erro" }"#).unwrap();

        let config = ConfigLoader::new().with_path(Some(&path)).load().unwrap();
        assert_eq!(config.error_token, "Erro");
        assert!(config.rich_output);
    }

    #[test]
    fn test_invalid_json() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = ConfigLoader::new().with_path(Some(&path)).load().unwrap_err();
        assert!(matches!(err, CalculatorError::Serialization { .. }));
    }

    #[test]
    fn test_rejects_numeric_error_token() {
        for token in ["", "42", "1e5", " Err"] {
            let config = Config {
                error_token: token.to_string(),
                rich_output: false,
            };
            assert!(
                matches!(config.validate(), Err(CalculatorError::InvalidInput { .. })),
                "{token:?}"
            );
        }
    }
}
