//! Builder for creating and configuring Calculator instances.

use super::Calculator;
use crate::{config::Config, error::Result};

/// Builder for creating and configuring Calculator instances.
#[derive(Debug, Clone, Default)]
pub struct CalculatorBuilder {
    config: Config,
}

impl CalculatorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses every setting from `config`.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Overrides the error token, if one is given.
    pub fn with_error_token<S: Into<String>>(mut self, token: Option<S>) -> Self {
        if let Some(token) = token {
            self.config.error_token = token.into();
        }
        self
    }

    /// Builds the configured calculator.
    ///
    /// # Errors
    ///
    /// Returns `CalculatorError::InvalidInput` if the configured error token
    /// is unusable.
    pub fn build(self) -> Result<Calculator> {
        self.config.validate()?;
        Ok(Calculator::new(self.config.error_token))
    }
}
