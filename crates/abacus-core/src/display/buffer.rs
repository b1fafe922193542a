//! Text currently shown on the calculator display.

use std::fmt;

use crate::{
    error::{CalculatorError, Result},
    models::state::ZERO,
};

/// Error token shown when no configuration overrides it.
pub const DEFAULT_ERROR_TOKEN: &str = "Error";

/// Holds the display text being entered or shown.
///
/// The text is never empty, carries at most one decimal separator, and is
/// either the error token or a numeric literal (possibly ending in a
/// separator while the user is mid-entry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBuffer {
    text: String,
    error_token: String,
}

impl DisplayBuffer {
    /// Creates a buffer showing `"0"` that uses `error_token` for invalid
    /// results.
    pub fn new(error_token: impl Into<String>) -> Self {
        Self {
            text: ZERO.to_string(),
            error_token: error_token.into(),
        }
    }

    /// Text as shown.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Token shown after an invalid result.
    pub fn error_token(&self) -> &str {
        &self.error_token
    }

    /// Whether the display currently shows the error token.
    pub fn is_error(&self) -> bool {
        self.text == self.error_token
    }

    /// Whether the display shows exactly `"0"`.
    pub fn is_zero(&self) -> bool {
        self.text == ZERO
    }

    /// Whether a decimal separator has been entered.
    pub fn has_decimal_point(&self) -> bool {
        self.text.contains('.')
    }

    /// Back to `"0"`.
    pub fn reset(&mut self) {
        self.text = ZERO.to_string();
    }

    /// Shows the error token.
    pub fn show_error(&mut self) {
        self.text.clone_from(&self.error_token);
    }

    /// Replaces the text wholesale.
    pub fn replace(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Appends one entered character.
    pub fn push(&mut self, symbol: char) {
        self.text.push(symbol);
    }

    /// Parses the display as a number.
    ///
    /// # Errors
    ///
    /// Returns `CalculatorError::InvalidNumber` if the display shows the
    /// error token or anything else that is not a numeric literal.
    pub fn value(&self) -> Result<f64> {
        if self.is_error() {
            return Err(self.invalid_number());
        }
        self.text.parse::<f64>().map_err(|_| self.invalid_number())
    }

    /// Removes the last entered character (backspace).
    ///
    /// Leftovers that no longer form a number, such as a lone sign or a
    /// dangling exponent marker, are trimmed too, and an emptied display
    /// falls back to `"0"`. The error token is cleared outright.
    pub fn trim_last(&mut self) {
        if self.is_error() || self.text.chars().count() <= 1 {
            self.reset();
            return;
        }

        self.text.pop();
        let kept = self
            .text
            .trim_end_matches(['e', 'E', '+', '-'])
            .len();
        self.text.truncate(kept);

        if self.text.is_empty() || self.text == "-" {
            self.reset();
        }
    }

    fn invalid_number(&self) -> CalculatorError {
        CalculatorError::InvalidNumber {
            text: self.text.clone(),
        }
    }
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_TOKEN)
    }
}

impl fmt::Display for DisplayBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
