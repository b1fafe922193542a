//! State transitions for each class of input.

use log::warn;

use super::{
    evaluator::{self, calculate, check_result},
    Calculator,
};
use crate::{
    display::format_number,
    error::{CalculatorError, Result},
    models::{BinaryOperator, Token, TopAction},
};

impl Calculator {
    /// Handle a digit or decimal point.
    ///
    /// Entering digits un-highlights the armed operator but keeps it
    /// pending, so the next `=` or operator still applies it.
    pub(crate) fn handle_digit(&mut self, token: Token) {
        let Some(symbol) = token.as_char() else {
            return;
        };

        self.armed = None;

        if self.display.is_error() {
            self.display.reset();
        }

        if token == Token::DecimalPoint && self.display.has_decimal_point() {
            return;
        }

        if token == Token::DecimalPoint && self.state.awaiting_second_operand {
            self.display.replace(format!("0{symbol}"));
            self.state.awaiting_second_operand = false;
        } else if token == Token::DecimalPoint {
            self.display.push(symbol);
        } else if self.state.awaiting_second_operand {
            self.display.replace(symbol.to_string());
            self.state.awaiting_second_operand = false;
        } else if self.display.is_zero() {
            self.display.replace(symbol.to_string());
        } else {
            self.display.push(symbol);
        }
    }

    /// Handle one of `+ - × ÷`.
    ///
    /// Commits the pending operator first when a second operand has been
    /// entered, which gives strict left-to-right evaluation. Ignored while
    /// the error token is shown.
    pub(crate) fn handle_operator(&mut self, op: BinaryOperator) {
        if self.display.is_error() {
            return;
        }

        let first_operand = match self.state.pending_operator {
            Some(pending) if !self.state.awaiting_second_operand => {
                match self.evaluate_pending(pending) {
                    Ok(text) => {
                        self.display.replace(text.clone());
                        text
                    }
                    Err(_) => return,
                }
            }
            _ => self.display.text().to_string(),
        };

        self.state.arm(first_operand, op);
        self.armed = Some(op);
    }

    /// Handle `=`.
    ///
    /// Without a pending operator this only disarms; repeated presses never
    /// re-apply the previous operation.
    pub(crate) fn handle_equals(&mut self) {
        if let Some(pending) = self.state.pending_operator {
            if let Ok(text) = self.evaluate_pending(pending) {
                self.display.replace(text);
                self.state.reset();
            }
        }
        self.armed = None;
    }

    /// Handle the top row: `AC`, `+/-` and `%`.
    pub(crate) fn handle_top_action(&mut self, action: TopAction) {
        match action {
            TopAction::Clear => {
                self.state.reset();
                self.display.reset();
                self.armed = None;
            }
            TopAction::ToggleSign => self.apply_unary(evaluator::negate),
            TopAction::Percent => self.apply_unary(evaluator::percent),
        }
    }

    /// Handle `√`. A negative display is an invalid result.
    pub(crate) fn handle_square_root(&mut self) {
        if self.display.is_error() {
            return;
        }

        let result = self
            .display
            .value()
            .and_then(|value| check_result(evaluator::square_root(value), "√"));
        match result {
            Ok(root) => self.display.replace(format_number(root)),
            Err(err) => self.fail(&err),
        }
    }

    /// Negation and percent leave the accumulator untouched and ignore an
    /// error display.
    fn apply_unary(&mut self, f: fn(f64) -> f64) {
        if self.display.is_error() {
            return;
        }

        match self.display.value() {
            Ok(value) => self.display.replace(format_number(f(value))),
            Err(err) => self.fail(&err),
        }
    }

    /// Evaluates `first_operand <pending> display` and formats the result.
    ///
    /// On failure the error token is already shown and the state reset.
    fn evaluate_pending(&mut self, pending: BinaryOperator) -> Result<String> {
        match self.compute(pending) {
            Ok(value) => Ok(format_number(value)),
            Err(err) => {
                self.fail(&err);
                Err(err)
            }
        }
    }

    fn compute(&self, op: BinaryOperator) -> Result<f64> {
        let a = self.state.first_operand.parse::<f64>().map_err(|_| {
            CalculatorError::InvalidNumber {
                text: self.state.first_operand.clone(),
            }
        })?;
        let b = self.display.value()?;
        check_result(calculate(a, b, op), op.symbol())
    }

    fn fail(&mut self, err: &CalculatorError) {
        warn!("{err}; resetting calculator");
        self.display.show_error();
        self.state.reset();
        self.armed = None;
    }
}
