//! Binary and unary arithmetic.
//!
//! Operations follow plain `f64` semantics. Division by zero yields NaN
//! instead of an infinity, and [`check_result`] turns every non-finite value
//! into [`CalculatorError::InvalidResult`] no matter which operation made it.

use crate::{
    error::{CalculatorError, Result},
    models::BinaryOperator,
};

/// Applies `op` to `a` and `b`.
pub fn calculate(a: f64, b: f64, op: BinaryOperator) -> f64 {
    match op {
        BinaryOperator::Add => a + b,
        BinaryOperator::Subtract => a - b,
        BinaryOperator::Multiply => a * b,
        BinaryOperator::Divide => {
            if b == 0.0 {
                f64::NAN
            } else {
                a / b
            }
        }
    }
}

/// Rejects infinite and not-a-number results.
///
/// # Errors
///
/// Returns `CalculatorError::InvalidResult` naming `operation` when `value`
/// is not finite.
pub fn check_result(value: f64, operation: &str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculatorError::invalid_result(operation))
    }
}

/// Non-negative real square root; NaN for negative input.
pub fn square_root(value: f64) -> f64 {
    if value < 0.0 {
        f64::NAN
    } else {
        value.sqrt()
    }
}

pub fn percent(value: f64) -> f64 {
    value / 100.0
}

pub fn negate(value: f64) -> f64 {
    -value
}
