//! Keypad tokens accepted by the calculator.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::CalculatorError;

/// Type-safe enumeration of the four binary operators.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// All operators in keypad order, top to bottom.
    pub const ALL: [BinaryOperator; 4] = [
        BinaryOperator::Divide,
        BinaryOperator::Multiply,
        BinaryOperator::Subtract,
        BinaryOperator::Add,
    ];

    /// Keypad label of the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "×",
            BinaryOperator::Divide => "÷",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary actions on the top row of the keypad.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TopAction {
    /// Reset everything (AC)
    Clear,
    /// Negate the displayed value (+/-)
    ToggleSign,
    /// Divide the displayed value by 100 (%)
    Percent,
}

impl TopAction {
    /// Keypad label of the action.
    pub fn symbol(&self) -> &'static str {
        match self {
            TopAction::Clear => "AC",
            TopAction::ToggleSign => "+/-",
            TopAction::Percent => "%",
        }
    }
}

impl fmt::Display for TopAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Broad classification used by the dispatcher.
///
/// The four classes are disjoint: every token belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `0`-`9` and `.`
    Digit,
    /// `+ - × ÷ =`
    Operator,
    /// `AC +/- %`
    Top,
    /// `√`
    SquareRoot,
}

/// A single symbolic input delivered by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Token {
    /// A decimal digit, always in `0..=9`
    Digit(u8),
    DecimalPoint,
    Operator(BinaryOperator),
    Equals,
    Top(TopAction),
    SquareRoot,
}

impl Token {
    /// Creates a digit token, returning `None` for values above 9.
    pub fn digit(value: u8) -> Option<Self> {
        (value <= 9).then_some(Token::Digit(value))
    }

    /// Classifies the token by symbol identity.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Digit(_) | Token::DecimalPoint => TokenKind::Digit,
            Token::Operator(_) | Token::Equals => TokenKind::Operator,
            Token::Top(_) => TokenKind::Top,
            Token::SquareRoot => TokenKind::SquareRoot,
        }
    }

    /// The character a digit or decimal point token appends to the display.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Token::Digit(d) => char::from_digit(u32::from(*d), 10),
            Token::DecimalPoint => Some('.'),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Digit(d) => write!(f, "{d}"),
            Token::DecimalPoint => f.write_str("."),
            Token::Operator(op) => write!(f, "{op}"),
            Token::Equals => f.write_str("="),
            Token::Top(action) => write!(f, "{action}"),
            Token::SquareRoot => f.write_str("√"),
        }
    }
}

impl FromStr for Token {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = match s.trim().to_lowercase().as_str() {
            "." | "," => Token::DecimalPoint,
            "+" => Token::Operator(BinaryOperator::Add),
            "-" | "−" => Token::Operator(BinaryOperator::Subtract),
            "×" | "*" | "x" => Token::Operator(BinaryOperator::Multiply),
            "÷" | "/" => Token::Operator(BinaryOperator::Divide),
            "=" => Token::Equals,
            "ac" | "c" | "clear" => Token::Top(TopAction::Clear),
            "+/-" | "±" | "neg" => Token::Top(TopAction::ToggleSign),
            "%" => Token::Top(TopAction::Percent),
            "√" | "sqrt" => Token::SquareRoot,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Token::Digit(c as u8 - b'0'),
                    _ => {
                        return Err(CalculatorError::UnknownToken {
                            token: s.to_string(),
                        })
                    }
                }
            }
        };
        Ok(token)
    }
}

impl TryFrom<String> for Token {
    type Error = CalculatorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.to_string()
    }
}
