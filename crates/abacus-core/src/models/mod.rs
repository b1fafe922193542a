//! Data models for calculator input and state.
//!
//! Input arrives as [`Token`]s, a closed enumeration of every keypad symbol,
//! so string comparison never happens past the parsing boundary. The engine's
//! bookkeeping lives in [`CalculatorState`].
//!
//! # Examples
//!
//! ```rust
//! use abacus_core::models::{BinaryOperator, Token, TokenKind};
//!
//! let token: Token = "×".parse().unwrap();
//! assert_eq!(token, Token::Operator(BinaryOperator::Multiply));
//! assert_eq!(token.kind(), TokenKind::Operator);
//! ```

pub mod state;
pub mod token;

pub use state::{CalculatorState, Phase};
pub use token::{BinaryOperator, Token, TokenKind, TopAction};
