//! Core library for the Abacus pocket calculator.
//!
//! This crate turns a stream of keypad presses into a running computation
//! the way a physical pocket calculator does: strictly left to right, each
//! operator applied as soon as the next one is pressed. It owns no widgets
//! and performs no I/O beyond reading its configuration file.
//!
//! # Presentation Contract
//!
//! Any user interface (graphical, terminal, web) drives the calculator
//! through three calls:
//!
//! - [`Calculator::dispatch`]: feed one classified [`Token`]
//! - [`Calculator::display_text`]: pull the text to render
//! - [`Calculator::is_operator_armed`]: decide which operator to highlight
//!
//! Font sizing, colors and raw keyboard mapping stay in the interface layer.
//!
//! # Quick Start
//!
//! ```rust
//! use abacus_core::{CalculatorBuilder, Token};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut calculator = CalculatorBuilder::new().build()?;
//!
//! for key in ["5", "÷", "0", "="] {
//!     calculator.dispatch(key.parse::<Token>()?);
//! }
//! assert_eq!(calculator.display_text(), "Error");
//!
//! calculator.dispatch("9".parse()?);
//! calculator.dispatch("√".parse()?);
//! assert_eq!(calculator.display_text(), "3");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{Config, ConfigLoader};
pub use display::{format_number, DisplayBuffer};
pub use engine::{Calculator, CalculatorBuilder};
pub use error::{CalculatorError, Result};
pub use models::{BinaryOperator, CalculatorState, Phase, Token, TokenKind, TopAction};
