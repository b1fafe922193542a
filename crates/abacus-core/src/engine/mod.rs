//! Input dispatch and the accumulator state machine.
//!
//! [`Calculator`] is the single object a presentation layer talks to. Each
//! call to [`Calculator::dispatch`] runs to completion before returning;
//! afterwards the caller pulls [`Calculator::display_text`] and
//! [`Calculator::is_operator_armed`] to redraw.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Dispatcher    │    │    Handlers     │    │   Evaluator     │
//! │ (dispatch by    │───▶│ (digit, op, =,  │───▶│ (calculate,     │
//! │  token variant) │    │  top row, √)    │    │  check_result)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Calculator`] instances with configuration
//! - [`handlers`]: State transitions for each class of input
//! - [`evaluator`]: Arithmetic and the uniform non-finite check
//!
//! # Usage Examples
//!
//! ```rust
//! use abacus_core::{BinaryOperator, Calculator, Token};
//!
//! let mut calculator = Calculator::default();
//! for token in ["6", "+", "2", "×", "3", "="] {
//!     calculator.dispatch(token.parse::<Token>().unwrap());
//! }
//! assert_eq!(calculator.display_text(), "24");
//! assert!(!calculator.is_operator_armed(BinaryOperator::Multiply));
//! ```

use log::debug;

pub mod builder;
pub mod evaluator;
pub mod handlers;


pub use builder::CalculatorBuilder;

use crate::{
    display::DisplayBuffer,
    models::{BinaryOperator, CalculatorState, Token},
};

/// Calculator instance owned by whatever composes the user interface.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    pub(crate) state: CalculatorState,
    pub(crate) display: DisplayBuffer,
    pub(crate) armed: Option<BinaryOperator>,
}

impl Calculator {
    /// Creates a calculator that shows `error_token` for invalid results.
    pub(crate) fn new(error_token: String) -> Self {
        Self {
            state: CalculatorState::default(),
            display: DisplayBuffer::new(error_token),
            armed: None,
        }
    }

    /// Feeds one input symbol to the calculator.
    ///
    /// Routing matches on the token variant alone; the handlers do the
    /// rest.
    pub fn dispatch(&mut self, token: Token) {
        debug!("dispatch {token} ({:?})", token.kind());
        match token {
            Token::Digit(_) | Token::DecimalPoint => self.handle_digit(token),
            Token::Operator(op) => self.handle_operator(op),
            Token::Equals => self.handle_equals(),
            Token::Top(action) => self.handle_top_action(action),
            Token::SquareRoot => self.handle_square_root(),
        }
        debug!(
            "display '{}', state {:?}, armed {:?}",
            self.display.text(),
            self.state,
            self.armed
        );
    }

    /// Dispatches every token in order.
    pub fn dispatch_all<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = Token>,
    {
        for token in tokens {
            self.dispatch(token);
        }
    }

    /// Current text to render.
    pub fn display_text(&self) -> &str {
        self.display.text()
    }

    /// The display buffer behind [`Calculator::display_text`].
    pub fn display(&self) -> &DisplayBuffer {
        &self.display
    }

    /// Whether `op` should be drawn highlighted.
    pub fn is_operator_armed(&self, op: BinaryOperator) -> bool {
        self.armed == Some(op)
    }

    /// The highlighted operator, if any.
    pub fn armed_operator(&self) -> Option<BinaryOperator> {
        self.armed
    }

    /// Accumulator state.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Whether the display currently shows the error token.
    pub fn is_error(&self) -> bool {
        self.display.is_error()
    }

    /// Display-only backspace.
    ///
    /// Removes the last character of the display without touching the
    /// accumulator or the armed operator.
    pub fn backspace(&mut self) {
        self.display.trim_last();
        debug!("backspace -> '{}'", self.display.text());
    }
}
