//! Accumulator and pending operator bookkeeping.

use super::token::BinaryOperator;

/// Literal held by a freshly reset accumulator.
pub const ZERO: &str = "0";

/// Accumulator state of the calculator.
///
/// `pending_operator == None` always implies `awaiting_second_operand ==
/// false`, and `first_operand` never holds the error token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    pub(crate) first_operand: String,
    pub(crate) pending_operator: Option<BinaryOperator>,
    pub(crate) awaiting_second_operand: bool,
}

/// Conceptual phase of the state machine, derived from the state and the
/// display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No operator pending
    Idle,
    /// Operator chosen, next digit starts the second operand
    PendingOperator(BinaryOperator),
    /// Digits are being appended to the second operand
    EnteringSecondOperand(BinaryOperator),
}

impl CalculatorState {
    /// The first operand as display text.
    pub fn first_operand(&self) -> &str {
        &self.first_operand
    }

    /// The operator waiting for its second operand, if any.
    pub fn pending_operator(&self) -> Option<BinaryOperator> {
        self.pending_operator
    }

    /// Whether the next digit replaces the display wholesale.
    pub fn awaiting_second_operand(&self) -> bool {
        self.awaiting_second_operand
    }

    /// Phase implied by the pending operator and the awaiting flag.
    pub fn phase(&self) -> Phase {
        match (self.pending_operator, self.awaiting_second_operand) {
            (None, _) => Phase::Idle,
            (Some(op), true) => Phase::PendingOperator(op),
            (Some(op), false) => Phase::EnteringSecondOperand(op),
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Arms `operator` with `first_operand` as its left-hand side.
    pub(crate) fn arm(&mut self, first_operand: String, operator: BinaryOperator) {
        self.first_operand = first_operand;
        self.pending_operator = Some(operator);
        self.awaiting_second_operand = true;
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            first_operand: ZERO.to_string(),
            pending_operator: None,
            awaiting_second_operand: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = CalculatorState::default();
        assert_eq!(state.first_operand(), "0");
        assert_eq!(state.pending_operator(), None);
        assert!(!state.awaiting_second_operand());
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_phases() {
        let mut state = CalculatorState::default();
        state.arm("12".to_string(), BinaryOperator::Multiply);
        assert_eq!(state.phase(), Phase::PendingOperator(BinaryOperator::Multiply));

        state.awaiting_second_operand = false;
        assert_eq!(
            state.phase(),
            Phase::EnteringSecondOperand(BinaryOperator::Multiply)
        );

        state.reset();
        assert_eq!(state, CalculatorState::default());
    }
}
