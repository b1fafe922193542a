//! Keypad layout, button styles and display font tiers.

use abacus_core::{BinaryOperator, Token, TopAction};

/// The 5×4 keypad, row by row.
pub const KEYPAD: [[Token; 4]; 5] = [
    [
        Token::Top(TopAction::Clear),
        Token::Top(TopAction::ToggleSign),
        Token::Top(TopAction::Percent),
        Token::Operator(BinaryOperator::Divide),
    ],
    [
        Token::Digit(7),
        Token::Digit(8),
        Token::Digit(9),
        Token::Operator(BinaryOperator::Multiply),
    ],
    [
        Token::Digit(4),
        Token::Digit(5),
        Token::Digit(6),
        Token::Operator(BinaryOperator::Subtract),
    ],
    [
        Token::Digit(1),
        Token::Digit(2),
        Token::Digit(3),
        Token::Operator(BinaryOperator::Add),
    ],
    [
        Token::Digit(0),
        Token::DecimalPoint,
        Token::SquareRoot,
        Token::Equals,
    ],
];

/// Visual category of a keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Light gray top row (`AC +/- %`)
    TopAction,
    /// Orange right column (`÷ × - + =`)
    Operator,
    /// Dark gray digits, `.` and `√`
    Digit,
}

impl ButtonStyle {
    pub fn of(token: Token) -> Self {
        match token {
            Token::Top(_) => ButtonStyle::TopAction,
            Token::Operator(_) | Token::Equals => ButtonStyle::Operator,
            Token::Digit(_) | Token::DecimalPoint | Token::SquareRoot => ButtonStyle::Digit,
        }
    }
}

/// Display font tier, chosen purely from the display text length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Large,
    Medium,
    Small,
    Smallest,
}

impl FontSize {
    pub fn for_text(text: &str) -> Self {
        match text.chars().count() {
            0..=6 => FontSize::Large,
            7..=9 => FontSize::Medium,
            10..=12 => FontSize::Small,
            _ => FontSize::Smallest,
        }
    }

    /// Point size used by graphical front ends.
    pub fn points(&self) -> u16 {
        match self {
            FontSize::Large => 72,
            FontSize::Medium => 52,
            FontSize::Small => 40,
            FontSize::Smallest => 30,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FontSize::Large => "large",
            FontSize::Medium => "medium",
            FontSize::Small => "small",
            FontSize::Smallest => "smallest",
        }
    }
}
