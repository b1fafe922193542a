//! Keyboard to keypad mapping.
//!
//! Maps single characters typed at the terminal onto calculator input.
//! Characters without a meaning are ignored by the caller.

use abacus_core::{BinaryOperator, Token, TopAction};

/// What a single key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Press a keypad button
    Press(Token),
    /// Remove the last display character
    Backspace,
}

/// Maps a typed character to its keypad input.
pub fn map_key(key: char) -> Option<KeyInput> {
    let token = match key {
        '0'..='9' => Token::Digit(key as u8 - b'0'),
        '.' | ',' => Token::DecimalPoint,
        '+' => Token::Operator(BinaryOperator::Add),
        '-' => Token::Operator(BinaryOperator::Subtract),
        '*' | 'x' | '×' => Token::Operator(BinaryOperator::Multiply),
        '/' | '÷' => Token::Operator(BinaryOperator::Divide),
        '=' | '\n' | '\r' => Token::Equals,
        '\u{1b}' => Token::Top(TopAction::Clear),
        'n' => Token::Top(TopAction::ToggleSign),
        '%' => Token::Top(TopAction::Percent),
        'r' | '√' => Token::SquareRoot,
        '\u{8}' | '\u{7f}' | '<' => return Some(KeyInput::Backspace),
        _ => return None,
    };
    Some(KeyInput::Press(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_and_point() {
        assert_eq!(map_key('0'), Some(KeyInput::Press(Token::Digit(0))));
        assert_eq!(map_key('9'), Some(KeyInput::Press(Token::Digit(9))));
        assert_eq!(map_key('.'), Some(KeyInput::Press(Token::DecimalPoint)));
    }

    #[test]
    fn test_ascii_operators() {
        assert_eq!(
            map_key('*'),
            Some(KeyInput::Press(Token::Operator(BinaryOperator::Multiply)))
        );
        assert_eq!(
            map_key('/'),
            Some(KeyInput::Press(Token::Operator(BinaryOperator::Divide)))
        );
        assert_eq!(map_key('\n'), Some(KeyInput::Press(Token::Equals)));
        assert_eq!(map_key('='), Some(KeyInput::Press(Token::Equals)));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(
            map_key('\u{1b}'),
            Some(KeyInput::Press(Token::Top(TopAction::Clear)))
        );
        assert_eq!(map_key('\u{7f}'), Some(KeyInput::Backspace));
        assert_eq!(map_key('<'), Some(KeyInput::Backspace));
    }

    #[test]
    fn test_unknown_keys() {
        for key in ['a', ' ', '(', '^', 'q'] {
            assert_eq!(map_key(key), None, "{key:?}");
        }
    }
}
