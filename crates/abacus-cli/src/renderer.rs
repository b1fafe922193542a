//! Terminal rendering module for the calculator screen
//!
//! This module draws the display panel and the keypad using termimad and
//! its crossterm styling, with a plain text fallback for pipes and tests.

use std::io::{self, Write};

use abacus_core::{Calculator, Token};
use anyhow::Result;
use termimad::{
    crossterm::style::{Color, Stylize},
    MadSkin,
};

use crate::keypad::{ButtonStyle, FontSize, KEYPAD};

/// Width of a single keypad cell in columns.
const CELL_WIDTH: usize = 6;
const SCREEN_WIDTH: usize = CELL_WIDTH * 4;

const LIGHT_GRAY: Color = Color::Rgb {
    r: 212,
    g: 212,
    b: 210,
};
const DARK_GRAY: Color = Color::Rgb {
    r: 80,
    g: 80,
    b: 80,
};
const BLACK: Color = Color::Rgb {
    r: 28,
    g: 28,
    b: 28,
};
const ORANGE: Color = Color::Rgb {
    r: 255,
    g: 149,
    b: 0,
};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(ORANGE);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render a line of inline markdown
    pub fn render_markdown(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            self.skin.print_inline(markdown);
            println!();
        } else {
            println!("{markdown}");
        }
        Ok(())
    }

    /// Print only the display text
    pub fn render_display(&self, calculator: &Calculator) -> Result<()> {
        let mut stdout = io::stdout().lock();
        if self.rich_enabled {
            writeln!(stdout, "{}", calculator.display_text().bold())?;
        } else {
            writeln!(stdout, "{}", calculator.display_text())?;
        }
        Ok(())
    }

    /// Print the display panel followed by the keypad
    pub fn render_screen(&self, calculator: &Calculator) -> Result<()> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", self.screen(calculator))?;
        stdout.flush()?;
        Ok(())
    }

    /// Build the full screen as text
    pub fn screen(&self, calculator: &Calculator) -> String {
        let text = calculator.display_text();
        let font = FontSize::for_text(text);

        let mut screen = String::new();
        let caption = format!("{} {}pt", font.as_str(), font.points());
        let caption = format!("{caption:>width$}", width = SCREEN_WIDTH);
        let panel = format!("{text:>width$}", width = SCREEN_WIDTH);
        if self.rich_enabled {
            screen.push_str(&format!("{}\n", caption.with(DARK_GRAY).on(BLACK)));
            screen.push_str(&format!("{}\n", panel.with(Color::White).on(BLACK).bold()));
        } else {
            screen.push_str(&format!("{caption}\n{panel}\n"));
        }

        for row in KEYPAD {
            for token in row {
                screen.push_str(&self.button(calculator, token));
            }
            screen.push('\n');
        }
        screen
    }

    fn button(&self, calculator: &Calculator, token: Token) -> String {
        let armed = match token {
            Token::Operator(op) => calculator.is_operator_armed(op),
            _ => false,
        };

        if !self.rich_enabled {
            let label = if armed {
                format!("[{token}]")
            } else {
                token.to_string()
            };
            return format!("{label:^width$}", width = CELL_WIDTH);
        }

        let cell = format!("{:^width$}", token.to_string(), width = CELL_WIDTH);
        let (fg, bg) = match ButtonStyle::of(token) {
            _ if armed => (ORANGE, Color::White),
            ButtonStyle::TopAction => (BLACK, LIGHT_GRAY),
            ButtonStyle::Operator => (Color::White, ORANGE),
            ButtonStyle::Digit => (Color::White, DARK_GRAY),
        };
        format!("{}", cell.with(fg).on(bg))
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use abacus_core::CalculatorBuilder;

    use super::*;

    fn calculator_after(keys: &str) -> Calculator {
        let mut calculator = CalculatorBuilder::new().build().unwrap();
        for key in keys.split_whitespace() {
            calculator.dispatch(key.parse().unwrap());
        }
        calculator
    }

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_plain_screen_layout() {
        let renderer = TerminalRenderer::new(false);
        let screen = renderer.screen(&calculator_after("1 2 3"));
        let lines: Vec<&str> = screen.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0].trim(), "large 72pt");
        assert_eq!(lines[1].trim(), "123");
        assert_eq!(lines[1].chars().count(), SCREEN_WIDTH);
        assert!(lines[2].contains("AC"));
        assert!(lines[6].contains('√'));
    }

    #[test]
    fn test_plain_screen_marks_armed_operator() {
        let renderer = TerminalRenderer::new(false);
        let screen = renderer.screen(&calculator_after("4 ×"));
        assert!(screen.contains("[×]"));
        assert!(!screen.contains("[+]"));

        let disarmed = renderer.screen(&calculator_after("4 × 2"));
        assert!(!disarmed.contains('['));
    }

    #[test]
    fn test_plain_screen_font_tier() {
        let renderer = TerminalRenderer::new(false);
        let screen = renderer.screen(&calculator_after("1 2 3 4 5 6 7 8"));
        assert!(screen.starts_with(&format!("{:>width$}", "medium 52pt", width = SCREEN_WIDTH)));
    }
}
