//! Command handlers driving the calculator from the terminal.
//!
//! The CLI is the presentation collaborator: it turns arguments or typed
//! keys into tokens, hands them to the [`Calculator`], and redraws from what
//! the calculator reports afterwards.

use std::io::BufRead;

use abacus_core::Calculator;
use anyhow::{Context, Result};
use log::{debug, info};

use crate::{
    args::{KeysArgs, PressArgs},
    keymap::{map_key, KeyInput},
    renderer::TerminalRenderer,
};

/// Line that ends an interactive session.
const QUIT: &str = "q";

pub struct Cli {
    calculator: Calculator,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(calculator: Calculator, renderer: TerminalRenderer) -> Self {
        Self {
            calculator,
            renderer,
        }
    }

    /// Press every button given on the command line.
    pub fn handle_press(&mut self, args: &PressArgs) -> Result<()> {
        let tokens = args.parse_tokens()?;
        self.calculator.dispatch_all(tokens);
        self.finish(args.keypad)
    }

    /// Type every key of the given string.
    pub fn handle_keys(&mut self, args: &KeysArgs) -> Result<()> {
        self.type_keys(&args.keys);
        self.finish(args.keypad)
    }

    /// Run an interactive session until `q` or end of input.
    ///
    /// Every line is typed key by key; the screen is redrawn after each line.
    pub fn run_session<R: BufRead>(&mut self, reader: R) -> Result<()> {
        info!("Starting interactive session");
        self.renderer
            .render_markdown("Type keys and press *Enter*; `=` evaluates, `q` quits.")?;
        self.renderer.render_screen(&self.calculator)?;

        for line in reader.lines() {
            let line = line.context("Failed to read input")?;
            if line.trim() == QUIT {
                break;
            }
            self.type_keys(&line);
            self.renderer.render_screen(&self.calculator)?;
        }

        info!("Session ended");
        Ok(())
    }

    /// Feed each character through the keyboard map.
    pub fn type_keys(&mut self, keys: &str) {
        for key in keys.chars() {
            match map_key(key) {
                Some(input) => self.apply(input),
                None => debug!("Ignoring key {key:?}"),
            }
        }
    }

    fn apply(&mut self, input: KeyInput) {
        match input {
            KeyInput::Press(token) => self.calculator.dispatch(token),
            KeyInput::Backspace => self.calculator.backspace(),
        }
    }

    fn finish(&self, keypad: bool) -> Result<()> {
        if keypad {
            self.renderer.render_screen(&self.calculator)
        } else {
            self.renderer.render_display(&self.calculator)
        }
    }

    #[cfg(test)]
    fn display_text(&self) -> &str {
        self.calculator.display_text()
    }
}

#[cfg(test)]
mod tests {
    use abacus_core::CalculatorBuilder;

    use super::*;

    fn plain_cli() -> Cli {
        let calculator = CalculatorBuilder::new().build().unwrap();
        Cli::new(calculator, TerminalRenderer::new(false))
    }

    #[test]
    fn test_type_keys() {
        let mut cli = plain_cli();
        cli.type_keys("6+2*3=");
        assert_eq!(cli.display_text(), "24");
    }

    #[test]
    fn test_type_keys_with_backspace_and_escape() {
        let mut cli = plain_cli();
        cli.type_keys("125<");
        assert_eq!(cli.display_text(), "12");
        cli.type_keys("\u{1b}");
        assert_eq!(cli.display_text(), "0");
    }

    #[test]
    fn test_type_keys_ignores_unknown() {
        let mut cli = plain_cli();
        cli.type_keys("9 a r");
        assert_eq!(cli.display_text(), "3");
    }

    #[test]
    fn test_session_stops_at_quit() {
        let mut cli = plain_cli();
        let input = "12+\n30=\nq\n99\n";
        cli.run_session(input.as_bytes()).unwrap();
        assert_eq!(cli.display_text(), "42");
    }
}
