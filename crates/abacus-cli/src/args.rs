use std::path::PathBuf;

use abacus_core::Token;
use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};

/// Pocket calculator for the terminal
///
/// Abacus evaluates input strictly left to right, like a physical pocket
/// calculator: every operator applies as soon as the next one is pressed.
/// Without a subcommand it starts an interactive session that reads keys
/// from standard input.
#[derive(Parser)]
#[command(version, about, name = "abacus")]
pub struct Args {
    /// Path to the JSON configuration file. Defaults to
    /// $XDG_CONFIG_HOME/abacus/config.json
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Text shown after an invalid result, overriding the configuration
    #[arg(long, global = true)]
    pub error_token: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Abacus CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Press keypad buttons in order and print the display
    #[command(alias = "p")]
    Press(PressArgs),
    /// Type keyboard keys and print the display
    #[command(alias = "k")]
    Keys(KeysArgs),
}

/// Press keypad buttons
///
/// Each argument is one button label (`7`, `.`, `+`, `-`, `×`, `÷`, `=`,
/// `AC`, `+/-`, `%`, `√`) or an ASCII alias (`*`, `/`, `sqrt`, `neg`,
/// `clear`).
#[derive(ClapArgs)]
pub struct PressArgs {
    /// Buttons to press, in order
    #[arg(required = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,

    /// Draw the whole keypad instead of only the display
    #[arg(long)]
    pub keypad: bool,
}

impl PressArgs {
    /// Parse every argument into a keypad token
    pub fn parse_tokens(&self) -> Result<Vec<Token>> {
        self.tokens
            .iter()
            .map(|label| {
                label
                    .parse::<Token>()
                    .with_context(|| format!("Cannot press '{label}'"))
            })
            .collect()
    }
}

/// Type keyboard keys
///
/// Every character is one key: digits, `.`, `+ - * /`, `=`, `%`, `n`
/// (sign), `r` (square root), `<` (backspace). Other characters are
/// ignored.
#[derive(ClapArgs)]
pub struct KeysArgs {
    /// Keys to type
    #[arg(allow_hyphen_values = true)]
    pub keys: String,

    /// Draw the whole keypad instead of only the display
    #[arg(long)]
    pub keypad: bool,
}
