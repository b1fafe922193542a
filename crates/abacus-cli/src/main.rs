//! Abacus CLI Application
//!
//! Terminal front end for the abacus pocket calculator.

mod args;
mod cli;
mod keymap;
mod keypad;
mod renderer;

use abacus_core::{CalculatorBuilder, ConfigLoader};
use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config_file,
        no_color,
        error_token,
        command,
    } = Args::parse();

    let config = ConfigLoader::new()
        .with_path(config_file)
        .load()
        .context("Failed to load configuration")?;

    let renderer = TerminalRenderer::new(config.rich_output && !no_color);

    let calculator = CalculatorBuilder::new()
        .with_config(config)
        .with_error_token(error_token)
        .build()
        .context("Failed to initialize calculator")?;

    info!("Abacus started");

    let mut cli = Cli::new(calculator, renderer);
    match command {
        Some(Press(args)) => cli.handle_press(&args),
        Some(Keys(args)) => cli.handle_keys(&args),
        None => cli.run_session(std::io::stdin().lock()),
    }
}
