//! lead-notes - sign-in gate for Lead Notes
//!
//! # Examples
//!
//! ```bash
//! # Interactive sign-in screen
//! lead-notes
//!
//! # Demo sign-in without the identity provider
//! lead-notes demo alice@example.com
//!
//! # Show who is signed in
//! lead-notes status
//! ```

mod app;
mod cli;
mod commands;
mod error;
mod logger;
mod screens;
mod terminal_input;
mod terminal_prompt;

#[cfg(test)]
mod tests;

use crate::{
    cli::Cli, commands::Commands, error::Result as ShellResult, terminal_input::TerminalInput,
    terminal_prompt::TerminalCredentialPrompt,
};

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use ln_config::Config;
use log::error;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ShellResult<()> {
    // --config-dir > LN_CONFIG_DIR > ./.ln
    let config_dir = match cli.config_dir {
        Some(dir) => dir,
        None => Config::config_dir()?,
    };

    let config = Config::load_from(&config_dir)?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path(&config_dir),
        config.logging.colored,
    )?;
    config.log_summary();

    let input = Arc::new(TerminalInput::stdin());
    let prompt = Arc::new(TerminalCredentialPrompt::new(Arc::clone(&input)));
    let mut controller = app::build_controller(&config, &config_dir, prompt)?;

    let command = cli.command.unwrap_or(Commands::Run);
    let result = app::run_command(&mut controller, command, &input).await;
    controller.teardown();

    if let Some(output) = result? {
        println!("{output}");
    }
    Ok(())
}
