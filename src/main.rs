//! iconplate - turn source artwork into app icon assets.

mod cli;
mod config;
mod image;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::IconConfig;

fn main() -> Result<()> {
    let cli = parse_cli();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = IconConfig::load(&cli)?;

    match &cli.command {
        Commands::Preview { .. } => cli::preview::run_preview(&config),
        Commands::Macos { args } => cli::macos::run_macos(args, &config),
    }
}

/// Parse arguments, exiting with status 1 on usage errors.
///
/// `--help` and `--version` still exit 0.
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            err.print().ok();
            std::process::exit(code);
        }
    }
}
