//! Main entry point for the pathgram CLI.
//!
//! This is the command-line interface for the pathgram path engine.
//! It provides commands for manipulating path strings:
//! - `normalize`, `join`, `resolve`: Produce canonical paths
//! - `dirname`, `basename`, `extname`: Take paths apart
//! - `is-absolute`, `relative`: Compare and classify paths
//! - `invoke`: Call any operation with JSON arguments

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        style: cli.style,
        cwd: cli.cwd,
        config: cli.config,
        json: cli.json,
    };

    // Initialize logging based on verbosity
    let logger = global.logger();
    if let Err(e) = logger.install() {
        logger.warn(&format!("could not install logger: {e}"));
    }

    // Execute the command
    let result = match cli.command {
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::Dirname(cmd) => cmd.execute(&global),
        cli::Command::Basename(cmd) => cmd.execute(&global),
        cli::Command::Extname(cmd) => cmd.execute(&global),
        cli::Command::IsAbsolute(cmd) => cmd.execute(&global),
        cli::Command::Relative(cmd) => cmd.execute(&global),
        cli::Command::Sep(cmd) => cmd.execute(&global),
        cli::Command::Invoke(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !e.is_silent() {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
