//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary
const BIN_NAME: &str = "pathgram";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            print_instructions(self.shell);
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

/// Explain on stderr where the generated script should go.
fn print_instructions(shell: Shell) {
    eprintln!("# Generating {shell} completion script");
    eprintln!("# Run the following command to enable completions:");

    match shell {
        Shell::Bash => {
            eprintln!(
                "#   pathgram completions bash > ~/.local/share/bash-completion/completions/pathgram"
            );
            eprintln!("# Or source it directly in ~/.bashrc:");
            eprintln!("#   eval \"$(pathgram completions bash)\"");
        }
        Shell::Zsh => {
            eprintln!("#   pathgram completions zsh > ~/.zsh/completions/_pathgram");
            eprintln!("# Make sure ~/.zsh/completions is in your $fpath");
        }
        Shell::Fish => {
            eprintln!("#   pathgram completions fish > ~/.config/fish/completions/pathgram.fish");
            eprintln!("# Or add to config.fish:");
            eprintln!("#   pathgram completions fish | source");
        }
        Shell::PowerShell => {
            eprintln!("#   pathgram completions powershell > $PROFILE");
        }
        _ => {}
    }

    eprintln!();
}
