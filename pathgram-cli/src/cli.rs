//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BasenameCommand, CompletionsCommand, DirnameCommand, ExtnameCommand, InvokeCommand,
    IsAbsoluteCommand, JoinCommand, NormalizeCommand, RelativeCommand, ResolveCommand, SepCommand,
};
use clap::{Parser, Subcommand};
use pathgram::path::PlatformStyle;
use std::path::PathBuf;

/// Command-line tool for manipulating POSIX and Windows path strings.
#[derive(Parser)]
#[command(name = "pathgram")]
#[command(version, about = "Parse, normalize and resolve POSIX and Windows paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path grammar to use: posix or windows [env: PATHGRAM_STYLE]
    #[arg(long, value_name = "STYLE", global = true)]
    pub style: Option<PlatformStyle>,

    /// Directory relative paths are anchored to [env: PATHGRAM_CWD]
    #[arg(long, value_name = "DIR", global = true, allow_hyphen_values = true)]
    pub cwd: Option<String>,

    /// Additional configuration file
    #[arg(long, value_name = "FILE", global = true, env = "PATHGRAM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the canonical form of a path
    Normalize(NormalizeCommand),

    /// Resolve paths into one absolute path
    Resolve(ResolveCommand),

    /// Join path fragments into one normalized path
    Join(JoinCommand),

    /// Print the parent directory of a path
    Dirname(DirnameCommand),

    /// Print the final segment of a path
    Basename(BasenameCommand),

    /// Print the extension of a path
    Extname(ExtnameCommand),

    /// Check whether a path is absolute (exit 1 if not)
    IsAbsolute(IsAbsoluteCommand),

    /// Print the relative path from one path to another
    Relative(RelativeCommand),

    /// Print the separator of the configured style
    Sep(SepCommand),

    /// Invoke an operation with a JSON array of arguments
    Invoke(InvokeCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
