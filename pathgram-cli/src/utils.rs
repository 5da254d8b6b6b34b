//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, engine construction and output
//! formatting.

use crate::error::CliError;
use pathgram::path::PlatformStyle;
use pathgram::{Config, ConfigBuilder, Logger, PathEngine};
use serde_json::Value;
use std::io::{self, Write};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the path grammar.
    pub style: Option<PlatformStyle>,

    /// Override the directory relative paths are anchored to.
    pub cwd: Option<String>,

    /// Additional configuration file.
    pub config: Option<PathBuf>,

    /// Print results as JSON.
    pub json: bool,
}

impl GlobalOptions {
    /// Build the logger for the `--verbose` / `--quiet` flags.
    ///
    /// `--verbose` wins when both are given; with neither, the level comes
    /// from `PATHGRAM_LOG_MODE`.
    #[must_use]
    pub fn logger(&self) -> Logger {
        pathgram::init_logger(self.verbose, self.quiet)
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_config(Config {
        style: global.style,
        cwd: global.cwd.clone(),
    });

    if let Some(path) = &global.config {
        builder = builder.with_config_file(path);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Build a path engine from the merged configuration.
pub fn build_engine(global: &GlobalOptions) -> Result<PathEngine, CliError> {
    let config = load_configuration(global)?;
    Ok(PathEngine::new(config.into_options()))
}

/// Render a result for display.
///
/// In text mode strings are printed bare and everything else as JSON; with
/// `--json` every value is printed as JSON.
pub fn format_value(value: &Value, json: bool) -> String {
    match value {
        Value::String(s) if !json => s.clone(),
        other => other.to_string(),
    }
}

/// Print a result to stdout.
pub fn print_value(global: &GlobalOptions, value: &Value) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", format_value(value, global.json))?;
    Ok(())
}
