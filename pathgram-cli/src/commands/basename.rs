//! Command to print the final segment of a path.

use crate::error::CliError;
use crate::utils::{build_engine, print_value, GlobalOptions};
use clap::Args;
use serde_json::Value;

/// Print the final segment of a path.
#[derive(Args)]
pub struct BasenameCommand {
    /// Path to take the final segment of
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Literal suffix to strip from the segment
    #[arg(value_name = "SUFFIX", allow_hyphen_values = true)]
    pub suffix: Option<String>,
}

impl BasenameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let engine = build_engine(global)?;
        let name = engine.basename(&self.path, self.suffix.as_deref());
        print_value(global, &Value::from(name))
    }
}
