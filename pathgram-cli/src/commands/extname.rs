//! Command to print the extension of a path.

use crate::error::CliError;
use crate::utils::{build_engine, print_value, GlobalOptions};
use clap::Args;
use serde_json::Value;

/// Print the extension of the final segment, including the dot.
#[derive(Args)]
pub struct ExtnameCommand {
    /// Path to inspect
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl ExtnameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let engine = build_engine(global)?;
        print_value(global, &Value::from(engine.extname(&self.path)))
    }
}
