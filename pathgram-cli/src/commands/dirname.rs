//! Command to print the parent directory of a path.

use crate::error::CliError;
use crate::utils::{build_engine, print_value, GlobalOptions};
use clap::Args;
use serde_json::Value;

/// Print the parent directory of a path.
#[derive(Args)]
pub struct DirnameCommand {
    /// Path to take the parent of
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl DirnameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let engine = build_engine(global)?;
        print_value(global, &Value::from(engine.dirname(&self.path)))
    }
}
