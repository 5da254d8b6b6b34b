//! Command to compute the relative route between two paths.

use crate::error::CliError;
use crate::utils::{build_engine, print_value, GlobalOptions};
use clap::Args;
use serde_json::Value;

/// Print the relative path leading from one path to another.
#[derive(Args)]
pub struct RelativeCommand {
    /// Starting path
    #[arg(value_name = "FROM", allow_hyphen_values = true)]
    pub from: String,

    /// Destination path
    #[arg(value_name = "TO", allow_hyphen_values = true)]
    pub to: String,
}

impl RelativeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let engine = build_engine(global)?;
        let route = engine.relative(&self.from, &self.to)?;
        print_value(global, &Value::from(route))
    }
}
