//! Command to print the separator of the configured grammar.

use crate::error::CliError;
use crate::utils::{build_engine, print_value, GlobalOptions};
use clap::Args;
use serde_json::Value;

/// Print the path separator of the configured style.
#[derive(Args)]
pub struct SepCommand {}

impl SepCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let engine = build_engine(global)?;
        print_value(global, &Value::from(engine.separator().to_string()))
    }
}
