//! Command to join path fragments.

use crate::error::CliError;
use crate::utils::{build_engine, print_value, GlobalOptions};
use clap::Args;
use serde_json::Value;

/// Join path fragments into one normalized path.
#[derive(Args)]
pub struct JoinCommand {
    /// Fragments to join
    #[arg(value_name = "PATH", required = true, num_args = 1.., allow_hyphen_values = true)]
    pub paths: Vec<String>,
}

impl JoinCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let engine = build_engine(global)?;
        let joined = engine.join(&self.paths)?;
        print_value(global, &Value::from(joined))
    }
}
