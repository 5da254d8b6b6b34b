//! Command to resolve paths into an absolute path.

use crate::error::CliError;
use crate::utils::{build_engine, print_value, GlobalOptions};
use clap::Args;
use serde_json::Value;

/// Resolve a sequence of paths into one absolute path.
///
/// Relative results are anchored to `--cwd`, `PATHGRAM_CWD`, the configured
/// `cwd`, or the process working directory, in that order.
#[derive(Args)]
pub struct ResolveCommand {
    /// Paths to resolve, right to left
    #[arg(value_name = "PATH", required = true, num_args = 1.., allow_hyphen_values = true)]
    pub paths: Vec<String>,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let engine = build_engine(global)?;
        let resolved = engine.resolve(&self.paths)?;
        print_value(global, &Value::from(resolved))
    }
}
