//! Command to check whether a path is absolute.

use crate::error::CliError;
use crate::utils::{build_engine, print_value, GlobalOptions};
use clap::Args;
use serde_json::Value;

/// Check whether a path is absolute.
///
/// Prints `true` or `false` and exits with status 1 when the path is
/// relative, so the command can be used in shell conditionals.
#[derive(Args)]
pub struct IsAbsoluteCommand {
    /// Path to check
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl IsAbsoluteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let engine = build_engine(global)?;
        let absolute = engine.is_absolute(&self.path);
        print_value(global, &Value::from(absolute))?;

        if absolute {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} is not absolute",
                self.path
            )))
        }
    }
}
