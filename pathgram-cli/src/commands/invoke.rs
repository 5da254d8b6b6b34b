//! Command to invoke a path operation with JSON arguments.

use crate::error::CliError;
use crate::utils::{build_engine, print_value, GlobalOptions};
use clap::Args;
use serde_json::Value;

/// Invoke an operation by name with a JSON array of arguments.
///
/// Arguments are checked exactly as a scripting host's would be, so
/// non-string or missing arguments produce `path.<op>` errors.
#[derive(Args)]
pub struct InvokeCommand {
    /// Operation name (normalize, resolve, join, dirname, basename, extname,
    /// isAbsolute, relative)
    #[arg(value_name = "OP")]
    pub operation: String,

    /// Arguments as a JSON array, e.g. '["/foo", "bar"]'
    #[arg(value_name = "ARGS_JSON", default_value = "[]")]
    pub args: String,
}

impl InvokeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let args = parse_args(&self.args)?;
        let engine = build_engine(global)?;
        let result = engine.invoke_named(&self.operation, &args).map_err(|e| match e {
            pathgram::Error::Validation { message, .. } => CliError::InvalidArguments(message),
            other => CliError::from(other),
        })?;
        print_value(global, &result)
    }
}

/// Parse the argument list, which must be a JSON array.
fn parse_args(raw: &str) -> Result<Vec<Value>, CliError> {
    match serde_json::from_str(raw) {
        Ok(Value::Array(args)) => Ok(args),
        Ok(_) => Err(CliError::InvalidArguments(
            "ARGS_JSON must be a JSON array".to_string(),
        )),
        Err(e) => Err(CliError::InvalidArguments(format!("ARGS_JSON: {e}"))),
    }
}
