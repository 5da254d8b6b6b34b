//! Dynamic invocation of path operations.
//!
//! Bindings that receive untyped argument lists (scripting hosts, JSON
//! requests, the CLI's `invoke` command) call operations through
//! [`PathEngine::invoke`]. Arity and argument types are checked before any
//! path processing; a violation yields [`Error::InvalidArgument`] naming the
//! operation and what it expected.

use serde_json::Value;

use crate::engine::PathEngine;
use crate::error::{Error, Result};
use crate::path::Operation;

/// Borrow every argument as a string, or fail with `expectation`.
fn all_strings<'a>(
    operation: Operation,
    args: &'a [Value],
    expectation: &str,
) -> Result<Vec<&'a str>> {
    args.iter()
        .map(|arg| {
            arg.as_str()
                .ok_or_else(|| Error::invalid_argument(operation, expectation))
        })
        .collect()
}

/// The single string argument of a one-path operation.
fn single_path(operation: Operation, args: &[Value]) -> Result<&str> {
    match args {
        [Value::String(path)] => Ok(path.as_str()),
        _ => Err(Error::invalid_argument(operation, Operation::ONE_PATH)),
    }
}

/// Arguments of a variadic operation: at least one, all strings.
fn path_list(operation: Operation, args: &[Value]) -> Result<Vec<&str>> {
    if args.is_empty() {
        return Err(Error::invalid_argument(
            operation,
            Operation::AT_LEAST_ONE_STRING,
        ));
    }
    all_strings(operation, args, Operation::NO_NON_STRING)
}

impl PathEngine {
    /// Invoke `operation` with dynamically typed arguments.
    ///
    /// Returns a string value for every operation except
    /// [`Operation::IsAbsolute`], which returns a boolean.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the arguments do not match the
    /// operation's arity or types, or the provider's error if `resolve` or
    /// `relative` needs an unavailable current directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathgram::{PathEngine, PathOptions};
    /// use pathgram::path::{Operation, PlatformStyle};
    /// use serde_json::json;
    ///
    /// let engine = PathEngine::new(PathOptions::new(PlatformStyle::Posix));
    ///
    /// let joined = engine.invoke(Operation::Join, &[json!("/foo"), json!("bar")]).unwrap();
    /// assert_eq!(joined, json!("/foo/bar"));
    ///
    /// let absolute = engine.invoke(Operation::IsAbsolute, &[json!("qux/")]).unwrap();
    /// assert_eq!(absolute, json!(false));
    ///
    /// let err = engine.invoke(Operation::Normalize, &[json!(42)]).unwrap_err();
    /// assert_eq!(err.to_string(), "path.normalize requires 1 string parameter of file path");
    /// ```
    pub fn invoke(&self, operation: Operation, args: &[Value]) -> Result<Value> {
        log::debug!("invoking path.{operation} with {} argument(s)", args.len());

        let result = match operation {
            Operation::Normalize => Value::from(self.normalize(single_path(operation, args)?)),
            Operation::Dirname => Value::from(self.dirname(single_path(operation, args)?)),
            Operation::Extname => Value::from(self.extname(single_path(operation, args)?)),
            Operation::IsAbsolute => Value::from(self.is_absolute(single_path(operation, args)?)),
            Operation::Join => Value::from(self.join(&path_list(operation, args)?)?),
            Operation::Resolve => Value::from(self.resolve(&path_list(operation, args)?)?),
            Operation::Basename => {
                let (path, suffix) = basename_args(args)?;
                Value::from(self.basename(path, suffix))
            }
            Operation::Relative => match args {
                [Value::String(from), Value::String(to)] => Value::from(self.relative(from, to)?),
                _ => {
                    return Err(Error::invalid_argument(operation, Operation::TWO_STRINGS));
                }
            },
        };

        Ok(result)
    }

    /// Invoke an operation addressed by its exposed name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for an unknown name, otherwise as
    /// [`PathEngine::invoke`].
    pub fn invoke_named(&self, name: &str, args: &[Value]) -> Result<Value> {
        let operation: Operation = name.parse().map_err(|message| Error::Validation {
            field: "operation".to_string(),
            message,
        })?;
        self.invoke(operation, args)
    }
}

fn basename_args(args: &[Value]) -> Result<(&str, Option<&str>)> {
    let op = Operation::Basename;
    if args.is_empty() || args.len() > 2 {
        return Err(Error::invalid_argument(op, Operation::BASENAME_ARITY));
    }

    let path = args[0]
        .as_str()
        .ok_or_else(|| Error::invalid_argument(op, Operation::BASENAME_PATH))?;

    let suffix = match args.get(1) {
        Some(suffix) => Some(
            suffix
                .as_str()
                .ok_or_else(|| Error::invalid_argument(op, Operation::BASENAME_SUFFIX))?,
        ),
        None => None,
    };

    Ok((path, suffix))
}
