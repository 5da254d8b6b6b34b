//! Error types for the pathgram library.
//!
//! The path engine itself has a single failure mode, [`Error::InvalidArgument`],
//! raised when a call violates an operation's arity or argument types. The
//! remaining variants belong to the current-directory provider and to
//! configuration loading.

use thiserror::Error;

use crate::path::Operation;

/// Result type alias for operations that may fail with a pathgram error.
///
/// # Examples
///
/// ```
/// use pathgram::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/usr/local".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathgram library.
#[derive(Debug, Error)]
pub enum Error {
    /// An operation was called with the wrong number or type of arguments.
    #[error("path.{operation} {expectation}")]
    InvalidArgument {
        /// The operation that rejected its arguments.
        operation: Operation,
        /// What the operation expected.
        expectation: String,
    },

    /// The current working directory could not be determined.
    #[error("cannot determine current directory: {reason}")]
    CurrentDirectory {
        /// Why the provider failed.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Build an [`Error::InvalidArgument`] for `operation`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathgram::Error;
    /// use pathgram::path::Operation;
    ///
    /// let err = Error::invalid_argument(Operation::Join, "requires at least one string parameter");
    /// assert_eq!(err.to_string(), "path.join requires at least one string parameter");
    /// ```
    #[must_use]
    pub fn invalid_argument(operation: Operation, expectation: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            expectation: expectation.into(),
        }
    }

    /// Check if the error is an argument validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathgram::Error;
    /// use pathgram::path::Operation;
    ///
    /// let err = Error::invalid_argument(Operation::Resolve, "doesn't accept non-string argument");
    /// assert!(err.is_invalid_argument());
    /// ```
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let err = Error::invalid_argument(
            Operation::Normalize,
            "requires 1 string parameter of file path",
        );
        let display = format!("{err}");
        assert_eq!(
            display,
            "path.normalize requires 1 string parameter of file path"
        );
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_invalid_argument_names_camel_case_operation() {
        let err = Error::invalid_argument(
            Operation::IsAbsolute,
            "requires 1 string parameter of file path",
        );
        assert!(format!("{err}").starts_with("path.isAbsolute "));
    }

    #[test]
    fn test_current_directory_error() {
        let err = Error::CurrentDirectory {
            reason: "directory was removed".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("current directory"));
        assert!(display.contains("directory was removed"));
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "PATHGRAM_STYLE".to_string(),
            message: "must be 'posix' or 'windows'".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("PATHGRAM_STYLE"));
        assert!(display.contains("posix"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Err(Error::invalid_argument(Operation::Join, "test"))
        }

        assert!(returns_result().is_err());
    }
}
