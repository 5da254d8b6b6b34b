//! Names of the exposed path operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the operations exposed at the call boundary.
///
/// Operations are addressed by their fixed names, which are also used in
/// argument error messages (`path.<name> ...`).
///
/// # Examples
///
/// ```
/// use pathgram::path::Operation;
///
/// let op: Operation = "isAbsolute".parse().unwrap();
/// assert_eq!(op, Operation::IsAbsolute);
/// assert_eq!(op.to_string(), "isAbsolute");
/// assert!("stat".parse::<Operation>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    /// Canonicalize one path.
    Normalize,
    /// Anchor a sequence of paths into one absolute path.
    Resolve,
    /// Concatenate a sequence of paths.
    Join,
    /// Parent directory of a path.
    Dirname,
    /// Last segment of a path, optionally without a suffix.
    Basename,
    /// Extension of the last segment.
    Extname,
    /// Whether a path is absolute.
    IsAbsolute,
    /// Route from one path to another.
    Relative,
}

impl Operation {
    /// Every operation, in the order they are documented.
    pub const ALL: [Self; 8] = [
        Self::Normalize,
        Self::Resolve,
        Self::Join,
        Self::Dirname,
        Self::Basename,
        Self::Extname,
        Self::IsAbsolute,
        Self::Relative,
    ];

    pub(crate) const ONE_PATH: &'static str = "requires 1 string parameter of file path";
    pub(crate) const AT_LEAST_ONE_STRING: &'static str = "requires at least one string parameter";
    pub(crate) const NO_NON_STRING: &'static str = "doesn't accept non-string argument";
    pub(crate) const BASENAME_ARITY: &'static str =
        "takes 1 required argument of file path and 1 optional argument of extension";
    pub(crate) const BASENAME_PATH: &'static str = "requires a string parameter of file path";
    pub(crate) const BASENAME_SUFFIX: &'static str =
        "requires a string as 2nd parameter of extension";
    pub(crate) const TWO_STRINGS: &'static str = "requires 2 arguments of string type";

    /// The fixed name the operation is exposed under.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normalize => "normalize",
            Self::Resolve => "resolve",
            Self::Join => "join",
            Self::Dirname => "dirname",
            Self::Basename => "basename",
            Self::Extname => "extname",
            Self::IsAbsolute => "isAbsolute",
            Self::Relative => "relative",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| format!("unknown path operation: {s}"))
    }
}
