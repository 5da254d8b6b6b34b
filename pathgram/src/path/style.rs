//! Path grammar selection.
//!
//! The engine understands two grammars. Which one applies is a runtime
//! configuration value so both can be exercised on any host.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The path grammar used for parsing and serialization.
///
/// # Examples
///
/// ```
/// use pathgram::path::PlatformStyle;
///
/// assert_eq!(PlatformStyle::Posix.separator(), '/');
/// assert_eq!(PlatformStyle::Windows.separator(), '\\');
/// assert_eq!("windows".parse::<PlatformStyle>().unwrap(), PlatformStyle::Windows);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformStyle {
    /// Forward-slash paths rooted at `/`.
    Posix,
    /// Drive-letter, UNC and backslash paths.
    Windows,
}

impl PlatformStyle {
    /// The style matching the host the library was compiled for.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// The preferred separator used when serializing paths.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Windows => '\\',
        }
    }

    /// Whether `c` separates segments.
    ///
    /// Both `/` and `\` are accepted in every style so mixed-separator input
    /// from cross-platform callers parses the same way.
    #[must_use]
    pub const fn is_separator(c: char) -> bool {
        c == '/' || c == '\\'
    }
}

impl Default for PlatformStyle {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for PlatformStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

impl FromStr for PlatformStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "posix" => Ok(Self::Posix),
            "windows" => Ok(Self::Windows),
            _ => Err(format!("invalid platform style: {s}")),
        }
    }
}
