//! Path normalization functions.
//!
//! Normalization produces the canonical form of a path by:
//! - Removing empty and `.` segments
//! - Resolving `..` against the preceding segment
//! - Clamping `..` at the root of absolute paths
//! - Writing every separator in the configured style

use crate::path::parse::parse;
use crate::path::style::PlatformStyle;
use crate::path::types::ParsedPath;

/// Resolve `.` and `..` segments.
///
/// A `..` with nothing left to pop is discarded for absolute paths and kept
/// for relative ones, which may legitimately walk above their origin. An
/// empty relative result becomes a single `.` segment.
///
/// # Examples
///
/// ```
/// use pathgram::path::normalize::collapse_segments;
/// use pathgram::path::{parse, PlatformStyle};
///
/// let absolute = collapse_segments(&parse("/a/../../b", PlatformStyle::Posix));
/// assert_eq!(absolute.segments(), ["b"]);
///
/// let relative = collapse_segments(&parse("a/../../b", PlatformStyle::Posix));
/// assert_eq!(relative.segments(), ["..", "b"]);
/// ```
#[must_use]
pub fn collapse_segments(path: &ParsedPath) -> ParsedPath {
    let mut stack: Vec<String> = Vec::with_capacity(path.segments().len());

    for segment in path.segments() {
        match segment.as_str() {
            "" | "." => {}
            ".." => {
                let can_pop = matches!(stack.last(), Some(last) if last != "..");
                if can_pop {
                    stack.pop();
                } else if !path.is_absolute() {
                    stack.push(segment.clone());
                }
                // Otherwise already at the root
            }
            _ => stack.push(segment.clone()),
        }
    }

    if stack.is_empty() && !path.is_absolute() {
        stack.push(".".to_string());
    }

    path.with_segments(stack)
}

/// Normalize a raw path string.
///
/// # Examples
///
/// ```
/// use pathgram::path::normalize::normalize;
/// use pathgram::path::PlatformStyle;
///
/// assert_eq!(normalize("a/./b/../c", PlatformStyle::Posix), "a/c");
/// assert_eq!(normalize("", PlatformStyle::Posix), ".");
/// assert_eq!(normalize("c:/foo\\bar/.././baz/.", PlatformStyle::Windows), "c:\\foo\\baz");
/// ```
#[must_use]
pub fn normalize(raw: &str, style: PlatformStyle) -> String {
    collapse_segments(&parse(raw, style)).render(style)
}
