//! Joining path fragments.

use crate::error::{Error, Result};
use crate::path::normalize::normalize;
use crate::path::operation::Operation;
use crate::path::style::PlatformStyle;

/// Concatenate fragments with one separator between each, without
/// normalizing.
///
/// Empty fragments are skipped. The first non-empty fragment is kept
/// verbatim so its root survives; later fragments lose their leading
/// separators so they can never re-root the result.
pub(crate) fn concat<S: AsRef<str>>(parts: &[S], style: PlatformStyle) -> String {
    let mut raw = String::new();

    for part in parts.iter().map(AsRef::as_ref).filter(|p| !p.is_empty()) {
        if raw.is_empty() {
            raw.push_str(part);
            continue;
        }
        let part = part.trim_start_matches(PlatformStyle::is_separator);
        if !raw.ends_with(PlatformStyle::is_separator) {
            raw.push(style.separator());
        }
        raw.push_str(part);
    }

    raw
}

/// Join path fragments into one normalized path.
///
/// Join never consults the current directory: relative fragments stay
/// relative.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `parts` is empty.
///
/// # Examples
///
/// ```
/// use pathgram::path::join::join;
/// use pathgram::path::PlatformStyle;
///
/// let joined = join(&["/foo", "bar", "baz/asdf", "quux", ".."], PlatformStyle::Posix).unwrap();
/// assert_eq!(joined, "/foo/bar/baz/asdf");
///
/// let relative = join(&["a", "b/"], PlatformStyle::Windows).unwrap();
/// assert_eq!(relative, "a\\b");
///
/// assert!(join::<&str>(&[], PlatformStyle::Posix).is_err());
/// ```
pub fn join<S: AsRef<str>>(parts: &[S], style: PlatformStyle) -> Result<String> {
    if parts.is_empty() {
        return Err(Error::invalid_argument(
            Operation::Join,
            Operation::AT_LEAST_ONE_STRING,
        ));
    }

    Ok(normalize(&concat(parts, style), style))
}
