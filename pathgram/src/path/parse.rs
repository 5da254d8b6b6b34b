//! Tokenizing raw path strings.
//!
//! Parsing never fails: any string, including the empty string, yields a
//! [`ParsedPath`]. Segments are split on both `/` and `\` whatever the style.

use crate::path::style::PlatformStyle;
use crate::path::types::ParsedPath;

/// Parse `raw` under the given grammar.
///
/// # Examples
///
/// ```
/// use pathgram::path::{parse, PlatformStyle};
///
/// let posix = parse("a/./b\\c", PlatformStyle::Posix);
/// assert_eq!(posix.segments(), ["a", ".", "b", "c"]);
/// assert!(!posix.is_absolute());
///
/// let drive = parse("c:/foo\\bar", PlatformStyle::Windows);
/// assert_eq!(drive.root(), Some("c:\\"));
/// assert_eq!(drive.segments(), ["foo", "bar"]);
///
/// let unc = parse("\\\\server\\share\\dir", PlatformStyle::Windows);
/// assert_eq!(unc.root(), Some("\\\\server\\share\\"));
/// assert_eq!(unc.segments(), ["dir"]);
/// ```
#[must_use]
pub fn parse(raw: &str, style: PlatformStyle) -> ParsedPath {
    let trailing = raw.ends_with(PlatformStyle::is_separator);

    let (root, rest) = match style {
        PlatformStyle::Posix => posix_root(raw),
        PlatformStyle::Windows => windows_root(raw),
    };

    let segments = split_segments(rest);
    ParsedPath::new(root, segments, trailing)
}

/// Split on either separator, dropping empty pieces.
fn split_segments(rest: &str) -> Vec<String> {
    rest.split(PlatformStyle::is_separator)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn posix_root(raw: &str) -> (Option<String>, &str) {
    if raw.starts_with(PlatformStyle::is_separator) {
        (Some("/".to_string()), raw)
    } else {
        (None, raw)
    }
}

fn windows_root(raw: &str) -> (Option<String>, &str) {
    if starts_with_drive(raw) {
        // `c:foo` is treated as rooted at the drive, same as `c:\foo`
        return (Some(format!("{}:\\", &raw[..1])), &raw[2..]);
    }

    if let Some(after) = strip_double_separator(raw) {
        if let Some(unc) = unc_root(after) {
            return unc;
        }
    }

    if raw.starts_with(PlatformStyle::is_separator) {
        return (Some("\\".to_string()), raw);
    }

    (None, raw)
}

/// Parse `host[\share]` following a leading `\\`.
fn unc_root(after: &str) -> Option<(Option<String>, &str)> {
    let (host, rest) = split_first_segment(after);
    if host.is_empty() {
        return None;
    }

    let rest = rest.trim_start_matches(PlatformStyle::is_separator);
    let (share, rest) = split_first_segment(rest);

    let root = if share.is_empty() {
        format!("\\\\{host}\\")
    } else {
        format!("\\\\{host}\\{share}\\")
    };
    Some((Some(root), rest))
}

fn split_first_segment(s: &str) -> (&str, &str) {
    match s.find(PlatformStyle::is_separator) {
        Some(i) => (&s[..i], &s[i..]),
        None => (s, ""),
    }
}

fn strip_double_separator(raw: &str) -> Option<&str> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(a), Some(b)) if PlatformStyle::is_separator(a) && PlatformStyle::is_separator(b) => {
            Some(&raw[2..])
        }
        _ => None,
    }
}

/// Whether `s` begins with an ASCII drive letter and a colon (`c:`).
pub(crate) fn starts_with_drive(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}
