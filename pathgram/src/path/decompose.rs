//! Taking paths apart: parent directory, final segment and extension.
//!
//! None of these normalize first. They work on the parsed segments exactly
//! as written, so `dirname("a/./b")` is `a/.`.

use crate::path::parse::parse;
use crate::path::style::PlatformStyle;

/// The parent directory of `path`.
///
/// The last segment is dropped and the rest re-serialized with the root
/// kept. A path with at most one segment yields its root if absolute and
/// `.` otherwise.
///
/// # Examples
///
/// ```
/// use pathgram::path::decompose::dirname;
/// use pathgram::path::PlatformStyle;
///
/// assert_eq!(dirname("/foo/bar/baz/asdf/quux", PlatformStyle::Posix), "/foo/bar/baz/asdf");
/// assert_eq!(dirname("/foo", PlatformStyle::Posix), "/");
/// assert_eq!(dirname("foo", PlatformStyle::Posix), ".");
/// assert_eq!(
///     dirname("c:/foo\\bar\\baz/asdf\\quux", PlatformStyle::Windows),
///     "c:\\foo\\bar\\baz\\asdf"
/// );
/// ```
#[must_use]
pub fn dirname(path: &str, style: PlatformStyle) -> String {
    let parsed = parse(path, style);
    let keep = parsed.segments().len().saturating_sub(1);
    parsed
        .with_segments(parsed.segments()[..keep].to_vec())
        .render(style)
}

/// The final segment of `path`, optionally with `suffix` removed.
///
/// Suffix removal is a literal match against the end of the segment; it is
/// not aware of extensions, so any trailing substring is removed, and a
/// segment equal to `suffix` becomes empty.
///
/// # Examples
///
/// ```
/// use pathgram::path::decompose::basename;
/// use pathgram::path::PlatformStyle;
///
/// let style = PlatformStyle::Posix;
/// assert_eq!(basename("/foo/bar/baz/asdf/quux.html", None, style), "quux.html");
/// assert_eq!(basename("/foo/bar/baz/asdf/quux.html", Some(".html"), style), "quux");
/// assert_eq!(basename("/foo/bar/baz/asdf/quux.html", Some("x.html"), style), "qu");
/// assert_eq!(basename("/", None, style), "");
/// ```
#[must_use]
pub fn basename(path: &str, suffix: Option<&str>, style: PlatformStyle) -> String {
    let parsed = parse(path, style);
    let name = parsed.last_segment().unwrap_or_default();

    match suffix {
        Some(suffix) => name.strip_suffix(suffix).unwrap_or(name).to_string(),
        None => name.to_string(),
    }
}

/// The extension of the final segment of `path`, including its dot.
///
/// The extension starts at the last dot of the segment. A dot at the start
/// of the segment does not begin one, so `.gitignore` has none, and `..`
/// has none either. A trailing dot is an extension of its own.
///
/// # Examples
///
/// ```
/// use pathgram::path::decompose::extname;
/// use pathgram::path::PlatformStyle;
///
/// let style = PlatformStyle::Posix;
/// assert_eq!(extname("index.html", style), ".html");
/// assert_eq!(extname("index.coffee.md", style), ".md");
/// assert_eq!(extname("index.", style), ".");
/// assert_eq!(extname("index", style), "");
/// assert_eq!(extname(".gitignore", style), "");
/// ```
#[must_use]
pub fn extname(path: &str, style: PlatformStyle) -> String {
    let parsed = parse(path, style);
    let name = parsed.last_segment().unwrap_or_default();
    if name == ".." {
        return String::new();
    }

    match name.rfind('.') {
        Some(i) if i > 0 => name[i..].to_string(),
        _ => String::new(),
    }
}

/// Whether `path` is absolute under `style`.
///
/// Absoluteness depends only on the root prefix, so no normalization is
/// needed.
///
/// # Examples
///
/// ```
/// use pathgram::path::decompose::is_absolute;
/// use pathgram::path::PlatformStyle;
///
/// assert!(is_absolute("/qux/", PlatformStyle::Posix));
/// assert!(!is_absolute("qux/", PlatformStyle::Posix));
/// assert!(is_absolute("c:\\baz/..", PlatformStyle::Windows));
/// assert!(!is_absolute(".", PlatformStyle::Windows));
/// ```
#[must_use]
pub fn is_absolute(path: &str, style: PlatformStyle) -> bool {
    parse(path, style).is_absolute()
}
