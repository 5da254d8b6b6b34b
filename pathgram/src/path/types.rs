//! Core types for path handling.

use crate::path::parse::starts_with_drive;
use crate::path::style::PlatformStyle;

/// A path string broken into its root prefix and segments.
///
/// A `ParsedPath` is produced by [`parse`](crate::path::parse::parse) and
/// never mutated; normalization and resolution build new values. The
/// separator used to print it is chosen at render time.
///
/// # Examples
///
/// ```
/// use pathgram::path::{parse, PlatformStyle};
///
/// let parsed = parse("/usr/local/", PlatformStyle::Posix);
/// assert_eq!(parsed.root(), Some("/"));
/// assert_eq!(parsed.segments(), ["usr", "local"]);
/// assert!(parsed.is_absolute());
/// assert!(parsed.has_trailing_separator());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedPath {
    root: Option<String>,
    segments: Vec<String>,
    trailing_separator: bool,
}

impl ParsedPath {
    /// Create a parsed path from its parts.
    ///
    /// An empty `root` is treated as absent so the "root is never empty"
    /// invariant holds for every value.
    #[must_use]
    pub fn new(root: Option<String>, segments: Vec<String>, trailing_separator: bool) -> Self {
        Self {
            root: root.filter(|r| !r.is_empty()),
            segments,
            trailing_separator,
        }
    }

    /// The root prefix (`/`, `\`, `C:\` or `\\host\share\`), if any.
    #[must_use]
    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// The segments between separators, left to right.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The final segment, if there is one.
    #[must_use]
    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Whether the path carries a root prefix.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.root.is_some()
    }

    /// Whether the raw input ended with a separator.
    #[must_use]
    pub fn has_trailing_separator(&self) -> bool {
        self.trailing_separator
    }

    /// A copy of this path with different segments, keeping the root.
    #[must_use]
    pub fn with_segments(&self, segments: Vec<String>) -> Self {
        Self {
            root: self.root.clone(),
            segments,
            trailing_separator: false,
        }
    }

    /// Serialize the path using `style`'s separator.
    ///
    /// The root is written verbatim. A relative path with no segments
    /// renders as `.`, and a Windows relative path whose first segment looks
    /// like a drive is written as `.\c:...` so it reads back as relative.
    /// The trailing separator flag is not rendered.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathgram::path::{ParsedPath, PlatformStyle};
    ///
    /// let path = ParsedPath::new(Some("C:\\".into()), vec!["foo".into(), "bar".into()], false);
    /// assert_eq!(path.render(PlatformStyle::Windows), "C:\\foo\\bar");
    ///
    /// let empty = ParsedPath::new(None, Vec::new(), false);
    /// assert_eq!(empty.render(PlatformStyle::Posix), ".");
    /// ```
    #[must_use]
    pub fn render(&self, style: PlatformStyle) -> String {
        let separator = style.separator();
        let mut out = String::new();

        match &self.root {
            Some(root) => out.push_str(root),
            None => {
                let Some(first) = self.segments.first() else {
                    return ".".to_string();
                };
                if style == PlatformStyle::Windows && starts_with_drive(first) {
                    out.push('.');
                    out.push(separator);
                }
            }
        }

        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push(separator);
            }
            out.push_str(segment);
        }

        out
    }
}
