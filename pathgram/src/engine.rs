//! The configured path engine.
//!
//! [`PathEngine`] binds the free functions in [`crate::path`] to one
//! [`PlatformStyle`] and one [`CurrentDirectory`] provider so callers do not
//! thread them through every call.

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::path::{
    decompose, join, normalize, relative, resolver, CurrentDirectory, PlatformStyle,
    ProcessCurrentDirectory,
};

/// Options for building a [`PathEngine`].
///
/// # Examples
///
/// ```
/// use pathgram::{PathEngine, PathOptions};
/// use pathgram::path::{FixedCurrentDirectory, PlatformStyle};
///
/// let options = PathOptions::new(PlatformStyle::Windows)
///     .with_current_dir(FixedCurrentDirectory::new("c:\\work"));
/// let engine = PathEngine::new(options);
/// assert_eq!(engine.resolve(&["src"]).unwrap(), "c:\\work\\src");
/// ```
#[derive(Clone)]
pub struct PathOptions {
    /// Grammar used to parse and print paths.
    pub style: PlatformStyle,
    /// Where relative paths are anchored by `resolve` and `relative`.
    pub current_dir: Arc<dyn CurrentDirectory + Send + Sync>,
}

impl PathOptions {
    /// Options for `style`, anchored to the process working directory.
    #[must_use]
    pub fn new(style: PlatformStyle) -> Self {
        Self {
            style,
            current_dir: Arc::new(ProcessCurrentDirectory),
        }
    }

    /// Replace the current-directory provider.
    #[must_use]
    pub fn with_current_dir(
        mut self,
        provider: impl CurrentDirectory + Send + Sync + 'static,
    ) -> Self {
        self.current_dir = Arc::new(provider);
        self
    }
}

impl Default for PathOptions {
    fn default() -> Self {
        Self::new(PlatformStyle::native())
    }
}

impl fmt::Debug for PathOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathOptions")
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

/// Path operations under one configured grammar.
///
/// The engine holds no mutable state and can be shared between threads.
///
/// # Examples
///
/// ```
/// use pathgram::{PathEngine, PathOptions};
/// use pathgram::path::PlatformStyle;
///
/// let engine = PathEngine::new(PathOptions::new(PlatformStyle::Posix));
///
/// assert_eq!(engine.normalize("a/./b/../c"), "a/c");
/// assert_eq!(engine.dirname("/foo/bar/baz/asdf/quux"), "/foo/bar/baz/asdf");
/// assert_eq!(engine.basename("/foo/bar/baz/asdf/quux.html", Some(".html")), "quux");
/// assert!(engine.is_absolute("/qux/"));
/// assert_eq!(engine.separator(), '/');
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathEngine {
    options: PathOptions,
}

impl PathEngine {
    /// Create an engine from `options`.
    #[must_use]
    pub fn new(options: PathOptions) -> Self {
        Self { options }
    }

    /// The grammar this engine uses.
    #[must_use]
    pub fn style(&self) -> PlatformStyle {
        self.options.style
    }

    /// The separator this engine writes.
    #[must_use]
    pub fn separator(&self) -> char {
        self.options.style.separator()
    }

    /// Canonicalize `path`.
    #[must_use]
    pub fn normalize(&self, path: &str) -> String {
        normalize::normalize(path, self.style())
    }

    /// Join `parts` into one normalized path.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error if `parts` is empty.
    pub fn join<S: AsRef<str>>(&self, parts: &[S]) -> Result<String> {
        join::join(parts, self.style())
    }

    /// Resolve `parts` into one absolute path.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error if `parts` is empty, or the
    /// provider's error if the current directory is needed but unavailable.
    pub fn resolve<S: AsRef<str>>(&self, parts: &[S]) -> Result<String> {
        resolver::resolve(parts, self.style(), self.options.current_dir.as_ref())
    }

    /// The parent directory of `path`.
    #[must_use]
    pub fn dirname(&self, path: &str) -> String {
        decompose::dirname(path, self.style())
    }

    /// The final segment of `path`, with `suffix` stripped literally.
    #[must_use]
    pub fn basename(&self, path: &str, suffix: Option<&str>) -> String {
        decompose::basename(path, suffix, self.style())
    }

    /// The extension of the final segment of `path`.
    #[must_use]
    pub fn extname(&self, path: &str) -> String {
        decompose::extname(path, self.style())
    }

    /// Whether `path` is absolute.
    #[must_use]
    pub fn is_absolute(&self, path: &str) -> bool {
        decompose::is_absolute(path, self.style())
    }

    /// The relative route from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if the current directory is needed but
    /// unavailable.
    pub fn relative(&self, from: &str, to: &str) -> Result<String> {
        relative::relative(from, to, self.style(), self.options.current_dir.as_ref())
    }
}
