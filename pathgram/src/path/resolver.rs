//! Anchoring paths to an absolute location.
//!
//! This module provides the [`CurrentDirectory`] seam through which the
//! engine learns the working directory, and the `resolve` operation built on
//! top of it.

use std::env;

use crate::error::{Error, Result};
use crate::path::join::concat;
use crate::path::normalize::collapse_segments;
use crate::path::operation::Operation;
use crate::path::parse::parse;
use crate::path::style::PlatformStyle;
use crate::path::types::ParsedPath;

/// Supplies the directory relative paths are anchored to.
///
/// # Examples
///
/// ```
/// use pathgram::path::{CurrentDirectory, FixedCurrentDirectory};
///
/// let cwd = FixedCurrentDirectory::new("/home/me");
/// assert_eq!(cwd.current_dir().unwrap(), "/home/me");
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait CurrentDirectory {
    /// Report the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CurrentDirectory`] if the directory cannot be
    /// determined.
    fn current_dir(&self) -> Result<String>;
}

/// Reads the process working directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCurrentDirectory;

impl CurrentDirectory for ProcessCurrentDirectory {
    fn current_dir(&self) -> Result<String> {
        let cwd = env::current_dir().map_err(|e| Error::CurrentDirectory {
            reason: e.to_string(),
        })?;
        Ok(cwd.to_string_lossy().into_owned())
    }
}

/// Always reports the same directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedCurrentDirectory {
    dir: String,
}

impl FixedCurrentDirectory {
    /// Create a provider that always answers `dir`.
    #[must_use]
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: dir.into() }
    }
}

impl CurrentDirectory for FixedCurrentDirectory {
    fn current_dir(&self) -> Result<String> {
        Ok(self.dir.clone())
    }
}

/// A lazily taken, single reading of the current directory.
///
/// The provider is consulted at most once, so every path resolved through
/// one snapshot is anchored to the same directory.
pub(crate) struct CurrentDirSnapshot<'a> {
    provider: &'a dyn CurrentDirectory,
    base: Option<String>,
}

impl<'a> CurrentDirSnapshot<'a> {
    pub(crate) fn new(provider: &'a dyn CurrentDirectory) -> Self {
        Self {
            provider,
            base: None,
        }
    }

    /// The normalized, absolute current directory.
    fn base(&mut self, style: PlatformStyle) -> Result<&str> {
        let base = match self.base.take() {
            Some(base) => base,
            None => {
                let raw = self.provider.current_dir()?;
                log::debug!("resolving against current directory {raw}");

                let mut parsed = parse(&raw, style);
                if !parsed.is_absolute() {
                    log::warn!("current directory {raw:?} is not absolute; anchoring it at the root");
                    parsed = ParsedPath::new(
                        Some(style.separator().to_string()),
                        parsed.segments().to_vec(),
                        false,
                    );
                }
                collapse_segments(&parsed).render(style)
            }
        };
        Ok(self.base.insert(base).as_str())
    }
}

/// Resolve `parts` into a normalized absolute path, reading the current
/// directory through `snapshot` only if no part is absolute.
pub(crate) fn resolve_with<S: AsRef<str>>(
    parts: &[S],
    style: PlatformStyle,
    snapshot: &mut CurrentDirSnapshot<'_>,
) -> Result<ParsedPath> {
    let mut anchored: Vec<&str> = Vec::new();
    let mut is_absolute = false;

    // Right to left, stopping at the first absolute part
    for part in parts.iter().rev().map(AsRef::as_ref) {
        if part.is_empty() {
            continue;
        }
        anchored.push(part);
        if parse(part, style).is_absolute() {
            is_absolute = true;
            break;
        }
    }
    anchored.reverse();

    let mut raw = concat(&anchored, style);
    if !is_absolute {
        let base = snapshot.base(style)?;
        raw = concat(&[base, raw.as_str()], style);
    }

    Ok(collapse_segments(&parse(&raw, style)))
}

/// Resolve a sequence of paths into one absolute, normalized path.
///
/// Parts are processed right to left; an absolute part makes everything
/// before it irrelevant. If no part is absolute, the result is anchored to
/// the directory reported by `cwd`, which is read once.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `parts` is empty, or the provider's
/// error if the current directory is needed but unavailable.
///
/// # Examples
///
/// ```
/// use pathgram::path::resolver::resolve;
/// use pathgram::path::{FixedCurrentDirectory, PlatformStyle};
///
/// let cwd = FixedCurrentDirectory::new("c:\\home\\myself\\node");
/// let style = PlatformStyle::Windows;
///
/// assert_eq!(resolve(&["c:/foo\\bar", ".\\baz"], style, &cwd).unwrap(), "c:\\foo\\bar\\baz");
/// assert_eq!(resolve(&["c:\\foo/bar", "d:/tmp/file/"], style, &cwd).unwrap(), "d:\\tmp\\file");
/// assert_eq!(
///     resolve(&["wwwroot", "static_files/png/", "../gif/image.gif"], style, &cwd).unwrap(),
///     "c:\\home\\myself\\node\\wwwroot\\static_files\\gif\\image.gif"
/// );
/// ```
pub fn resolve<S: AsRef<str>>(
    parts: &[S],
    style: PlatformStyle,
    cwd: &dyn CurrentDirectory,
) -> Result<String> {
    if parts.is_empty() {
        return Err(Error::invalid_argument(
            Operation::Resolve,
            Operation::AT_LEAST_ONE_STRING,
        ));
    }

    let mut snapshot = CurrentDirSnapshot::new(cwd);
    Ok(resolve_with(parts, style, &mut snapshot)?.render(style))
}
