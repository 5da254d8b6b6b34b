//! Computing the route between two paths.
//!
//! Both ends are resolved first, so relative inputs are anchored to the
//! current directory. Paths on different roots have no relative route;
//! the resolved destination is returned instead.

use crate::error::Result;
use crate::path::resolver::{resolve_with, CurrentDirSnapshot, CurrentDirectory};
use crate::path::style::PlatformStyle;
use crate::path::types::ParsedPath;

/// Build the relative route between two resolved paths.
///
/// Returns `None` when the roots differ.
fn route(from: &ParsedPath, to: &ParsedPath, style: PlatformStyle) -> Option<String> {
    let (Some(from_root), Some(to_root)) = (from.root(), to.root()) else {
        return None;
    };
    if from_root != to_root {
        return None;
    }

    let common = from
        .segments()
        .iter()
        .zip(to.segments())
        .take_while(|(a, b)| a == b)
        .count();

    let ups = from.segments().len() - common;
    let mut segments: Vec<String> = std::iter::repeat("..".to_string()).take(ups).collect();
    segments.extend(to.segments()[common..].iter().cloned());

    Some(ParsedPath::new(None, segments, false).render(style))
}

/// The relative path leading from `from` to `to`.
///
/// Identical locations yield `.`. Roots and segments compare exactly under
/// both styles, so `C:\` and `c:\` are different roots.
///
/// # Errors
///
/// Returns the provider's error if either path is relative and the current
/// directory is unavailable.
///
/// # Examples
///
/// ```
/// use pathgram::path::relative::relative;
/// use pathgram::path::{FixedCurrentDirectory, PlatformStyle};
///
/// let cwd = FixedCurrentDirectory::new("/");
/// assert_eq!(relative("/foo/bar", "/foo/bar", PlatformStyle::Posix, &cwd).unwrap(), ".");
/// assert_eq!(relative("/data/a/b", "/data/c", PlatformStyle::Posix, &cwd).unwrap(), "../../c");
///
/// let windows = PlatformStyle::Windows;
/// assert_eq!(relative("c:/foo\\bar", "c:/foo/abc.txt", windows, &cwd).unwrap(), "..\\abc.txt");
/// assert_eq!(relative("c:\\foo", "d:\\bar", windows, &cwd).unwrap(), "d:\\bar");
/// ```
pub fn relative(
    from: &str,
    to: &str,
    style: PlatformStyle,
    cwd: &dyn CurrentDirectory,
) -> Result<String> {
    let mut snapshot = CurrentDirSnapshot::new(cwd);
    let from = resolve_with(&[from], style, &mut snapshot)?;
    let to = resolve_with(&[to], style, &mut snapshot)?;

    match route(&from, &to, style) {
        Some(route) => Ok(route),
        None => {
            log::debug!(
                "no relative route between roots {:?} and {:?}",
                from.root(),
                to.root()
            );
            Ok(to.render(style))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::resolver::{FixedCurrentDirectory, MockCurrentDirectory};

    const POSIX: PlatformStyle = PlatformStyle::Posix;
    const WINDOWS: PlatformStyle = PlatformStyle::Windows;

    fn root_cwd() -> FixedCurrentDirectory {
        FixedCurrentDirectory::new("/")
    }

    #[test]
    fn test_relative_identical() {
        assert_eq!(relative("/foo/bar", "/foo/bar", POSIX, &root_cwd()).unwrap(), ".");
        assert_eq!(relative("/foo/bar/", "/foo/./bar", POSIX, &root_cwd()).unwrap(), ".");
    }

    #[test]
    fn test_relative_descendant_and_ancestor() {
        assert_eq!(relative("/a", "/a/b/c", POSIX, &root_cwd()).unwrap(), "b/c");
        assert_eq!(relative("/a/b/c", "/a", POSIX, &root_cwd()).unwrap(), "../..");
    }

    #[test]
    fn test_relative_sibling() {
        assert_eq!(
            relative("/data/orandea/test/aaa", "/data/orandea/impl/bbb", POSIX, &root_cwd())
                .unwrap(),
            "../../impl/bbb"
        );
    }

    #[test]
    fn test_relative_partial_name_is_not_common() {
        assert_eq!(relative("/foo/bar", "/foo/barbaz", POSIX, &root_cwd()).unwrap(), "../barbaz");
    }

    #[test]
    fn test_relative_to_root() {
        assert_eq!(relative("c:\\foo", "c:/", WINDOWS, &root_cwd()).unwrap(), "..");
        assert_eq!(relative("/", "/x", POSIX, &root_cwd()).unwrap(), "x");
    }

    #[test]
    fn test_relative_windows_examples() {
        let cwd = root_cwd();
        assert_eq!(
            relative("c:/foo\\bar", "c:/foo/abc.txt", WINDOWS, &cwd).unwrap(),
            "..\\abc.txt"
        );
        assert_eq!(relative("c:/foo\\../bar", "c:/bar", WINDOWS, &cwd).unwrap(), ".");
    }

    #[test]
    fn test_relative_drive_mismatch() {
        assert_eq!(
            relative("c:\\foo", "d:\\bar", WINDOWS, &root_cwd()).unwrap(),
            "d:\\bar"
        );
    }

    #[test]
    fn test_relative_windows_compares_exactly() {
        let cwd = root_cwd();
        assert_eq!(
            relative("C:\\Users\\Me", "c:\\users\\me\\Docs", WINDOWS, &cwd).unwrap(),
            "c:\\users\\me\\Docs"
        );
        assert_eq!(
            relative("c:\\Users\\Me", "c:\\users\\me", WINDOWS, &cwd).unwrap(),
            "..\\..\\users\\me"
        );
    }

    #[test]
    fn test_relative_posix_case_sensitive() {
        assert_eq!(relative("/A", "/a", POSIX, &root_cwd()).unwrap(), "../a");
    }

    #[test]
    fn test_relative_reads_cwd_once_for_both_paths() {
        let mut cwd = MockCurrentDirectory::new();
        cwd.expect_current_dir()
            .times(1)
            .returning(|| Ok("/home/me".to_string()));
        assert_eq!(relative("src", "docs/api", POSIX, &cwd).unwrap(), "../docs/api");
    }

    #[test]
    fn test_relative_absolute_paths_skip_cwd() {
        let mut cwd = MockCurrentDirectory::new();
        cwd.expect_current_dir().times(0);
        assert_eq!(relative("/x/y", "/x/z", POSIX, &cwd).unwrap(), "../z");
    }

    #[test]
    fn test_relative_unc_share_mismatch() {
        assert_eq!(
            relative("\\\\h\\one\\a", "\\\\h\\two\\b", WINDOWS, &root_cwd()).unwrap(),
            "\\\\h\\two\\b"
        );
    }
}
