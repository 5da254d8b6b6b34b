//! Common test utilities for integration tests.
//!
//! This module provides engine fixtures for testing the pathgram library.

use pathgram::path::{FixedCurrentDirectory, PlatformStyle};
use pathgram::{PathEngine, PathOptions};

/// Working directory used by the POSIX fixture engine.
pub const POSIX_CWD: &str = "/home/user/project";

/// Working directory used by the Windows fixture engine.
pub const WINDOWS_CWD: &str = "C:\\Users\\me\\project";

/// A POSIX engine anchored at [`POSIX_CWD`].
#[allow(dead_code)]
pub fn posix_engine() -> PathEngine {
    engine(PlatformStyle::Posix, POSIX_CWD)
}

/// A Windows engine anchored at [`WINDOWS_CWD`].
#[allow(dead_code)]
pub fn windows_engine() -> PathEngine {
    engine(PlatformStyle::Windows, WINDOWS_CWD)
}

/// An engine for `style` anchored at `cwd`.
pub fn engine(style: PlatformStyle, cwd: &str) -> PathEngine {
    PathEngine::new(PathOptions::new(style).with_current_dir(FixedCurrentDirectory::new(cwd)))
}

/// Creates a temporary directory for testing.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_temp_dir() -> std::io::Result<tempfile::TempDir> {
    tempfile::tempdir()
}
