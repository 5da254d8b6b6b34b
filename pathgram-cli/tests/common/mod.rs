//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - An isolated environment with its own HOME, so no user configuration
//!   leaks into a test
//! - Command builders preset to one path grammar

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that change pathgram's behavior.
const PATHGRAM_VARS: [&str; 4] = [
    "PATHGRAM_STYLE",
    "PATHGRAM_CWD",
    "PATHGRAM_CONFIG",
    "PATHGRAM_LOG_MODE",
];

/// Test environment with an isolated home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory, used as HOME
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a bare command builder with no style or cwd preset.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathgram").expect("Failed to find pathgram binary");
        cmd.env("HOME", &self.temp_path).env("USERPROFILE", &self.temp_path);
        for var in PATHGRAM_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// A command using the POSIX grammar, anchored at `/home/user`.
    pub fn posix(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.args(["--style", "posix", "--cwd", "/home/user"]);
        cmd
    }

    /// A command using the Windows grammar, anchored at `C:\Users\me`.
    pub fn windows(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.args(["--style", "windows", "--cwd", "C:\\Users\\me"]);
        cmd
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Write the user configuration file read from `~/.pathgram`.
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let dir = self.temp_path.join(".pathgram");
        fs::create_dir_all(&dir).expect("Failed to create config dir");
        let path = dir.join("config.yaml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Path of the temporary directory.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }
}
