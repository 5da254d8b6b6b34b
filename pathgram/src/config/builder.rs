//! Layered configuration builder.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Precedence of environment overrides.
const ENV_PRECEDENCE: u8 = 3;

/// Precedence of programmatic overrides.
const OVERRIDE_PRECEDENCE: u8 = 4;

/// Builds a [`Config`] from files, environment and programmatic overrides.
///
/// # Examples
///
/// ```
/// use pathgram::config::{Config, ConfigBuilder};
/// use pathgram::path::PlatformStyle;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         style: Some(PlatformStyle::Windows),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.style, Some(PlatformStyle::Windows));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads the user file and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also read `path`, above the user configuration.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not read `PATHGRAM_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Load, merge and validate every configured source.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// value is invalid, or the merged configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let mut sources = Vec::new();

        if !self.skip_files {
            if let Some(user) = ConfigLoader::load_user_config()? {
                sources.push(user);
            }
            if let Some(path) = &self.config_file {
                sources.push(ConfigLoader::load_explicit(path)?);
            }
        }

        if !self.skip_env {
            let mut env_config = Config::default();
            EnvironmentConfig::apply_overrides(&mut env_config)?;
            sources.push(ConfigSource {
                path: PathBuf::from("<environment>"),
                precedence: ENV_PRECEDENCE,
                config: env_config,
            });
        }

        if let Some(config) = self.overrides {
            sources.push(ConfigSource {
                path: PathBuf::from("<override>"),
                precedence: OVERRIDE_PRECEDENCE,
                config,
            });
        }

        let config = ConfigMerger::merge(sources);
        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &Config) -> Result<()> {
        if config.cwd.as_deref().is_some_and(|cwd| cwd.trim().is_empty()) {
            return Err(Error::Validation {
                field: "cwd".into(),
                message: "Must not be empty".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::{CWD_ENV, STYLE_ENV};
    use crate::path::PlatformStyle;
    use serial_test::serial;
    use std::{env, fs};
    use tempfile::TempDir;

    #[test]
    fn test_build_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_override_beats_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pathgram.yaml");
        fs::write(&path, "style: posix\ncwd: /from-file\n").unwrap();

        let config = ConfigBuilder::new()
            .skip_env()
            .with_config_file(&path)
            .with_config(Config {
                style: Some(PlatformStyle::Windows),
                cwd: None,
            })
            .build()
            .unwrap();

        assert_eq!(config.style, Some(PlatformStyle::Windows));
        assert_eq!(config.cwd.as_deref(), Some("/from-file"));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let result = ConfigBuilder::new()
            .skip_env()
            .with_config_file(Path::new("/nonexistent/pathgram.yaml"))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_cwd_rejected() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                style: None,
                cwd: Some("  ".to_string()),
            })
            .build();
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    #[serial]
    fn test_env_beats_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pathgram.yaml");
        fs::write(&path, "style: posix\n").unwrap();

        let saved_style = env::var(STYLE_ENV).ok();
        let saved_cwd = env::var(CWD_ENV).ok();
        env::set_var(STYLE_ENV, "windows");
        env::remove_var(CWD_ENV);

        let config = ConfigBuilder::new().with_config_file(&path).build();

        match saved_style {
            Some(v) => env::set_var(STYLE_ENV, v),
            None => env::remove_var(STYLE_ENV),
        }
        if let Some(v) = saved_cwd {
            env::set_var(CWD_ENV, v);
        }

        assert_eq!(config.unwrap().style, Some(PlatformStyle::Windows));
    }
}
