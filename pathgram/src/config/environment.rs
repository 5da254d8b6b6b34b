//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PATHGRAM_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Selects the path grammar (`posix` or `windows`).
pub const STYLE_ENV: &str = "PATHGRAM_STYLE";

/// Overrides the directory relative paths are anchored to.
pub const CWD_ENV: &str = "PATHGRAM_CWD";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathgram::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Unset or empty variables leave the configuration untouched.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `PATHGRAM_STYLE` names an unknown style.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(style) = Self::non_empty(STYLE_ENV) {
            config.style = Some(style.parse().map_err(|_| Error::Validation {
                field: STYLE_ENV.into(),
                message: "Must be 'posix' or 'windows'".into(),
            })?);
        }

        if let Some(cwd) = Self::non_empty(CWD_ENV) {
            config.cwd = Some(cwd);
        }

        Ok(())
    }

    fn non_empty(name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.is_empty())
    }
}
