//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::Result;

/// Name of the per-user configuration directory under the home directory.
pub const USER_CONFIG_DIR: &str = ".pathgram";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from YAML files.
///
/// # Examples
///
/// ```no_run
/// use pathgram::config::ConfigLoader;
/// use std::path::Path;
///
/// let config = ConfigLoader::load_file(Path::new("pathgram.yaml")).unwrap();
/// println!("style: {:?}", config.style);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the user configuration at `~/.pathgram/config.yaml`, if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user_config() -> Result<Option<ConfigSource>> {
        let Some(config_path) = Self::user_config_path() else {
            log::debug!("no home directory; skipping user configuration");
            return Ok(None);
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Load an explicitly named configuration file.
    ///
    /// Unlike the user configuration, a missing explicit file is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_explicit(path: &Path) -> Result<ConfigSource> {
        Ok(ConfigSource {
            path: path.to_path_buf(),
            precedence: 2,
            config: Self::load_file(path)?,
        })
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Location of the user configuration file.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_CONFIG_DIR).join("config.yaml"))
    }
}
