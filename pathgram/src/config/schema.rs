//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::engine::PathOptions;
use crate::path::{FixedCurrentDirectory, PlatformStyle};

/// Complete configuration structure.
///
/// Every field is optional so that configurations from several sources can
/// be layered; unset fields fall back to defaults in [`Config::into_options`].
///
/// # Examples
///
/// ```
/// use pathgram::config::Config;
/// use pathgram::path::PlatformStyle;
///
/// let config: Config = serde_yaml::from_str("style: windows\ncwd: 'C:\\work'\n").unwrap();
/// assert_eq!(config.style, Some(PlatformStyle::Windows));
/// assert_eq!(config.cwd.as_deref(), Some("C:\\work"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path grammar (`posix` or `windows`).
    pub style: Option<PlatformStyle>,

    /// Directory relative paths are anchored to instead of the process
    /// working directory.
    pub cwd: Option<String>,
}

impl Config {
    /// Build engine options from this configuration.
    ///
    /// An unset style means the host platform's style; an unset `cwd` means
    /// the process working directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathgram::config::Config;
    /// use pathgram::path::PlatformStyle;
    /// use pathgram::PathEngine;
    ///
    /// let config = Config {
    ///     style: Some(PlatformStyle::Posix),
    ///     cwd: Some("/srv".to_string()),
    /// };
    /// let engine = PathEngine::new(config.into_options());
    /// assert_eq!(engine.resolve(&["app"]).unwrap(), "/srv/app");
    /// ```
    #[must_use]
    pub fn into_options(self) -> PathOptions {
        let options = PathOptions::new(self.style.unwrap_or_default());
        match self.cwd {
            Some(cwd) => options.with_current_dir(FixedCurrentDirectory::new(cwd)),
            None => options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::CurrentDirectory;

    #[test]
    fn test_empty_yaml_is_default() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("separator: '/'\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_style_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("style: dos\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_into_options_defaults_to_native_style() {
        let options = Config::default().into_options();
        assert_eq!(options.style, PlatformStyle::native());
    }

    #[test]
    fn test_into_options_uses_fixed_cwd() {
        let options = Config {
            style: Some(PlatformStyle::Windows),
            cwd: Some("d:\\build".to_string()),
        }
        .into_options();
        assert_eq!(options.style, PlatformStyle::Windows);
        assert_eq!(options.current_dir.current_dir().unwrap(), "d:\\build");
    }
}
