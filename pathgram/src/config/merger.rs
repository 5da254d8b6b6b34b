//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathgram::config::{Config, ConfigMerger};
///
/// let low = Config { cwd: Some("/low".to_string()), ..Default::default() };
/// let high = Config { cwd: Some("/high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.cwd, Some("/high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources are sorted by precedence before merging, so higher
    /// precedence values win regardless of input order.
    #[must_use]
    pub fn merge(mut sources: Vec<ConfigSource>) -> Config {
        sources.sort_by_key(|s| s.precedence);

        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target if set).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.style.is_some() {
            target.style = source.style;
        }

        if source.cwd.is_some() {
            target.cwd.clone_from(&source.cwd);
        }
    }
}
