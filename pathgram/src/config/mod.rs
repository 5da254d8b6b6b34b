//! Configuration system for pathgram.
//!
//! This module provides layered configuration of the path engine with
//! support for:
//! - YAML configuration files (user config and an explicit file)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHGRAM_STYLE`, `PATHGRAM_CWD`)
//! 3. Explicit configuration file (via `ConfigBuilder::with_config_file`)
//! 4. User config (`~/.pathgram/config.yaml`)
//! 5. Built-in defaults (host style, process working directory)
//!
//! # Examples
//!
//! ```
//! use pathgram::config::{Config, ConfigBuilder};
//! use pathgram::path::PlatformStyle;
//! use pathgram::PathEngine;
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         style: Some(PlatformStyle::Posix),
//!         cwd: Some("/home/me".to_string()),
//!     })
//!     .build()
//!     .unwrap();
//!
//! let engine = PathEngine::new(config.into_options());
//! assert_eq!(engine.resolve(&["notes.txt"]).unwrap(), "/home/me/notes.txt");
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
