#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathgram
//!
//! A cross-platform path-string engine.
//!
//! This library parses, normalizes, joins, resolves and decomposes path
//! strings under either the POSIX or the Windows grammar, chosen at runtime
//! rather than by the host platform. It never touches the filesystem; the
//! only ambient input is the current working directory, read through a
//! [`CurrentDirectory`](path::CurrentDirectory) provider.
//!
//! ## Core Types
//!
//! - [`PathEngine`] and [`PathOptions`]: Path operations bound to one grammar
//! - [`PlatformStyle`](path::PlatformStyle): The POSIX or Windows grammar
//! - [`Operation`](path::Operation): The operations exposed for dynamic invocation
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathgram::{PathEngine, PathOptions};
//! use pathgram::path::{FixedCurrentDirectory, PlatformStyle};
//!
//! let engine = PathEngine::new(
//!     PathOptions::new(PlatformStyle::Windows)
//!         .with_current_dir(FixedCurrentDirectory::new("C:\\work")),
//! );
//!
//! assert_eq!(engine.normalize("c:/foo\\..\\bar"), "c:\\bar");
//! assert_eq!(engine.resolve(&["src", "lib.rs"]).unwrap(), "C:\\work\\src\\lib.rs");
//! assert_eq!(engine.relative("c:\\foo", "d:\\bar").unwrap(), "d:\\bar");
//! ```

pub mod config;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use engine::{PathEngine, PathOptions};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{Operation, ParsedPath, PlatformStyle};
