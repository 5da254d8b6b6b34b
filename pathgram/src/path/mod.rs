//! The path-semantics engine.
//!
//! This module parses, normalizes, joins, resolves and decomposes path
//! strings under either of two grammars, selected at runtime by
//! [`PlatformStyle`].
//!
//! # Key Concepts
//!
//! ## Parsing
//!
//! [`parse`] splits a raw string on both `/` and `\` into a [`ParsedPath`]:
//! an optional root prefix plus the segments between separators. Under
//! [`PlatformStyle::Windows`] the root may be a drive (`C:\`), a UNC share
//! (`\\host\share\`) or a bare `\`; under [`PlatformStyle::Posix`] it is
//! `/`. Parsing never fails.
//!
//! ## Normalization
//!
//! Normalization removes `.` and empty segments and resolves `..` against
//! the preceding segment. At the root of an absolute path `..` is dropped;
//! in a relative path it is kept.
//!
//! ## Anchoring
//!
//! [`resolve`](resolver::resolve) and [`relative`](relative::relative) turn
//! relative input into absolute paths using a [`CurrentDirectory`]
//! provider, consulted at most once per call and only when needed.
//!
//! # Examples
//!
//! ```
//! use pathgram::path::{decompose, join, normalize, PlatformStyle};
//!
//! let style = PlatformStyle::Posix;
//!
//! assert_eq!(normalize::normalize("/a/../../b", style), "/b");
//! assert_eq!(join::join(&["/foo", "bar", "..", "baz"], style).unwrap(), "/foo/baz");
//! assert_eq!(decompose::extname("index.coffee.md", style), ".md");
//! ```

pub mod decompose;
pub mod join;
pub mod normalize;
pub mod operation;
pub mod parse;
pub mod relative;
pub mod resolver;
mod style;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use operation::Operation;
pub use parse::parse;
pub use resolver::{CurrentDirectory, FixedCurrentDirectory, ProcessCurrentDirectory};
pub use style::PlatformStyle;
pub use types::ParsedPath;

/// The preferred separator of the host platform.
pub const SEPARATOR: char = std::path::MAIN_SEPARATOR;
