//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `normalize`: Print the canonical form of a path
//! - `resolve`: Resolve paths into an absolute path
//! - `join`: Join path fragments
//! - `dirname`: Print the parent directory
//! - `basename`: Print the final segment, optionally without a suffix
//! - `extname`: Print the extension
//! - `is_absolute`: Check whether a path is absolute
//! - `relative`: Print the route from one path to another
//! - `sep`: Print the separator of the configured style
//! - `invoke`: Invoke an operation with JSON arguments
//! - `completions`: Generate shell completion scripts

pub mod basename;
pub mod completions;
pub mod dirname;
pub mod extname;
pub mod invoke;
pub mod is_absolute;
pub mod join;
pub mod normalize;
pub mod relative;
pub mod resolve;
pub mod sep;

pub use basename::BasenameCommand;
pub use completions::CompletionsCommand;
pub use dirname::DirnameCommand;
pub use extname::ExtnameCommand;
pub use invoke::InvokeCommand;
pub use is_absolute::IsAbsoluteCommand;
pub use join::JoinCommand;
pub use normalize::NormalizeCommand;
pub use relative::RelativeCommand;
pub use resolve::ResolveCommand;
pub use sep::SepCommand;
