//! Build script for pathgram-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("pathgram")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse, normalize and resolve POSIX and Windows paths")
        .long_about(
            "Command-line tool for normalizing, joining, resolving and decomposing path \
             strings under the POSIX or Windows grammar, independent of the host platform",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("style")
                .long("style")
                .help("Path grammar to use: posix or windows")
                .value_name("STYLE")
                .global(true)
                .env("PATHGRAM_STYLE"),
        )
        .arg(
            Arg::new("cwd")
                .long("cwd")
                .help("Directory relative paths are anchored to")
                .value_name("DIR")
                .global(true)
                .env("PATHGRAM_CWD"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Additional configuration file")
                .value_name("FILE")
                .global(true)
                .env("PATHGRAM_CONFIG"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print results as JSON")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Print the canonical form of a path")
                .long_about("Collapse separators, `.` and `..` segments into the canonical form"),
            Command::new("resolve")
                .about("Resolve paths into one absolute path")
                .long_about(
                    "Resolve paths right to left into an absolute path, anchoring at the \
                     current directory when no path is absolute",
                ),
            Command::new("join")
                .about("Join path fragments into one normalized path")
                .long_about("Concatenate fragments with the style's separator and normalize"),
            Command::new("dirname")
                .about("Print the parent directory of a path")
                .long_about("Drop the final segment of a path, keeping its root"),
            Command::new("basename")
                .about("Print the final segment of a path")
                .long_about("Print the final segment, optionally stripping a literal suffix"),
            Command::new("extname")
                .about("Print the extension of a path")
                .long_about("Print the extension of the final segment, including the dot"),
            Command::new("is-absolute")
                .about("Check whether a path is absolute (exit 1 if not)")
                .long_about("Print true or false and exit with status 1 for relative paths"),
            Command::new("relative")
                .about("Print the relative path from one path to another")
                .long_about(
                    "Print the route between two paths; paths on different roots print \
                     the resolved destination",
                ),
            Command::new("sep")
                .about("Print the separator of the configured style")
                .long_about("Print / for the POSIX style and \\ for the Windows style"),
            Command::new("invoke")
                .about("Invoke an operation with a JSON array of arguments")
                .long_about(
                    "Call an operation by name with dynamically typed arguments, checking \
                     arity and types the way scripting bindings do",
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main pathgram.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathgram.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
