// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `treeignore`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "treeignore",
    version,
    about = "Check which paths an ignore-file cascade excludes.",
    long_about = None
)]
pub struct CliArgs {
    /// Ignore file to load; may be given multiple times.
    ///
    /// Each file's parent directory becomes the scope its rules anchor
    /// to, so `-f sub/.gitignore` contributes rules for the `sub/`
    /// subtree.
    #[arg(short = 'f', long = "ignore-file", value_name = "PATH")]
    pub ignore_file: Vec<PathBuf>,

    /// Extra exclude pattern with the lowest precedence; may be given
    /// multiple times. Consulted only when no ignore file decides.
    #[arg(short = 'e', long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Also report which rule decided each path.
    #[arg(short, long)]
    pub verbose: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TREEIGNORE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Paths to test, relative to the root scope. A trailing `/` marks
    /// the path as a directory.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
