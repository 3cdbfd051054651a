// src/lib.rs

//! Path-exclusion engine with git ignore semantics.
//!
//! The core is pure and I/O-free:
//! - [`fnmatch`] compiles glob text into a non-backtracking matching
//!   automaton.
//! - [`rules`] builds single rules, per-scope rule sets, and the
//!   up-the-tree cascade on top of it.
//!
//! The binary around it is the "external collaborator" side: it opens
//! ignore files, assembles an [`rules::IgnoreStack`] and reports which
//! of the given paths the cascade excludes.

pub mod cli;
pub mod errors;
pub mod fnmatch;
pub mod logging;
pub mod rules;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::CliArgs;
use crate::rules::{IgnoreNode, IgnoreStack};

/// High-level entry point used by `main.rs`.
///
/// Loads every `--ignore-file` into a scope keyed by the file's parent
/// directory, installs `--exclude` patterns as the lowest-precedence
/// list, then evaluates each path argument against the cascade.
pub fn run(args: CliArgs) -> Result<()> {
    let mut stack = IgnoreStack::new();

    for path in &args.ignore_file {
        let node = load_ignore_file(path)?;
        let prefix = scope_prefix(path);
        debug!(
            file = %path.display(),
            prefix = %prefix,
            rules = node.len(),
            "loaded ignore scope"
        );
        stack.push_scope(prefix, node);
    }

    if !args.exclude.is_empty() {
        let node = IgnoreNode::from_lines(args.exclude.iter().map(String::as_str))
            .context("compiling --exclude patterns")?;
        stack.set_global(node);
    }

    for raw in &args.paths {
        // A trailing separator on the argument means "directory".
        let is_directory = raw.ends_with('/');
        let path = raw.trim_end_matches('/');

        if args.verbose {
            match stack.matching_rule(path, is_directory) {
                Some((prefix, rule)) if rule.is_negated() => {
                    println!(
                        "{raw}: not ignored (rule `!{}` in `{}`)",
                        rule.pattern(),
                        display_scope(prefix)
                    );
                }
                Some((prefix, rule)) => {
                    println!(
                        "{raw}: ignored (rule `{}` in `{}`)",
                        rule.pattern(),
                        display_scope(prefix)
                    );
                }
                None => println!("{raw}: not ignored"),
            }
        } else {
            let verdict = if stack.is_ignored(path, is_directory) {
                "ignored"
            } else {
                "not ignored"
            };
            println!("{raw}: {verdict}");
        }
    }

    Ok(())
}

/// Open and parse one ignore file. All file I/O of the tool lives here;
/// the rule core only ever sees the reader.
fn load_ignore_file(path: &Path) -> Result<IgnoreNode> {
    let file =
        File::open(path).with_context(|| format!("opening ignore file at {:?}", path))?;
    IgnoreNode::parse(BufReader::new(file))
        .with_context(|| format!("parsing ignore file at {:?}", path))
}

/// Scope prefix for an ignore file: its parent directory, with the
/// current directory normalising to the root scope.
fn scope_prefix(path: &Path) -> String {
    match path.parent() {
        Some(parent) if parent != Path::new("") && parent != Path::new(".") => {
            parent.to_string_lossy().into_owned()
        }
        _ => String::new(),
    }
}

/// Human-readable scope name for verbose output.
fn display_scope(prefix: &str) -> &str {
    if prefix.is_empty() { "." } else { prefix }
}
