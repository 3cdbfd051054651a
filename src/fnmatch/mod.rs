// src/fnmatch/mod.rs

//! Glob-style filename matching.
//!
//! This module is the pattern layer underneath ignore rules:
//! - Compiling glob text (`*`, `?`, `[...]`) into an immutable matcher
//!   (`automaton.rs`).
//! - Compiling bracket expressions into character predicates
//!   (`charclass.rs`).
//!
//! It knows nothing about rule flags (`!`, leading or trailing `/`);
//! callers hand it pattern text with those markers already stripped.
//! `*` and `?` match within a single path segment only: a star never
//! crosses `/`.

mod automaton;
mod charclass;

pub use automaton::PathMatch;

use crate::errors::PatternError;
use automaton::Automaton;

/// A compiled glob pattern.
///
/// Compilation is a pure function of the pattern text, and the result
/// is immutable: a `Matcher` can be queried repeatedly and from many
/// threads at once, since every match call keeps its state on the
/// caller's stack.
#[derive(Debug, Clone)]
pub struct Matcher {
    automaton: Automaton,
}

impl Matcher {
    /// Compile pattern text (already stripped of rule markers).
    pub fn compile(pattern: &str) -> Result<Matcher, PatternError> {
        Ok(Matcher {
            automaton: automaton::compile(pattern)?,
        })
    }

    /// Whether the pattern matches `text` in its entirety. Used for
    /// matching one path segment at a time.
    pub fn matches(&self, text: &str) -> bool {
        self.automaton.matches_whole(text)
    }

    /// Anchored match against the front of `path`: reports whether the
    /// pattern consumed the whole path, a leading directory of it, or
    /// nothing.
    pub fn match_prefix(&self, path: &str) -> PathMatch {
        self.automaton.match_prefix(path)
    }
}
