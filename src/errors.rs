// src/errors.rs

//! Error types for pattern compilation and rule-set parsing.
//!
//! The matching core is pure, so the only failure modes are bad pattern
//! text (at compile time) and, for the reader-based entry point, the
//! underlying reader failing. Both are structured enums so callers can
//! react to individual cases; the CLI layer wraps them in `anyhow`
//! context instead.

use thiserror::Error;

/// A pattern that cannot be compiled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A `[:name:]` token inside a character class that names no known
    /// POSIX class. Carries the token and the full pattern it came from.
    #[error("unknown character class `[:{class}:]` in pattern `{pattern}`")]
    UnknownCharacterClass { class: String, pattern: String },

    /// A rule line that is empty once `!`, leading `/` and trailing `/`
    /// markers are stripped (e.g. a line consisting of `/` alone).
    #[error("rule `{line}` has no pattern text after its markers")]
    EmptyPattern { line: String },
}

/// Failure while parsing a whole ignore scope from a reader.
///
/// One bad line fails the whole scope: an ignore file is never
/// silently partially honored.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The underlying reader failed.
    #[error("reading ignore data: {0}")]
    Io(#[from] std::io::Error),

    /// One of the lines failed to compile.
    #[error(transparent)]
    Pattern(#[from] PatternError),
}
