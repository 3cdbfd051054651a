// src/rules/node.rs

//! The per-scope rule set: every rule from one ignore file (or one
//! inline exclude list), in declaration order.

use std::io::BufRead;

use tracing::debug;

use crate::errors::{ParseError, PatternError};
use crate::rules::rule::IgnoreRule;

/// Outcome of consulting one scope for one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// A rule in this scope excludes the path.
    Ignored,
    /// A negated rule in this scope re-includes the path.
    NotIgnored,
    /// This scope is silent; ask the enclosing scope.
    CheckParent,
}

/// An ordered rule set from a single ignore scope.
///
/// Holds no per-call state: once built it is read-only and can be
/// queried repeatedly and concurrently.
#[derive(Debug, Clone, Default)]
pub struct IgnoreNode {
    rules: Vec<IgnoreRule>,
}

impl IgnoreNode {
    /// A node with no rules; always answers [`MatchOutcome::CheckParent`].
    pub fn empty() -> IgnoreNode {
        IgnoreNode { rules: Vec::new() }
    }

    /// Build a node from already-parsed rules, in declaration order.
    pub fn new(rules: Vec<IgnoreRule>) -> IgnoreNode {
        IgnoreNode { rules }
    }

    /// Parse ignore-file content from an open reader.
    ///
    /// Blank lines and lines starting with `#` are skipped; every other
    /// line is trimmed and compiled. A single bad line fails the whole
    /// parse, so an invalid ignore file is never partially honored.
    /// The reader stays the caller's responsibility: this crate never
    /// opens files itself.
    pub fn parse(reader: impl BufRead) -> Result<IgnoreNode, ParseError> {
        let mut rules = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if let Some(rule) = parse_line(&line)? {
                rules.push(rule);
            }
        }
        debug!(rules = rules.len(), "parsed ignore scope");
        Ok(IgnoreNode { rules })
    }

    /// Build a node from in-memory lines, e.g. an inline exclude list.
    pub fn from_lines<'a>(
        lines: impl IntoIterator<Item = &'a str>,
    ) -> Result<IgnoreNode, PatternError> {
        let mut rules = Vec::new();
        for line in lines {
            if let Some(rule) = parse_line(line)? {
                rules.push(rule);
            }
        }
        Ok(IgnoreNode { rules })
    }

    /// The rules of this scope, in declaration order.
    pub fn rules(&self) -> &[IgnoreRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The rule that decides `path` in this scope, if any.
    ///
    /// Rules are consulted in reverse declaration order: the last line
    /// of the file has the highest precedence, which is what lets later
    /// lines override or negate earlier ones.
    pub fn matching_rule(&self, path: &str, is_directory: bool) -> Option<&IgnoreRule> {
        self.rules
            .iter()
            .rev()
            .find(|rule| rule.is_match(path, is_directory))
    }

    /// Tri-state decision for `path` within this scope.
    pub fn is_ignored(&self, path: &str, is_directory: bool) -> MatchOutcome {
        match self.matching_rule(path, is_directory) {
            Some(rule) if rule.is_negated() => MatchOutcome::NotIgnored,
            Some(_) => MatchOutcome::Ignored,
            None => MatchOutcome::CheckParent,
        }
    }
}

/// Compile one raw line, or `None` for blanks and comments.
fn parse_line(line: &str) -> Result<Option<IgnoreRule>, PatternError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    IgnoreRule::new(trimmed).map(Some)
}
