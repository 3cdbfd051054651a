// src/rules/rule.rs

//! A single ignore rule: one line of an ignore file, bound to its
//! compiled pattern and the flags derived from its markers.

use crate::errors::PatternError;
use crate::fnmatch::{Matcher, PathMatch};

/// One parsed ignore rule.
///
/// Flags are derived once, at construction:
/// - leading `!` negates the rule (stripped before compiling),
/// - trailing `/` makes it directory-only (stripped before compiling),
/// - a leading `/`, or any internal non-trailing `/`, anchors the rule
///   to its scope root; otherwise it matches by name at any depth.
///
/// A rule is immutable after construction and safe to query from many
/// threads at once.
#[derive(Debug, Clone)]
pub struct IgnoreRule {
    /// The rule text minus a leading `!`, as written in its source.
    pattern: String,
    matcher: Matcher,
    negated: bool,
    dir_only: bool,
    name_only: bool,
}

impl IgnoreRule {
    /// Parse one (already trimmed, non-blank, non-comment) rule line.
    pub fn new(line: &str) -> Result<IgnoreRule, PatternError> {
        let (negated, rest) = match line.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, line),
        };
        let pattern = rest.to_string();

        let (dir_only, body) = match rest.strip_suffix('/') {
            Some(body) => (true, body),
            None => (false, rest),
        };

        let (name_only, body) = match body.strip_prefix('/') {
            Some(body) => (false, body),
            None => (!body.contains('/'), body),
        };

        if body.is_empty() {
            return Err(PatternError::EmptyPattern {
                line: line.to_string(),
            });
        }

        // Report compile failures against the full rule pattern, not
        // the marker-stripped text the matcher actually sees.
        let matcher = Matcher::compile(body).map_err(|err| match err {
            PatternError::UnknownCharacterClass { class, .. } => {
                PatternError::UnknownCharacterClass {
                    class,
                    pattern: pattern.clone(),
                }
            }
            other => other,
        })?;

        Ok(IgnoreRule {
            pattern,
            matcher,
            negated,
            dir_only,
            name_only,
        })
    }

    /// The rule text as written, minus a leading `!`.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether a match means "not ignored" rather than "ignored".
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Whether the rule only takes effect for directories.
    pub fn is_dir_only(&self) -> bool {
        self.dir_only
    }

    /// Whether the rule matches a single name at any depth, as opposed
    /// to being anchored at its scope root.
    pub fn is_name_only(&self) -> bool {
        self.name_only
    }

    /// Whether this rule matches `path` (relative to the rule's scope).
    ///
    /// Callers must supply `is_directory`; a trailing `/` on the raw
    /// target should have been turned into `is_directory = true` before
    /// the call. Leading and trailing separators on `path` are ignored.
    pub fn is_match(&self, path: &str, is_directory: bool) -> bool {
        let path = path.strip_prefix('/').unwrap_or(path);
        let path = path.trim_end_matches('/');

        if self.name_only {
            let segments: Vec<&str> = path.split('/').collect();
            let last = segments.len() - 1;
            for (i, segment) in segments.iter().enumerate() {
                if !self.matcher.matches(segment) {
                    continue;
                }
                // An interior segment is necessarily a directory, so
                // dir-only is only a constraint on the final segment.
                if i < last || !self.dir_only || is_directory {
                    return true;
                }
            }
            false
        } else {
            match self.matcher.match_prefix(path) {
                PathMatch::EntirePath => !self.dir_only || is_directory,
                // An ignored ancestor directory ignores everything
                // beneath it, whatever this rule's own dir-only flag.
                PathMatch::LeadingDirectory => true,
                PathMatch::None => false,
            }
        }
    }
}
