// src/rules/stack.rs

//! The up-the-tree cascade over per-directory scopes.
//!
//! A tree walker consults the scope of an entry's own directory first;
//! if that scope answers [`MatchOutcome::CheckParent`] it moves to the
//! enclosing scope with the path re-based, up to the top-level scope
//! and finally a repository-wide exclude list. `IgnoreStack` packages
//! that contract so consumers don't each re-implement it.

use tracing::trace;

use crate::rules::node::{IgnoreNode, MatchOutcome};
use crate::rules::rule::IgnoreRule;

/// One directory scope: the rules of the ignore file living at `prefix`
/// (relative to the stack root; the root scope has an empty prefix).
#[derive(Debug, Clone)]
struct Scope {
    prefix: String,
    node: IgnoreNode,
}

impl Scope {
    /// Depth used for innermost-first ordering.
    fn depth(&self) -> usize {
        if self.prefix.is_empty() {
            0
        } else {
            self.prefix.split('/').count()
        }
    }

    /// Re-base `path` to be relative to this scope, or `None` if the
    /// scope does not contain it. A scope never governs the entry that
    /// names its own directory.
    fn rebase<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.prefix.is_empty() {
            return Some(path);
        }
        path.strip_prefix(&self.prefix)?.strip_prefix('/')
    }
}

/// An ordered set of directory scopes plus an optional repository-wide
/// exclude list, resolved innermost scope first.
///
/// Like the nodes it holds, a stack is read-only once assembled and
/// safe to share across traversal threads.
#[derive(Debug, Clone, Default)]
pub struct IgnoreStack {
    /// Scopes sorted deepest-first; ties keep insertion order.
    scopes: Vec<Scope>,
    /// Conceptually just another rule set, consulted after every scope.
    global: Option<IgnoreNode>,
}

impl IgnoreStack {
    pub fn new() -> IgnoreStack {
        IgnoreStack::default()
    }

    /// Add the scope for the directory `prefix` (relative to the stack
    /// root; `""` or `"."` for the root itself, trailing `/` ignored).
    pub fn push_scope(&mut self, prefix: impl Into<String>, node: IgnoreNode) {
        let mut prefix: String = prefix.into();
        while prefix.ends_with('/') {
            prefix.pop();
        }
        if prefix == "." {
            prefix.clear();
        }

        let scope = Scope { prefix, node };
        let pos = self
            .scopes
            .iter()
            .position(|existing| existing.depth() < scope.depth())
            .unwrap_or(self.scopes.len());
        self.scopes.insert(pos, scope);
    }

    /// Install the repository-wide exclude list.
    pub fn set_global(&mut self, node: IgnoreNode) {
        self.global = Some(node);
    }

    /// The rule that decides `path`, searching scopes innermost-first
    /// and the global exclude list last. Returns the deciding rule
    /// together with the prefix of the scope it came from (the global
    /// list reports the root prefix).
    pub fn matching_rule(&self, path: &str, is_directory: bool) -> Option<(&str, &IgnoreRule)> {
        let path = path.strip_prefix('/').unwrap_or(path);
        let path = path.trim_end_matches('/');

        for scope in &self.scopes {
            let Some(rel) = scope.rebase(path) else {
                continue;
            };
            if let Some(rule) = scope.node.matching_rule(rel, is_directory) {
                trace!(
                    path,
                    scope = %scope.prefix,
                    rule = %rule.pattern(),
                    "scope decided path"
                );
                return Some((scope.prefix.as_str(), rule));
            }
        }

        if let Some(global) = &self.global {
            if let Some(rule) = global.matching_rule(path, is_directory) {
                trace!(path, rule = %rule.pattern(), "global exclude decided path");
                return Some(("", rule));
            }
        }

        None
    }

    /// Whether `path` (relative to the stack root) is excluded. With no
    /// deciding rule anywhere in the cascade, the default is "not
    /// ignored".
    pub fn is_ignored(&self, path: &str, is_directory: bool) -> bool {
        self.matching_rule(path, is_directory)
            .is_some_and(|(_, rule)| !rule.is_negated())
    }

    /// Tri-state view of the cascade, for callers that stack this stack
    /// under scopes of their own.
    pub fn outcome(&self, path: &str, is_directory: bool) -> MatchOutcome {
        match self.matching_rule(path, is_directory) {
            Some((_, rule)) if rule.is_negated() => MatchOutcome::NotIgnored,
            Some(_) => MatchOutcome::Ignored,
            None => MatchOutcome::CheckParent,
        }
    }
}
