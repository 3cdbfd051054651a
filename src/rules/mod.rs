// src/rules/mod.rs

//! Ignore rules, per-directory rule sets, and the cascade between them.
//!
//! - [`rule`] derives flags from one raw line (`!`, leading/trailing
//!   `/`) and implements the anchored vs. name-only match contract.
//! - [`node`] holds one scope's rules in declaration order and resolves
//!   them last-rule-wins into a tri-state outcome.
//! - [`stack`] cascades scopes from the innermost directory up to the
//!   root and a repository-wide exclude list.
//!
//! Nothing here performs I/O; the reader-based parser consumes a handle
//! the caller opened.

pub mod node;
pub mod rule;
pub mod stack;

pub use node::{IgnoreNode, MatchOutcome};
pub use rule::IgnoreRule;
pub use stack::IgnoreStack;
