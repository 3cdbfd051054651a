use std::error::Error;

use treeignore::rules::{IgnoreNode, IgnoreStack, MatchOutcome};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn empty_cascade_defaults_to_not_ignored() {
    let stack = IgnoreStack::new();

    assert!(!stack.is_ignored("any/path", false));
    assert_eq!(stack.outcome("any/path", false), MatchOutcome::CheckParent);
}

#[test]
fn inner_scope_overrides_the_outer_one() -> TestResult {
    let mut stack = IgnoreStack::new();
    stack.push_scope("", IgnoreNode::from_lines(["*.o"])?);
    stack.push_scope("sub", IgnoreNode::from_lines(["!keep.o"])?);

    // The inner negation wins for its subtree.
    assert!(!stack.is_ignored("sub/keep.o", false));
    // The inner scope is silent here, so the root rule applies.
    assert!(stack.is_ignored("sub/other.o", false));
    assert!(stack.is_ignored("keep.o", false));

    Ok(())
}

#[test]
fn paths_are_rebased_per_scope() -> TestResult {
    let mut stack = IgnoreStack::new();
    stack.push_scope("sub", IgnoreNode::from_lines(["/build"])?);

    // `/build` is anchored to `sub`, not to the stack root.
    assert!(stack.is_ignored("sub/build", true));
    assert!(stack.is_ignored("sub/build/out.o", false));
    assert!(!stack.is_ignored("build/out.o", false));
    assert!(!stack.is_ignored("other/sub/build", true));

    Ok(())
}

#[test]
fn scope_does_not_govern_its_own_directory() -> TestResult {
    let mut stack = IgnoreStack::new();
    stack.push_scope("sub", IgnoreNode::from_lines(["*"])?);

    assert!(!stack.is_ignored("sub", true));
    assert!(stack.is_ignored("sub/anything", false));

    Ok(())
}

#[test]
fn global_excludes_are_consulted_last() -> TestResult {
    let mut stack = IgnoreStack::new();
    stack.push_scope("", IgnoreNode::from_lines(["!keep.log"])?);
    stack.set_global(IgnoreNode::from_lines(["*.log"])?);

    // The scope's negation decides before the global list is reached.
    assert!(!stack.is_ignored("keep.log", false));
    // Nothing in any scope matches, so the global exclude applies.
    assert!(stack.is_ignored("other.log", false));
    assert!(!stack.is_ignored("notes.txt", false));

    Ok(())
}

#[test]
fn directory_flag_flows_through_the_cascade() -> TestResult {
    let mut stack = IgnoreStack::new();
    stack.push_scope("", IgnoreNode::from_lines(["build/"])?);

    assert!(stack.is_ignored("build", true));
    assert!(!stack.is_ignored("build", false));
    assert!(stack.is_ignored("build/", true));

    Ok(())
}

#[test]
fn matching_rule_names_the_deciding_scope() -> TestResult {
    let mut stack = IgnoreStack::new();
    stack.push_scope("", IgnoreNode::from_lines(["*.o"])?);
    stack.push_scope("sub", IgnoreNode::from_lines(["!keep.o"])?);

    let (prefix, rule) = stack
        .matching_rule("sub/keep.o", false)
        .expect("a deciding rule");
    assert_eq!(prefix, "sub");
    assert_eq!(rule.pattern(), "keep.o");

    let (prefix, rule) = stack
        .matching_rule("sub/other.o", false)
        .expect("a deciding rule");
    assert_eq!(prefix, "");
    assert_eq!(rule.pattern(), "*.o");

    Ok(())
}

#[test]
fn deeper_scopes_are_consulted_first_regardless_of_push_order() -> TestResult {
    let mut stack = IgnoreStack::new();
    // Pushed shallow-first on purpose; resolution must still start at
    // the deepest applicable scope.
    stack.push_scope("", IgnoreNode::from_lines(["*.o"])?);
    stack.push_scope("a", IgnoreNode::from_lines(["!a.o"])?);
    stack.push_scope("a/b", IgnoreNode::from_lines(["a.o"])?);

    assert!(stack.is_ignored("a/b/a.o", false));
    assert!(!stack.is_ignored("a/a.o", false));
    assert!(stack.is_ignored("a/other.o", false));

    Ok(())
}
