use std::error::Error;

use treeignore::errors::PatternError;
use treeignore::rules::IgnoreRule;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn posix_digit_class_matches_digits_only() -> TestResult {
    let rule = IgnoreRule::new("*.sta[[:digit:]]")?;

    assert!(rule.is_match("test.sta0", false));
    assert!(rule.is_match("test.sta9", false));
    assert!(!rule.is_match("test.staX", false));

    Ok(())
}

#[test]
fn posix_alpha_and_xdigit_classes() -> TestResult {
    let alpha = IgnoreRule::new("file[[:alpha:]]")?;
    assert!(alpha.is_match("fileA", false));
    assert!(alpha.is_match("filez", false));
    assert!(!alpha.is_match("file1", false));

    let xdigit = IgnoreRule::new("v[[:xdigit:]]")?;
    assert!(xdigit.is_match("v0", false));
    assert!(xdigit.is_match("va", false));
    assert!(xdigit.is_match("vF", false));
    assert!(!xdigit.is_match("vg", false));

    Ok(())
}

#[test]
fn posix_case_classes_respect_case() -> TestResult {
    let upper = IgnoreRule::new("[[:upper:]]x")?;
    assert!(upper.is_match("Ax", false));
    assert!(!upper.is_match("ax", false));

    let lower = IgnoreRule::new("[[:lower:]]x")?;
    assert!(lower.is_match("ax", false));
    assert!(!lower.is_match("Ax", false));

    Ok(())
}

#[test]
fn word_class_includes_underscore() -> TestResult {
    let rule = IgnoreRule::new("[[:word:]]x")?;

    assert!(rule.is_match("_x", false));
    assert!(rule.is_match("ax", false));
    assert!(rule.is_match("1x", false));
    assert!(!rule.is_match("-x", false));

    Ok(())
}

#[test]
fn punct_class_uses_the_fixed_set() -> TestResult {
    let rule = IgnoreRule::new("x[[:punct:]]")?;

    assert!(rule.is_match("x!", false));
    assert!(rule.is_match("x-", false));
    assert!(rule.is_match("x~", false));
    assert!(!rule.is_match("xa", false));
    assert!(!rule.is_match("x0", false));

    Ok(())
}

#[test]
fn class_negation_inverts_the_alternatives() -> TestResult {
    let rule = IgnoreRule::new("*.[!o]")?;
    assert!(rule.is_match("a.c", false));
    assert!(!rule.is_match("a.o", false));

    let range = IgnoreRule::new("[!a-c]x")?;
    assert!(range.is_match("dx", false));
    assert!(!range.is_match("ax", false));
    assert!(!range.is_match("bx", false));

    Ok(())
}

#[test]
fn leading_bracket_in_class_body_is_literal() -> TestResult {
    let rule = IgnoreRule::new("a[]]b")?;

    assert!(rule.is_match("a]b", false));
    assert!(!rule.is_match("axb", false));

    Ok(())
}

#[test]
fn unclosed_bracket_compiles_as_a_literal() -> TestResult {
    let rule = IgnoreRule::new("a[b")?;

    assert!(rule.is_match("a[b", false));
    assert!(!rule.is_match("ab", false));

    Ok(())
}

#[test]
fn trailing_dash_in_class_is_literal() -> TestResult {
    let rule = IgnoreRule::new("x[a-]")?;

    assert!(rule.is_match("xa", false));
    assert!(rule.is_match("x-", false));
    assert!(!rule.is_match("xb", false));

    Ok(())
}

#[test]
fn unknown_class_name_fails_with_token_and_pattern() {
    let err = IgnoreRule::new("*.sta[[:bogus:]]").unwrap_err();

    assert_eq!(
        err,
        PatternError::UnknownCharacterClass {
            class: "bogus".to_string(),
            pattern: "*.sta[[:bogus:]]".to_string(),
        }
    );
}

#[test]
fn empty_pattern_after_markers_is_rejected() {
    for line in ["/", "!", "!/", "//"] {
        let err = IgnoreRule::new(line).unwrap_err();
        assert!(
            matches!(err, PatternError::EmptyPattern { .. }),
            "expected EmptyPattern for `{line}`, got {err:?}"
        );
    }
}
