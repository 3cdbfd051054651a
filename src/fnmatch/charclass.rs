// src/fnmatch/charclass.rs

//! Compiler for bracket expressions (`[...]`) into character predicates.
//!
//! The input is the class body *without* the enclosing brackets; the
//! pattern builder is responsible for locating the closing `]`. A body
//! is an ordered list of alternatives (literal characters, `x-y` ranges,
//! `[:name:]` POSIX classes) plus an overall negation flag from a
//! leading `!`.

use crate::errors::PatternError;

/// Fixed punctuation set matched by `[:punct:]`.
const PUNCT_CHARS: &str = "-!\"#$%&'()*+,./:;<=>?@[\\]_`{|}~";

/// A named POSIX character class, e.g. the `digit` in `[[:digit:]]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NamedClass {
    Alnum,
    Alpha,
    Blank,
    Cntrl,
    Digit,
    Graph,
    Lower,
    Print,
    Punct,
    Space,
    Upper,
    Word,
    XDigit,
}

impl NamedClass {
    /// Resolve a class name as written between `[:` and `:]`.
    fn from_name(name: &str) -> Option<NamedClass> {
        match name {
            "alnum" => Some(NamedClass::Alnum),
            "alpha" => Some(NamedClass::Alpha),
            "blank" => Some(NamedClass::Blank),
            "cntrl" => Some(NamedClass::Cntrl),
            "digit" => Some(NamedClass::Digit),
            "graph" => Some(NamedClass::Graph),
            "lower" => Some(NamedClass::Lower),
            "print" => Some(NamedClass::Print),
            "punct" => Some(NamedClass::Punct),
            "space" => Some(NamedClass::Space),
            "upper" => Some(NamedClass::Upper),
            "word" => Some(NamedClass::Word),
            "xdigit" => Some(NamedClass::XDigit),
            _ => None,
        }
    }

    fn matches(self, c: char) -> bool {
        match self {
            NamedClass::Alnum => c.is_alphabetic() || c.is_numeric(),
            NamedClass::Alpha => c.is_alphabetic(),
            NamedClass::Blank => c == ' ' || c == '\t',
            NamedClass::Cntrl => c <= '\u{1f}' || c == '\u{7f}',
            NamedClass::Digit => c.is_numeric(),
            NamedClass::Graph => {
                ('\u{21}'..='\u{7e}').contains(&c) || c.is_alphabetic() || c.is_numeric()
            }
            NamedClass::Lower => c.is_lowercase(),
            NamedClass::Print => {
                ('\u{20}'..='\u{7e}').contains(&c) || c.is_alphabetic() || c.is_numeric()
            }
            NamedClass::Punct => PUNCT_CHARS.contains(c),
            NamedClass::Space => c.is_whitespace(),
            NamedClass::Upper => c.is_uppercase(),
            NamedClass::Word => c == '_' || c.is_alphabetic() || c.is_numeric(),
            NamedClass::XDigit => c.is_ascii_hexdigit(),
        }
    }
}

/// One alternative inside a class body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Predicate {
    Literal(char),
    Range(char, char),
    Posix(NamedClass),
}

impl Predicate {
    fn matches(&self, c: char) -> bool {
        match *self {
            Predicate::Literal(l) => c == l,
            Predicate::Range(lo, hi) => (lo..=hi).contains(&c),
            Predicate::Posix(class) => class.matches(c),
        }
    }
}

/// A compiled bracket expression: its alternatives plus negation.
///
/// A character matches iff any alternative matches, XORed with the
/// negation flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CharClass {
    predicates: Vec<Predicate>,
    negated: bool,
}

impl CharClass {
    /// Compile a class body. `pattern` is the full original pattern the
    /// body was cut from, used only for error reporting.
    pub(crate) fn parse(body: &str, pattern: &str) -> Result<CharClass, PatternError> {
        let chars: Vec<char> = body.chars().collect();
        let mut predicates = Vec::new();
        let mut negated = false;

        let mut i = 0;
        if chars.first() == Some(&'!') {
            negated = true;
            i = 1;
        }

        while i < chars.len() {
            // `[:name:]` token.
            if chars[i] == '[' && chars.get(i + 1) == Some(&':') {
                if let Some(end) = find_class_token_end(&chars, i + 2) {
                    let name: String = chars[i + 2..end].iter().collect();
                    match NamedClass::from_name(&name) {
                        Some(class) => predicates.push(Predicate::Posix(class)),
                        None => {
                            return Err(PatternError::UnknownCharacterClass {
                                class: name,
                                pattern: pattern.to_string(),
                            });
                        }
                    }
                    i = end + 2;
                    continue;
                }
            }

            // `x-y` range; a trailing `-` falls through to the literal case.
            if chars.get(i + 1) == Some(&'-') && i + 2 < chars.len() {
                predicates.push(Predicate::Range(chars[i], chars[i + 2]));
                i += 3;
                continue;
            }

            predicates.push(Predicate::Literal(chars[i]));
            i += 1;
        }

        Ok(CharClass { predicates, negated })
    }

    pub(crate) fn matches(&self, c: char) -> bool {
        let hit = self.predicates.iter().any(|p| p.matches(c));
        hit != self.negated
    }
}

/// Position of the `:` in the `:]` that closes a `[:name:]` token,
/// scanning from `from`. `None` means the token never closes.
fn find_class_token_end(chars: &[char], from: usize) -> Option<usize> {
    let mut i = from;
    while i + 1 < chars.len() {
        if chars[i] == ':' && chars[i + 1] == ']' {
            return Some(i);
        }
        i += 1;
    }
    None
}
