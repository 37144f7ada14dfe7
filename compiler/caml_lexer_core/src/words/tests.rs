use super::*;

const KEYWORDS: &[&str] = &[
    "as",
    "assert",
    "begin",
    "class",
    "constraint",
    "do",
    "done",
    "downto",
    "else",
    "end",
    "exception",
    "external",
    "for",
    "fun",
    "function",
    "functor",
    "if",
    "in",
    "include",
    "inherit",
    "initializer",
    "lazy",
    "let",
    "match",
    "method",
    "module",
    "mutable",
    "new",
    "nonrec",
    "object",
    "of",
    "open",
    "private",
    "rec",
    "sig",
    "struct",
    "then",
    "to",
    "try",
    "type",
    "val",
    "virtual",
    "when",
    "while",
    "with",
];

const WORD_OPERATORS: &[&str] = &["lor", "lxor", "land", "lsl", "lsr", "asr", "or", "and"];

const BUILTINS: &[&str] = &[
    "raise",
    "exit",
    "succ",
    "pred",
    "ignore",
    "failwith",
    "invalid_arg",
];

#[test]
fn every_keyword_resolves() {
    for word in KEYWORDS {
        assert_eq!(lookup(word.as_bytes()), Some(Tag::Keyword), "{word}");
    }
}

#[test]
fn every_word_operator_resolves() {
    for word in WORD_OPERATORS {
        assert_eq!(lookup(word.as_bytes()), Some(Tag::Operator), "{word}");
    }
}

#[test]
fn every_builtin_resolves() {
    for word in BUILTINS {
        assert_eq!(lookup(word.as_bytes()), Some(Tag::Builtin), "{word}");
    }
}

#[test]
fn booleans_are_atoms() {
    assert_eq!(lookup(b"true"), Some(Tag::Atom));
    assert_eq!(lookup(b"false"), Some(Tag::Atom));
}

#[test]
fn table_size() {
    assert_eq!(KEYWORDS.len() + WORD_OPERATORS.len() + BUILTINS.len() + 2, 62);
}

#[test]
fn prefixes_and_extensions_miss() {
    for word in ["lett", "lets", "le", "l", "matcher", "ends", "an", "truee", "fals"] {
        assert_eq!(lookup(word.as_bytes()), None, "{word}");
    }
}

#[test]
fn lookup_is_case_sensitive() {
    assert_eq!(lookup(b"Let"), None);
    assert_eq!(lookup(b"TRUE"), None);
    assert_eq!(lookup(b"Raise"), None);
}

#[test]
fn out_of_range_lengths_miss() {
    assert_eq!(lookup(b""), None);
    assert_eq!(lookup(b"x"), None);
    assert_eq!(lookup(b"initializers"), None);
    assert_eq!(lookup(b"_"), None);
    assert_eq!(lookup(b"_let"), None);
}
