//! Fixed word table for lowercase identifiers.
//!
//! Every lowercase identifier the dispatcher scans is looked up here. A hit
//! yields the word's class (keyword, word operator, builtin or atom); a miss
//! means the identifier is an ordinary [`Tag::Variable`].
//!
//! The table is a length-bucketed `match` over byte strings: the word's
//! length is the first-pass filter (entries range from 2 to 11 bytes), then
//! the candidates of that length are compared. Nothing is built at runtime.

use crate::Tag;

/// Look up a lowercase identifier.
///
/// Returns `None` for identifiers outside the table. Matching is exact and
/// case-sensitive: `lett` and `Let` are not `let`.
#[inline]
pub fn lookup(word: &[u8]) -> Option<Tag> {
    // Guard: all entries are 2-11 bytes and start with a lowercase letter
    if !(2..=11).contains(&word.len()) || !word[0].is_ascii_lowercase() {
        return None;
    }

    match word.len() {
        2 => match word {
            b"as" | b"do" | b"if" | b"in" | b"of" | b"to" => Some(Tag::Keyword),
            b"or" => Some(Tag::Operator),
            _ => None,
        },
        3 => match word {
            b"end" | b"for" | b"fun" | b"let" | b"new" | b"rec" | b"sig" | b"try" | b"val" => {
                Some(Tag::Keyword)
            }
            b"lor" | b"lsl" | b"lsr" | b"asr" | b"and" => Some(Tag::Operator),
            _ => None,
        },
        4 => match word {
            b"done" | b"else" | b"lazy" | b"open" | b"then" | b"type" | b"when" | b"with" => {
                Some(Tag::Keyword)
            }
            b"lxor" | b"land" => Some(Tag::Operator),
            b"exit" | b"succ" | b"pred" => Some(Tag::Builtin),
            b"true" => Some(Tag::Atom),
            _ => None,
        },
        5 => match word {
            b"begin" | b"class" | b"match" | b"while" => Some(Tag::Keyword),
            b"raise" => Some(Tag::Builtin),
            b"false" => Some(Tag::Atom),
            _ => None,
        },
        6 => match word {
            b"assert" | b"downto" | b"method" | b"module" | b"nonrec" | b"object"
            | b"struct" => Some(Tag::Keyword),
            b"ignore" => Some(Tag::Builtin),
            _ => None,
        },
        7 => match word {
            b"functor" | b"include" | b"inherit" | b"mutable" | b"private" | b"virtual" => {
                Some(Tag::Keyword)
            }
            _ => None,
        },
        8 => match word {
            b"external" | b"function" => Some(Tag::Keyword),
            b"failwith" => Some(Tag::Builtin),
            _ => None,
        },
        9 => match word {
            b"exception" => Some(Tag::Keyword),
            _ => None,
        },
        10 => match word {
            b"constraint" => Some(Tag::Keyword),
            _ => None,
        },
        11 => match word {
            b"initializer" => Some(Tag::Keyword),
            b"invalid_arg" => Some(Tag::Builtin),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests;
