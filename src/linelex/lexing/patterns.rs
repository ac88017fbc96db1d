//! Fixed vocabulary and compiled match patterns for the classifier passes
//!
//! One pattern per token category, compiled once on first use. Ambiguity
//! between categories is not resolved here; it is resolved by the order in
//! which the passes run (see [`passes`](super::passes)). Within the operator
//! pattern, longer operators appear before their prefixes so that `**=`
//! never matches as `**` followed by `=`; the regex engine's leftmost-first
//! alternation makes that ordering binding.

use once_cell::sync::Lazy;
use regex::Regex;

/// Reserved words of the target language, matched as whole words.
pub static RESERVED_WORDS: &[&str] = &[
    "and",
    "and_eq",
    "auto",
    "bitand",
    "bitor",
    "bool",
    "break",
    "case",
    "catch",
    "char",
    "class",
    "compl",
    "const",
    "const_cast",
    "continue",
    "default",
    "delete",
    "do",
    "double",
    "dynamic_cast",
    "else",
    "enum",
    "explicit",
    "export",
    "extern",
    "false",
    "float",
    "for",
    "friend",
    "goto",
    "if",
    "inline",
    "int",
    "long",
    "mutable",
    "namespace",
    "new",
    "not",
    "not_eq",
    "operator",
    "or",
    "or_eq",
    "private",
    "protected",
    "public",
    "register",
    "reinterpret_cast",
    "return",
    "short",
    "signed",
    "sizeof",
    "static",
    "static_cast",
    "struct",
    "switch",
    "template",
    "this",
    "throw",
    "true",
    "try",
    "typedef",
    "typeid",
    "typename",
    "union",
    "unsigned",
    "using",
    "virtual",
    "void",
    "volatile",
    "wchar_t",
    "while",
    "xor",
    "xor_eq",
];

/// `#` followed by directive name characters.
pub static PREPROCESSOR_DIRECTIVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").unwrap());

/// Double- or single-quoted spans, shortest match, quotes included in the
/// lexeme. Quoted spans never cross a line boundary.
pub static STRING_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r#""(.*?)"|'(.*?)'"#).unwrap());

/// Optionally signed decimal or float, or hex with a `0x` prefix. The hex
/// alternative comes first so `0x1F` is not split after the leading zero.
/// There is deliberately no word-boundary guard: a digit run embedded in
/// word characters is still claimed, matching how the original language's
/// tooling behaves.
pub static NUMERIC_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-+]?0x[0-9a-fA-F]+|[-+]?[0-9]+(?:\.[0-9]+)?").unwrap());

/// Whole-word alternation over [`RESERVED_WORDS`].
pub static RESERVED_WORD: Lazy<Regex> = Lazy::new(|| {
    let alternation = RESERVED_WORDS.join("|");
    Regex::new(&format!(r"\b(?:{})\b", alternation)).unwrap()
});

/// Symbolic and word-form operators, longest alternatives first.
///
/// `//` and `//=` are listed for vocabulary completeness but are shadowed
/// by comment stripping, and the word forms are shadowed by the reserved
/// word pass; neither shadow is accidental.
pub static OPERATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*=|//=|\*\*|//|==|!=|<>|>=|<=|\+=|-=|\*=|/=|%=|<<|>>|\band\b|\bor\b|\bnot\b|[-+*/%&|^~<>=]")
        .unwrap()
});

/// Single-character delimiters.
pub static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[(),:;\[\]@.{}]").unwrap());

/// Word-character runs left unclaimed by every earlier category.
pub static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Whatever non-whitespace residue is still left. Classified UNDEFINED so
/// that no input byte silently disappears from the token stream.
pub static UNDEFINED_RESIDUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").unwrap());
