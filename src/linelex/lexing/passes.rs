//! Classifier passes
//!
//! The precedence contract between token categories is encoded as data: an
//! ordered table of named pass descriptors, each owning one classification
//! and one compiled pattern. Earlier passes claim text first, and claimed
//! spans are masked out of the buffer before the next pass runs, so a pass
//! only ever sees text that no higher-precedence category wanted.
//!
//! Each pass is a pure function from a [`LineBuffer`] to the tokens it
//! found plus the masked successor buffer. Nothing here is fallible: a
//! pattern that matches nothing contributes zero tokens.
//!
//! One containment limitation follows from the precedence order: the
//! directive pass runs before the string pass, so a `#name` inside a
//! quoted span is claimed as a directive, and the string pattern can then
//! match across the masked gap. That is the only case where two token
//! spans overlap; every pattern after the string pass is unable to match
//! whitespace, masked or otherwise.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::linelex::lexing::normalize::LineBuffer;
use crate::linelex::lexing::patterns;
use crate::linelex::lexing::token::{Classification, Token};

/// One classifier pass: a named category with a precedence rank and the
/// pattern that recognizes it.
pub struct PassDescriptor {
    /// Stable name, used by tracing output and the pass listing.
    pub name: &'static str,
    /// The classification every match of this pass receives.
    pub classification: Classification,
    /// Position in the precedence order, starting at 1.
    pub rank: usize,
    pattern: &'static Lazy<Regex>,
}

impl PassDescriptor {
    /// The compiled pattern this pass scans with.
    pub fn pattern(&self) -> &Regex {
        self.pattern
    }

    /// Run this pass over the buffer.
    ///
    /// Emits one token per non-overlapping match, left to right, carrying
    /// the match text and its start offset. The returned buffer has every
    /// matched span replaced with whitespace of the same byte length, so
    /// offsets seen by later passes still refer to the normalized line.
    pub fn apply(&self, buffer: LineBuffer) -> (Vec<Token>, LineBuffer) {
        let mut line = buffer.into_string();

        let spans: Vec<(usize, usize)> = self
            .pattern
            .find_iter(&line)
            .map(|m| (m.start(), m.end()))
            .collect();

        let mut tokens = Vec::with_capacity(spans.len());
        for &(start, end) in &spans {
            tokens.push(Token::new(
                self.classification,
                line[start..end].to_string(),
                start,
            ));
        }

        for &(start, end) in &spans {
            line.replace_range(start..end, &" ".repeat(end - start));
        }

        (tokens, LineBuffer::new(line))
    }
}

/// The classifier passes in precedence order.
///
/// The order is a disambiguation contract, not an optimization:
/// directives go before anything that could claim the `#`, quoted spans
/// go before the operator characters they may contain, numbers go before
/// identifiers and sign operators, reserved words go before identifiers
/// and the word-form operators, and the residue pass picks up whatever
/// is left.
pub static PASSES: [PassDescriptor; 8] = [
    PassDescriptor {
        name: "preprocessor-directive",
        classification: Classification::PreprocessorDirective,
        rank: 1,
        pattern: &patterns::PREPROCESSOR_DIRECTIVE,
    },
    PassDescriptor {
        name: "string-literal",
        classification: Classification::StringConst,
        rank: 2,
        pattern: &patterns::STRING_LITERAL,
    },
    PassDescriptor {
        name: "numeric-literal",
        classification: Classification::Number,
        rank: 3,
        pattern: &patterns::NUMERIC_LITERAL,
    },
    PassDescriptor {
        name: "reserved-word",
        classification: Classification::ReservedWord,
        rank: 4,
        pattern: &patterns::RESERVED_WORD,
    },
    PassDescriptor {
        name: "operator",
        classification: Classification::Operator,
        rank: 5,
        pattern: &patterns::OPERATOR,
    },
    PassDescriptor {
        name: "punctuation",
        classification: Classification::Punctuation,
        rank: 6,
        pattern: &patterns::PUNCTUATION,
    },
    PassDescriptor {
        name: "identifier",
        classification: Classification::Identifier,
        rank: 7,
        pattern: &patterns::IDENTIFIER,
    },
    PassDescriptor {
        name: "undefined-residue",
        classification: Classification::Undefined,
        rank: 8,
        pattern: &patterns::UNDEFINED_RESIDUE,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn pass(name: &str) -> &'static PassDescriptor {
        PASSES
            .iter()
            .find(|p| p.name == name)
            .expect("unknown pass name")
    }

    fn buffer(line: &str) -> LineBuffer {
        LineBuffer::new(line.to_string())
    }

    #[test]
    fn test_pass_table_is_ranked_in_order() {
        for (index, descriptor) in PASSES.iter().enumerate() {
            assert_eq!(descriptor.rank, index + 1);
        }
    }

    #[test]
    fn test_string_pass_claims_quoted_spans() {
        let (tokens, masked) = pass("string-literal").apply(buffer(r#"x = "hi" + 'c'"#));

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme(), r#""hi""#);
        assert_eq!(tokens[0].source_offset(), 4);
        assert_eq!(tokens[1].lexeme(), "'c'");
        assert_eq!(tokens[1].source_offset(), 11);
        assert_eq!(masked.as_str(), "x =      +    ");
    }

    #[test]
    fn test_masking_preserves_buffer_length() {
        let input = r#"a "bb" c"#;
        let (_, masked) = pass("string-literal").apply(buffer(input));
        assert_eq!(masked.as_str().len(), input.len());
    }

    #[test]
    fn test_number_pass_hex_and_sign() {
        let (tokens, _) = pass("numeric-literal").apply(buffer("0x1F -0x1f 3.14"));

        let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme()).collect();
        assert_eq!(lexemes, vec!["0x1F", "-0x1f", "3.14"]);
        assert!(tokens
            .iter()
            .all(|t| t.classification() == Classification::Number));
    }

    #[test]
    fn test_reserved_word_pass_respects_word_boundaries() {
        let (tokens, masked) = pass("reserved-word").apply(buffer("int intx"));

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].lexeme(), "int");
        assert_eq!(tokens[0].source_offset(), 0);
        assert_eq!(masked.as_str(), "    intx");
    }

    #[test]
    fn test_operator_pass_prefers_longest_form() {
        let (tokens, _) = pass("operator").apply(buffer("x **= y"));

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].lexeme(), "**=");
        assert_eq!(tokens[0].source_offset(), 2);
    }

    #[test]
    fn test_undefined_pass_claims_all_residue() {
        let (tokens, masked) = pass("undefined-residue").apply(buffer("  ?? !  "));

        let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme()).collect();
        assert_eq!(lexemes, vec!["??", "!"]);
        assert!(masked.is_spent());
    }

    #[test]
    fn test_no_match_is_zero_tokens() {
        let (tokens, masked) = pass("string-literal").apply(buffer("int x;"));
        assert!(tokens.is_empty());
        assert_eq!(masked.as_str(), "int x;");
    }

    #[test]
    fn test_offsets_survive_earlier_masking() {
        // Run two passes by hand and check the second pass reports offsets
        // in the original line, not in some compacted buffer.
        let (_, masked) = pass("string-literal").apply(buffer(r#""s" + name"#));
        let (tokens, _) = pass("identifier").apply(masked);

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].lexeme(), "name");
        assert_eq!(tokens[0].source_offset(), 6);
    }
}
