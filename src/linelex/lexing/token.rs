//! Token types produced by the classifier passes
//!
//! A token pairs the literal text of a match (the lexeme) with the byte
//! offset it starts at in the normalized line. Tokens are immutable once
//! created: a classifier pass builds them and nothing downstream rewrites
//! them, so a stream can be re-ordered or serialized without invalidating
//! any offset.

use std::fmt;
use std::ops::Range;

/// The syntactic category assigned to a lexeme.
///
/// This is a closed vocabulary. The textual names returned by [`name`]
/// (and used by serde) are a compatibility surface for output records and
/// must not change.
///
/// [`name`]: Classification::name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    Number,
    StringConst,
    ReservedWord,
    Operator,
    Punctuation,
    Identifier,
    Undefined,
    PreprocessorDirective,
}

impl Classification {
    /// The fixed textual name of this classification.
    pub fn name(&self) -> &'static str {
        match self {
            Classification::Number => "NUMBER",
            Classification::StringConst => "STRING_CONST",
            Classification::ReservedWord => "RESERVED_WORD",
            Classification::Operator => "OPERATOR",
            Classification::Punctuation => "PUNCTUATION",
            Classification::Identifier => "IDENTIFIER",
            Classification::Undefined => "UNDEFINED",
            Classification::PreprocessorDirective => "PREPROCESSOR_DIRECTIVE",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The payload shared by every token variant: the matched text and its
/// start offset (in bytes) in the normalized line.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Lexeme {
    pub text: String,
    pub offset: usize,
}

/// A classified lexeme.
///
/// One variant per classification, all carrying the same [`Lexeme`]
/// payload. The uniform accessors ([`lexeme`], [`source_offset`],
/// [`classification`]) are what the pipeline and the formatters use, so
/// most call sites never match on the variant.
///
/// [`lexeme`]: Token::lexeme
/// [`source_offset`]: Token::source_offset
/// [`classification`]: Token::classification
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "classification", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Token {
    Number(Lexeme),
    StringConst(Lexeme),
    ReservedWord(Lexeme),
    Operator(Lexeme),
    Punctuation(Lexeme),
    Identifier(Lexeme),
    Undefined(Lexeme),
    PreprocessorDirective(Lexeme),
}

impl Token {
    /// Build a token for the given classification.
    pub fn new(classification: Classification, text: String, offset: usize) -> Self {
        let lexeme = Lexeme { text, offset };
        match classification {
            Classification::Number => Token::Number(lexeme),
            Classification::StringConst => Token::StringConst(lexeme),
            Classification::ReservedWord => Token::ReservedWord(lexeme),
            Classification::Operator => Token::Operator(lexeme),
            Classification::Punctuation => Token::Punctuation(lexeme),
            Classification::Identifier => Token::Identifier(lexeme),
            Classification::Undefined => Token::Undefined(lexeme),
            Classification::PreprocessorDirective => Token::PreprocessorDirective(lexeme),
        }
    }

    fn payload(&self) -> &Lexeme {
        match self {
            Token::Number(lexeme)
            | Token::StringConst(lexeme)
            | Token::ReservedWord(lexeme)
            | Token::Operator(lexeme)
            | Token::Punctuation(lexeme)
            | Token::Identifier(lexeme)
            | Token::Undefined(lexeme)
            | Token::PreprocessorDirective(lexeme) => lexeme,
        }
    }

    /// The classification tag of this token.
    pub fn classification(&self) -> Classification {
        match self {
            Token::Number(_) => Classification::Number,
            Token::StringConst(_) => Classification::StringConst,
            Token::ReservedWord(_) => Classification::ReservedWord,
            Token::Operator(_) => Classification::Operator,
            Token::Punctuation(_) => Classification::Punctuation,
            Token::Identifier(_) => Classification::Identifier,
            Token::Undefined(_) => Classification::Undefined,
            Token::PreprocessorDirective(_) => Classification::PreprocessorDirective,
        }
    }

    /// The literal matched text.
    pub fn lexeme(&self) -> &str {
        &self.payload().text
    }

    /// Start offset of the lexeme, in bytes, in the normalized line.
    pub fn source_offset(&self) -> usize {
        self.payload().offset
    }

    /// Byte length of the lexeme.
    pub fn len(&self) -> usize {
        self.payload().text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload().text.is_empty()
    }

    /// The byte range `[source_offset, source_offset + len)` this token
    /// claims in the normalized line.
    pub fn span(&self) -> Range<usize> {
        let offset = self.payload().offset;
        offset..offset + self.payload().text.len()
    }
}

/// The tokens found in one line, in the order they were found.
///
/// Passes run category by category, so insertion order is pass-execution
/// order, not left-to-right order. Call [`restore_source_order`] when
/// left-to-right order is needed.
pub type TokenStream = Vec<Token>;

/// Re-order a stream by ascending source offset.
///
/// The sort is stable. Equal offsets cannot occur for tokens of the same
/// line (spans never overlap), so the result is a total left-to-right
/// ordering.
pub fn restore_source_order(tokens: &mut [Token]) {
    tokens.sort_by_key(|token| token.source_offset());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_names() {
        assert_eq!(Classification::Number.name(), "NUMBER");
        assert_eq!(Classification::StringConst.name(), "STRING_CONST");
        assert_eq!(Classification::ReservedWord.name(), "RESERVED_WORD");
        assert_eq!(Classification::Operator.name(), "OPERATOR");
        assert_eq!(Classification::Punctuation.name(), "PUNCTUATION");
        assert_eq!(Classification::Identifier.name(), "IDENTIFIER");
        assert_eq!(Classification::Undefined.name(), "UNDEFINED");
        assert_eq!(
            Classification::PreprocessorDirective.name(),
            "PREPROCESSOR_DIRECTIVE"
        );
    }

    #[test]
    fn test_classification_display_matches_name() {
        assert_eq!(format!("{}", Classification::ReservedWord), "RESERVED_WORD");
    }

    #[test]
    fn test_token_accessors() {
        let token = Token::new(Classification::Number, "0x1F".to_string(), 4);
        assert_eq!(token.classification(), Classification::Number);
        assert_eq!(token.lexeme(), "0x1F");
        assert_eq!(token.source_offset(), 4);
        assert_eq!(token.len(), 4);
        assert_eq!(token.span(), 4..8);
        assert!(!token.is_empty());
    }

    #[test]
    fn test_token_new_tags_every_classification() {
        let classifications = [
            Classification::Number,
            Classification::StringConst,
            Classification::ReservedWord,
            Classification::Operator,
            Classification::Punctuation,
            Classification::Identifier,
            Classification::Undefined,
            Classification::PreprocessorDirective,
        ];
        for classification in classifications {
            let token = Token::new(classification, "x".to_string(), 0);
            assert_eq!(token.classification(), classification);
        }
    }

    #[test]
    fn test_restore_source_order() {
        let mut tokens = vec![
            Token::new(Classification::Number, "5".to_string(), 8),
            Token::new(Classification::ReservedWord, "int".to_string(), 0),
            Token::new(Classification::Operator, "=".to_string(), 6),
            Token::new(Classification::Identifier, "x".to_string(), 4),
        ];
        restore_source_order(&mut tokens);

        let offsets: Vec<usize> = tokens.iter().map(|t| t.source_offset()).collect();
        assert_eq!(offsets, vec![0, 4, 6, 8]);
        assert_eq!(tokens[0].lexeme(), "int");
        assert_eq!(tokens[3].lexeme(), "5");
    }

    #[test]
    fn test_token_serializes_with_classification_tag() {
        let token = Token::new(Classification::StringConst, "\"hi\"".to_string(), 2);
        let json = serde_json::to_string(&token).unwrap();
        assert!(json.contains("\"classification\":\"STRING_CONST\""));
        assert!(json.contains("\"offset\":2"));

        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(back, token);
    }
}
