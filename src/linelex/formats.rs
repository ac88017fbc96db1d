//! Output record rendering for token streams
//!
//! The text format is the classic one-record-per-token form,
//! `<lexeme> - <CLASSIFICATION_NAME>`. The JSON format serializes whole
//! streams through serde for tooling that wants structure instead of
//! records.

use crate::linelex::lexing::token::{Token, TokenStream};

/// Render one token as a text record, `<lexeme> - <CLASSIFICATION_NAME>`.
///
/// A record that renders blank is dropped rather than emitted; `None`
/// signals the caller to skip it.
pub fn render_token(token: &Token) -> Option<String> {
    let record = format!("{} - {}", token.lexeme(), token.classification().name());
    if record.trim().is_empty() {
        None
    } else {
        Some(record)
    }
}

/// Render a stream as newline-terminated text records.
///
/// An empty stream renders as the empty string, so blank input lines
/// contribute no output records at all.
pub fn render_records(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter_map(render_token)
        .map(|record| record + "\n")
        .collect()
}

/// Serialize token streams (one per input line) as pretty-printed JSON.
pub fn render_json(streams: &[TokenStream]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(streams)
}
