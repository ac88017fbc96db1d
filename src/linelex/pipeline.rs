//! Pipeline executor that classifies input one line at a time
//!
//! The executor owns nothing but the pass table. Every line gets a fresh
//! buffer and a fresh token stream; no state survives from one line to the
//! next, and the whole run is synchronous.

use crate::linelex::lexing::normalize::{normalize, LineBuffer};
use crate::linelex::lexing::passes::{PassDescriptor, PASSES};
use crate::linelex::lexing::token::TokenStream;

/// Runs the classifier passes over input lines.
pub struct LineLexer {
    passes: &'static [PassDescriptor],
}

impl LineLexer {
    /// Create a lexer over the standard pass table.
    pub fn new() -> Self {
        LineLexer { passes: &PASSES }
    }

    /// The pass table this lexer runs, in precedence order.
    pub fn passes(&self) -> &'static [PassDescriptor] {
        self.passes
    }

    /// Classify one raw input line.
    ///
    /// The returned stream is in pass-execution order. Callers that need
    /// left-to-right order apply
    /// [`restore_source_order`](crate::linelex::lexing::restore_source_order)
    /// themselves.
    pub fn lex_line(&self, raw: &str) -> TokenStream {
        self.lex_line_observed(raw, |_, _| {})
    }

    /// Classify one raw input line, reporting pipeline progress.
    ///
    /// `observe` is called after each executed pass with the pass
    /// descriptor and the masked buffer it left behind. Passes skipped by
    /// the early exit are not reported, which makes the early exit itself
    /// observable.
    pub fn lex_line_observed<F>(&self, raw: &str, mut observe: F) -> TokenStream
    where
        F: FnMut(&PassDescriptor, &str),
    {
        let mut buffer: LineBuffer = match normalize(raw) {
            Some(buffer) => buffer,
            None => return TokenStream::new(),
        };

        let mut tokens = TokenStream::new();
        for pass in self.passes {
            // Early exit: a fully masked buffer cannot match anything.
            if buffer.is_spent() {
                break;
            }
            let (found, masked) = pass.apply(buffer);
            tokens.extend(found);
            observe(pass, masked.as_str());
            buffer = masked;
        }
        tokens
    }

    /// Classify every line of a source text, one stream per line.
    ///
    /// Blank lines produce empty streams, so the result stays aligned with
    /// the input line numbering.
    pub fn lex_source(&self, source: &str) -> Vec<TokenStream> {
        source.lines().map(|line| self.lex_line(line)).collect()
    }
}

impl Default for LineLexer {
    fn default() -> Self {
        Self::new()
    }
}
