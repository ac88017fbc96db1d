//! Source-to-output processing
//!
//! Thin orchestration over the pipeline: read input, classify line by
//! line, optionally restore left-to-right order, serialize. This is the
//! only layer where failure exists at all; the pipeline itself cannot
//! fail, so everything here is I/O or serialization surfacing as a single
//! top-level error.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::linelex::formats;
use crate::linelex::lexing::passes::PassDescriptor;
use crate::linelex::lexing::token::restore_source_order;
use crate::linelex::pipeline::LineLexer;

/// Errors that can occur while processing a source text or file.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    IoError(String),
    InvalidFormat(String),
    SerializationError(String),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ProcessingError {}

/// Output serialization formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `<lexeme> - <CLASSIFICATION_NAME>` record per token.
    Text,
    /// Pretty-printed JSON, one array of tokens per non-blank line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ProcessingError::InvalidFormat(other.to_string())),
        }
    }
}

/// Emission order of each line's tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenOrder {
    /// Left-to-right by source offset (the order restorer runs).
    Source,
    /// Raw pass-execution order (the order restorer is skipped).
    Pass,
}

/// What to produce and in which order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub format: OutputFormat,
    pub order: TokenOrder,
}

impl Default for ProcessingSpec {
    fn default() -> Self {
        ProcessingSpec {
            format: OutputFormat::Text,
            order: TokenOrder::Source,
        }
    }
}

/// Process a source text according to the given specification.
pub fn process_source(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    process_source_observed(source, spec, |_, _, _| {})
}

/// Process a source text, reporting per-pass pipeline progress.
///
/// `observe` receives the raw line, the executed pass, and the masked
/// buffer that pass left behind. The processor itself never writes to any
/// stream; observers that want console tracing do their own printing.
pub fn process_source_observed<F>(
    source: &str,
    spec: &ProcessingSpec,
    mut observe: F,
) -> Result<String, ProcessingError>
where
    F: FnMut(&str, &PassDescriptor, &str),
{
    let lexer = LineLexer::new();
    let mut streams: Vec<_> = source
        .lines()
        .map(|line| lexer.lex_line_observed(line, |pass, buffer| observe(line, pass, buffer)))
        .collect();

    if spec.order == TokenOrder::Source {
        for stream in &mut streams {
            restore_source_order(stream);
        }
    }

    match spec.format {
        OutputFormat::Text => Ok(streams
            .iter()
            .map(|stream| formats::render_records(stream))
            .collect()),
        OutputFormat::Json => {
            streams.retain(|stream| !stream.is_empty());
            formats::render_json(&streams)
                .map_err(|e| ProcessingError::SerializationError(e.to_string()))
        }
    }
}

/// Process a source file according to the given specification.
///
/// I/O failure surfaces as a single `IoError`; nothing partial is
/// produced.
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let content =
        fs::read_to_string(file_path).map_err(|e| ProcessingError::IoError(e.to_string()))?;
    process_source(&content, spec)
}
