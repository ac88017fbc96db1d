//! # linelex
//!
//! A line-oriented lexical analyzer for a C++-like source language.
//!
//! Input is consumed one line at a time. Each line is normalized (whitespace
//! trimmed, trailing `//` comment stripped) and then run through a fixed
//! sequence of classifier passes. Every pass scans the current working buffer
//! for a single token category, records what it finds, and masks the matched
//! spans with whitespace so later passes cannot claim the same text. Because
//! masking preserves byte length, every token keeps the byte offset it had in
//! the normalized line and the stream can be restored to left-to-right order
//! on demand.

pub mod linelex;
