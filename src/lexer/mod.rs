//! Lexical analysis module for the front end.
//!
//! This module contains the scanner that converts source text into the
//! token stream the parser consumes. It handles:
//!
//! - Tokenization of source code using an ordered table of regex patterns
//! - Case-insensitive recognition of keywords
//! - Integer, real, boolean and string literals with attached values
//! - Line tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
