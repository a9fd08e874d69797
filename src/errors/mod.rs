//! Error types and error handling for the front end.
//!
//! This module defines the error types used by the scanner and the parser:
//!
//! - `SyntaxError`, the expected/found/line triple produced by the parser
//! - `report`, the pure constructor the parser calls on a token mismatch
//! - `Error`, which carries lexical errors and wrapped syntax errors together
//!   with a source position for the driver
//! - Helpful error names and suggestions for rendering

pub mod errors;
