//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Program, declaration and subprogram parsing
//! - Statement parsing (assignment, calls, control flow, blocks)
//! - Expression parsing (binary ops, unary ops, calls, literals)
//! - Type parsing for declarations
//! - Fail-fast error reporting
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
