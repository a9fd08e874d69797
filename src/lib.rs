#![allow(clippy::module_inception)]

use std::{path::Path, rc::Rc};

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A source location: the 1-based line number and the file it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

/// Scans and parses `source` in one go.
///
/// Syntax errors are attached to `file` so they can be rendered the same
/// way as lexical errors.
pub fn parse_source(source: String, file: Option<String>) -> Result<Program, Error> {
    let file_name = Rc::new(file.clone().unwrap_or_else(|| String::from("shell")));
    let tokens = tokenize(source, file)?;

    parser::parser::parse(tokens).map_err(|error| Error::from_syntax_error(error, file_name))
}

/// Returns the text of the 1-based `line` in `content`, without its line break.
pub fn get_source_line(content: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    content
        .split('\n')
        .nth(line as usize - 1)
        .map(|text| text.trim_end_matches('\r'))
}

pub fn display_error(error: &Error, file: &Path, content: &str) {
    /*
        Error: UnexpectedToken (expected `;` or `end`, found end of input)
        -> demo.pas
           |
        20 |   x := 1
           |
    */

    let line = error.line();
    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}:{}", file.as_os_str().to_string_lossy(), line);
    eprintln!("{:>padding$}", "|");

    if let Some(line_text) = get_source_line(content, line) {
        eprintln!("{} | {}", line_string, line_text.trim_end());
    }

    eprintln!("{:>padding$}", "|");
}
