use std::{fmt::Display, rc::Rc};

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// The only error the parser produces: an unexpected token at some grammar
/// position.
///
/// `expected` is sorted and free of duplicates. `line` is the line of the
/// offending token, or of the last consumed token when the parser ran into
/// the end of input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: expected {}, found {found}", describe_expected(.expected))]
pub struct SyntaxError {
    pub expected: Vec<TokenKind>,
    pub found: TokenKind,
    pub line: u32,
}

/// Builds the error value for a token mismatch. Has no side effects; the
/// caller decides to abort.
pub fn report(expected: &[TokenKind], found: TokenKind, line: u32) -> SyntaxError {
    let mut expected = expected.to_vec();
    expected.sort();
    expected.dedup();

    SyntaxError {
        expected,
        found,
        line,
    }
}

fn describe_expected(expected: &[TokenKind]) -> String {
    match expected {
        [] => String::from("nothing"),
        [only] => only.to_string(),
        [init @ .., last] => {
            let init = init
                .iter()
                .map(|kind| kind.to_string())
                .collect::<Vec<String>>()
                .join(", ");
            format!("one of {}, or {}", init, last)
        }
    }
}

#[derive(Error, Debug, Clone)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn from_syntax_error(error: SyntaxError, file: Rc<String>) -> Self {
        let line = error.line;
        Error::new(ErrorImpl::Syntax(error), Position(line, file))
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn line(&self) -> u32 {
        self.position.0
    }

    pub fn internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::Syntax(_) => "UnexpectedToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "String literals must be closed with `'` on the same line",
            )),
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Comment is never closed"))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::Syntax(error) if error.expected.contains(&TokenKind::Semicolon) => {
                ErrorTip::Suggestion(format!(
                    "Expected {}, found {}, did you miss a semicolon?",
                    describe_expected(&error.expected),
                    error.found
                ))
            }
            ErrorImpl::Syntax(error) => ErrorTip::Suggestion(format!(
                "Expected {}, found {}",
                describe_expected(&error.expected),
                error.found
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}
