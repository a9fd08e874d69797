use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    /// Reserved words, keyed by their lowercase spelling.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("program", TokenKind::Program);
        map.insert("var", TokenKind::Var);
        map.insert("array", TokenKind::Array);
        map.insert("of", TokenKind::Of);
        map.insert("integer", TokenKind::IntegerType);
        map.insert("real", TokenKind::RealType);
        map.insert("boolean", TokenKind::BooleanType);
        map.insert("function", TokenKind::Function);
        map.insert("procedure", TokenKind::Procedure);
        map.insert("begin", TokenKind::Begin);
        map.insert("end", TokenKind::End);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("do", TokenKind::Do);
        map.insert("not", TokenKind::Not);
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("div", TokenKind::Div);
        map.insert("return", TokenKind::Return);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Invalid,

    Integer,
    Real,
    Identifier,
    String,

    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,

    Assign,        // :=
    Equals,        // =
    NotEquals,     // <>
    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Dot,
    DotDot,
    Semicolon,
    Colon,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Program,
    Var,
    Array,
    Of,
    IntegerType,
    RealType,
    BooleanType,
    Function,
    Procedure,
    Begin,
    End,
    If,
    Then,
    Else,
    While,
    Do,
    Not,
    And,
    Or,
    Div,
    Return,
    True,
    False,
}

impl TokenKind {
    /// The fixed source text of keywords and punctuation, `None` for kinds
    /// that carry a value.
    pub fn spelling(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::EOF
            | TokenKind::Invalid
            | TokenKind::Integer
            | TokenKind::Real
            | TokenKind::Identifier
            | TokenKind::String => return None,
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Assign => ":=",
            TokenKind::Equals => "=",
            TokenKind::NotEquals => "<>",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::Dot => ".",
            TokenKind::DotDot => "..",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Program => "program",
            TokenKind::Var => "var",
            TokenKind::Array => "array",
            TokenKind::Of => "of",
            TokenKind::IntegerType => "integer",
            TokenKind::RealType => "real",
            TokenKind::BooleanType => "boolean",
            TokenKind::Function => "function",
            TokenKind::Procedure => "procedure",
            TokenKind::Begin => "begin",
            TokenKind::End => "end",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::Not => "not",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Div => "div",
            TokenKind::Return => "return",
            TokenKind::True => "true",
            TokenKind::False => "false",
        };

        Some(text)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(text) = self.spelling() {
            return write!(f, "`{}`", text);
        }

        match self {
            TokenKind::EOF => write!(f, "end of input"),
            TokenKind::Invalid => write!(f, "invalid token"),
            TokenKind::Integer => write!(f, "integer literal"),
            TokenKind::Real => write!(f, "real literal"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::String => write!(f, "string literal"),
            _ => write!(f, "{:?}", self),
        }
    }
}

/// Literal payload attached to a token by the scanner.
///
/// Identifiers and string literals carry `Text`.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    None,
    Integer(i64),
    Real(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            TokenValue::None => write!(f, "{}:{}", self.line, self.kind),
            TokenValue::Integer(value) => write!(f, "{}:{} ({})", self.line, self.kind, value),
            TokenValue::Real(value) => write!(f, "{}:{} ({:?})", self.line, self.kind, value),
            TokenValue::Text(text) => write!(f, "{}:{} ({:?})", self.line, self.kind, text),
        }
    }
}

impl Token {
    pub fn new(kind: TokenKind, line: u32) -> Self {
        Token {
            kind,
            value: TokenValue::None,
            line,
        }
    }

    pub fn eof(line: u32) -> Self {
        Token::new(TokenKind::EOF, line)
    }

    pub fn integer(value: i64, line: u32) -> Self {
        Token {
            kind: TokenKind::Integer,
            value: TokenValue::Integer(value),
            line,
        }
    }

    pub fn real(value: f64, line: u32) -> Self {
        Token {
            kind: TokenKind::Real,
            value: TokenValue::Real(value),
            line,
        }
    }

    pub fn identifier(name: impl Into<String>, line: u32) -> Self {
        Token {
            kind: TokenKind::Identifier,
            value: TokenValue::Text(name.into()),
            line,
        }
    }

    pub fn string(text: impl Into<String>, line: u32) -> Self {
        Token {
            kind: TokenKind::String,
            value: TokenValue::Text(text.into()),
            line,
        }
    }

    /// Takes the text payload. Scanners attach one to every identifier and
    /// string token; a missing payload reads as the empty string.
    pub fn into_text(self) -> String {
        match self.value {
            TokenValue::Text(text) => text,
            _ => String::new(),
        }
    }

    pub fn integer_value(&self) -> i64 {
        match self.value {
            TokenValue::Integer(value) => value,
            _ => 0,
        }
    }

    pub fn real_value(&self) -> f64 {
        match self.value {
            TokenValue::Real(value) => value,
            TokenValue::Integer(value) => value as f64,
            _ => 0.0,
        }
    }
}
