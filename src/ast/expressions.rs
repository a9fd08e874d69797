use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

use super::{ast::ExpressionList, statements::Variable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Or,
    And,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Add,
    Subtract,
    Multiply,
    Divide,
    IntegerDivide,
}

impl BinaryOperator {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        let operator = match kind {
            TokenKind::Or => BinaryOperator::Or,
            TokenKind::And => BinaryOperator::And,
            TokenKind::Equals => BinaryOperator::Equal,
            TokenKind::NotEquals => BinaryOperator::NotEqual,
            TokenKind::Less => BinaryOperator::Less,
            TokenKind::LessEquals => BinaryOperator::LessEqual,
            TokenKind::Greater => BinaryOperator::Greater,
            TokenKind::GreaterEquals => BinaryOperator::GreaterEqual,
            TokenKind::Plus => BinaryOperator::Add,
            TokenKind::Dash => BinaryOperator::Subtract,
            TokenKind::Star => BinaryOperator::Multiply,
            TokenKind::Slash => BinaryOperator::Divide,
            TokenKind::Div => BinaryOperator::IntegerDivide,
            _ => return None,
        };

        Some(operator)
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            BinaryOperator::Or => "or",
            BinaryOperator::And => "and",
            BinaryOperator::Equal => "=",
            BinaryOperator::NotEqual => "<>",
            BinaryOperator::Less => "<",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterEqual => ">=",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::IntegerDivide => "div",
        };

        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Not,
    Negate,
}

impl UnaryOperator {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Not => Some(UnaryOperator::Not),
            TokenKind::Dash => Some(UnaryOperator::Negate),
            _ => None,
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOperator::Not => write!(f, "not "),
            UnaryOperator::Negate => write!(f, "-"),
        }
    }
}

/// Expression
///
/// Parenthesized groups leave no node behind; `(a)` parses to the same tree
/// as `a`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    BinaryOp {
        operator: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    UnaryOp {
        operator: UnaryOperator,
        operand: Box<Expr>,
    },
    /// Function call. Array elements use `[]`, so `f(...)` is always a call.
    Call {
        callee: String,
        arguments: ExpressionList,
    },
    Var(Variable),
    IntLiteral(i64),
    RealLiteral(f64),
    BoolLiteral(bool),
    StringLiteral(String),
}

impl Expr {
    pub fn binary(operator: BinaryOperator, left: Expr, right: Expr) -> Self {
        Expr::BinaryOp {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(operator: UnaryOperator, operand: Expr) -> Self {
        Expr::UnaryOp {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn call(callee: impl Into<String>, arguments: ExpressionList) -> Self {
        Expr::Call {
            callee: callee.into(),
            arguments,
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Var(Variable::Simple(name.into()))
    }

    pub fn indexed(name: impl Into<String>, index: Expr) -> Self {
        Expr::Var(Variable::indexed(name, index))
    }
}

/// Renders a real so it scans back as a real: always with a `.` or an
/// exponent.
pub fn format_real(value: f64) -> String {
    let text = format!("{:?}", value);
    if text.contains(['.', 'e', 'E']) || !value.is_finite() {
        text
    } else {
        format!("{}.0", text)
    }
}

pub fn quote_string(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

pub(crate) fn write_list<T: Display>(
    f: &mut std::fmt::Formatter<'_>,
    items: &[T],
    separator: &str,
) -> std::fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", separator)?;
        }
        write!(f, "{}", item)?;
    }

    Ok(())
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::BinaryOp {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
            Expr::UnaryOp { operator, operand } => write!(f, "{}{}", operator, operand),
            Expr::Call { callee, arguments } => {
                write!(f, "{}(", callee)?;
                write_list(f, arguments, ", ")?;
                write!(f, ")")
            }
            Expr::Var(variable) => write!(f, "{}", variable),
            Expr::IntLiteral(value) => write!(f, "{}", value),
            Expr::RealLiteral(value) => write!(f, "{}", format_real(*value)),
            Expr::BoolLiteral(value) => write!(f, "{}", value),
            Expr::StringLiteral(value) => write!(f, "{}", quote_string(value)),
        }
    }
}
