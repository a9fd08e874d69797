use std::fmt::{Display, Formatter, Result};

use super::{
    ast::ExpressionList,
    expressions::{write_list, Expr},
};

/// Assignment target or variable reference.
#[derive(Debug, Clone, PartialEq)]
pub enum Variable {
    Simple(String),
    Indexed { name: String, index: Box<Expr> },
}

impl Variable {
    pub fn indexed(name: impl Into<String>, index: Expr) -> Self {
        Variable::Indexed {
            name: name.into(),
            index: Box::new(index),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Variable::Simple(name) => name,
            Variable::Indexed { name, .. } => name,
        }
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Variable::Simple(name) => write!(f, "{}", name),
            Variable::Indexed { name, index } => write!(f, "{}[{}]", name, index),
        }
    }
}

/// `begin ... end` block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompoundStatement {
    pub statements: Vec<Statement>,
}

impl CompoundStatement {
    pub fn new(statements: Vec<Statement>) -> Self {
        CompoundStatement { statements }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assign {
        target: Variable,
        value: Expr,
    },
    /// A call in statement position; `p` and `p()` both carry no arguments.
    ProcedureCall {
        name: String,
        arguments: ExpressionList,
    },
    If {
        condition: Expr,
        then_branch: Box<Statement>,
        else_branch: Option<Box<Statement>>,
    },
    While {
        condition: Expr,
        body: Box<Statement>,
    },
    Compound(CompoundStatement),
    /// Accepted anywhere; whether the enclosing subprogram is a function is
    /// checked by later passes.
    Return(Expr),
}

impl Statement {
    pub fn assign(target: Variable, value: Expr) -> Self {
        Statement::Assign { target, value }
    }

    pub fn call(name: impl Into<String>, arguments: ExpressionList) -> Self {
        Statement::ProcedureCall {
            name: name.into(),
            arguments,
        }
    }

    pub fn if_then(
        condition: Expr,
        then_branch: Statement,
        else_branch: Option<Statement>,
    ) -> Self {
        Statement::If {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        }
    }

    pub fn while_do(condition: Expr, body: Statement) -> Self {
        Statement::While {
            condition,
            body: Box::new(body),
        }
    }
}

fn write_indent(f: &mut Formatter<'_>, indent: usize) -> Result {
    write!(f, "{:width$}", "", width = indent * 2)
}

/// Writes a block whose `begin` sits at the cursor and whose `end` lines up
/// with `indent`.
pub(crate) fn write_compound(
    f: &mut Formatter<'_>,
    block: &CompoundStatement,
    indent: usize,
) -> Result {
    writeln!(f, "begin")?;

    for (i, statement) in block.statements.iter().enumerate() {
        write_indent(f, indent + 1)?;
        write_statement(f, statement, indent + 1)?;
        if i + 1 < block.statements.len() {
            write!(f, ";")?;
        }
        writeln!(f)?;
    }

    write_indent(f, indent)?;
    write!(f, "end")
}

// A parsed tree never holds an else-less `if` as the then-branch of an `if`
// with an else, so no extra bracketing is needed to keep the else in place.
pub(crate) fn write_statement(
    f: &mut Formatter<'_>,
    statement: &Statement,
    indent: usize,
) -> Result {
    match statement {
        Statement::Assign { target, value } => write!(f, "{} := {}", target, value),
        Statement::ProcedureCall { name, arguments } => {
            write!(f, "{}", name)?;
            if !arguments.is_empty() {
                write!(f, "(")?;
                write_list(f, arguments, ", ")?;
                write!(f, ")")?;
            }
            Ok(())
        }
        Statement::If {
            condition,
            then_branch,
            else_branch,
        } => {
            write!(f, "if {} then ", condition)?;
            write_statement(f, then_branch, indent)?;
            if let Some(else_branch) = else_branch {
                write!(f, " else ")?;
                write_statement(f, else_branch, indent)?;
            }
            Ok(())
        }
        Statement::While { condition, body } => {
            write!(f, "while {} do ", condition)?;
            write_statement(f, body, indent)
        }
        Statement::Compound(block) => write_compound(f, block, indent),
        Statement::Return(value) => write!(f, "return {}", value),
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_statement(f, self, 0)
    }
}

impl Display for CompoundStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_compound(f, self, 0)
    }
}
