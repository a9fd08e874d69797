use std::fmt::{Display, Formatter, Result};

use super::{
    expressions::{write_list, Expr},
    statements::{write_compound, CompoundStatement},
    types::Type,
};

/// Names in declaration order; position matters for parameters.
pub type IdentifierList = Vec<String>;
/// Arguments in call order.
pub type ExpressionList = Vec<Expr>;
pub type Declarations = Vec<VarDecl>;
pub type SubprogramDeclarations = Vec<SubprogramDeclaration>;
/// Parenthesized parameter groups of a subprogram head.
pub type Arguments = Vec<ParameterDeclaration>;

/// Root of the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub name: String,
    /// Names listed after the program name, e.g. `program demo(input, output);`.
    pub parameters: IdentifierList,
    pub declarations: Declarations,
    pub subprograms: SubprogramDeclarations,
    pub body: CompoundStatement,
}

/// `a, b: integer`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub identifiers: IdentifierList,
    pub ty: Type,
}

/// Same shape as a `VarDecl`, but only found inside a subprogram head.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDeclaration {
    pub identifiers: IdentifierList,
    pub ty: Type,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubprogramHead {
    pub name: String,
    pub arguments: Option<Arguments>,
    /// Present for functions, absent for procedures.
    pub return_type: Option<Type>,
}

impl SubprogramHead {
    pub fn is_function(&self) -> bool {
        self.return_type.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubprogramDeclaration {
    pub head: SubprogramHead,
    pub declarations: Declarations,
    /// Always empty for subprograms that are themselves nested.
    pub subprograms: SubprogramDeclarations,
    pub body: CompoundStatement,
}

impl Display for VarDecl {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}: {}", self.identifiers.join(", "), self.ty)
    }
}

impl Display for ParameterDeclaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}: {}", self.identifiers.join(", "), self.ty)
    }
}

impl Display for SubprogramHead {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let keyword = if self.is_function() { "function" } else { "procedure" };
        write!(f, "{} {}", keyword, self.name)?;

        if let Some(arguments) = &self.arguments {
            write!(f, "(")?;
            write_list(f, arguments, "; ")?;
            write!(f, ")")?;
        }

        if let Some(return_type) = &self.return_type {
            write!(f, ": {}", return_type)?;
        }

        write!(f, ";")
    }
}

fn write_declarations(f: &mut Formatter<'_>, declarations: &Declarations, indent: usize) -> Result {
    for declaration in declarations {
        writeln!(f, "{:width$}var {};", "", declaration, width = indent * 2)?;
    }

    Ok(())
}

fn write_subprogram(
    f: &mut Formatter<'_>,
    subprogram: &SubprogramDeclaration,
    indent: usize,
) -> Result {
    writeln!(f, "{:width$}{}", "", subprogram.head, width = indent * 2)?;
    write_declarations(f, &subprogram.declarations, indent + 1)?;

    for nested in &subprogram.subprograms {
        write_subprogram(f, nested, indent + 1)?;
    }

    write!(f, "{:width$}", "", width = indent * 2)?;
    write_compound(f, &subprogram.body, indent)?;
    writeln!(f, ";")
}

impl Display for SubprogramDeclaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_subprogram(f, self, 0)
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "program {}", self.name)?;
        if !self.parameters.is_empty() {
            write!(f, "({})", self.parameters.join(", "))?;
        }
        writeln!(f, ";")?;

        write_declarations(f, &self.declarations, 0)?;

        for subprogram in &self.subprograms {
            writeln!(f)?;
            write_subprogram(f, subprogram, 0)?;
        }

        if !self.declarations.is_empty() || !self.subprograms.is_empty() {
            writeln!(f)?;
        }

        write_compound(f, &self.body, 0)?;
        writeln!(f, ".")
    }
}
