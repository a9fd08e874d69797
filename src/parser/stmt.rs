use crate::{
    ast::statements::{CompoundStatement, Statement, Variable},
    errors::errors::SyntaxError,
    lexer::tokens::TokenKind,
    parser::{
        expr::{parse_argument_list, parse_expr},
        lookups::BindingPower,
    },
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Statement, SyntaxError> {
    let handler = match parser.get_stmt_lookup().get(&parser.current_token_kind()) {
        Some(handler) => *handler,
        None => return Err(parser.unexpected(&parser.statement_start_kinds())),
    };

    handler(parser)
}

/// A statement that starts with an identifier. The token after the name
/// decides:
///
/// - `:=` assigns to a simple variable
/// - `[` indexes an array element, which must then be assigned
/// - `(` calls a procedure with arguments
/// - anything else is a call without arguments
pub fn parse_identifier_stmt(parser: &mut Parser) -> Result<Statement, SyntaxError> {
    let name = parser.expect_identifier()?;

    match parser.current_token_kind() {
        TokenKind::Assign => {
            parser.advance();
            let value = parse_expr(parser, BindingPower::Default)?;

            Ok(Statement::assign(Variable::Simple(name), value))
        }
        TokenKind::OpenBracket => {
            parser.advance();
            let index = parse_expr(parser, BindingPower::Default)?;
            parser.expect(TokenKind::CloseBracket)?;
            parser.expect(TokenKind::Assign)?;
            let value = parse_expr(parser, BindingPower::Default)?;

            Ok(Statement::assign(Variable::indexed(name, index), value))
        }
        TokenKind::OpenParen => {
            let arguments = parse_argument_list(parser)?;
            Ok(Statement::call(name, arguments))
        }
        _ => Ok(Statement::call(name, vec![])),
    }
}

/// `if c then s [else s]`. An `else` always belongs to the innermost `if`
/// still waiting for one, since the nested `if` consumes it first.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Statement, SyntaxError> {
    parser.expect(TokenKind::If)?;

    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Then)?;
    let then_branch = parse_stmt(parser)?;

    let else_branch = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(parse_stmt(parser)?)
    } else {
        None
    };

    Ok(Statement::if_then(condition, then_branch, else_branch))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Statement, SyntaxError> {
    parser.expect(TokenKind::While)?;

    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Do)?;
    let body = parse_stmt(parser)?;

    Ok(Statement::while_do(condition, body))
}

pub fn parse_compound_stmt(parser: &mut Parser) -> Result<Statement, SyntaxError> {
    Ok(Statement::Compound(parse_compound_statement(parser)?))
}

/// `begin s; s; ... end`. The block may be empty and a `;` right before
/// `end` is allowed.
pub fn parse_compound_statement(parser: &mut Parser) -> Result<CompoundStatement, SyntaxError> {
    parser.expect(TokenKind::Begin)?;

    let mut statements = Vec::new();
    if parser.current_token_kind() != TokenKind::End {
        statements.push(parse_stmt(parser)?);

        while parser.current_token_kind() == TokenKind::Semicolon {
            parser.advance();
            if parser.current_token_kind() == TokenKind::End {
                break;
            }
            statements.push(parse_stmt(parser)?);
        }
    }

    if parser.current_token_kind() != TokenKind::End {
        return Err(parser.unexpected(&[TokenKind::Semicolon, TokenKind::End]));
    }
    parser.advance();

    Ok(CompoundStatement::new(statements))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, SyntaxError> {
    parser.expect(TokenKind::Return)?;
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Statement::Return(value))
}
