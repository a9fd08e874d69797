use crate::{
    ast::{
        ast::ExpressionList,
        expressions::{BinaryOperator, Expr, UnaryOperator},
    },
    errors::errors::SyntaxError,
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses an expression whose operators all bind tighter than `bp`.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, SyntaxError> {
    // First parse NUD
    let nud = match parser.get_nud_lookup().get(&parser.current_token_kind()) {
        Some(handler) => *handler,
        None => return Err(parser.unexpected(&parser.expression_start_kinds())),
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than bp, continue parsing lhs
    loop {
        let token_kind = parser.current_token_kind();
        let next_bp = *parser
            .get_bp_lookup()
            .get(&token_kind)
            .unwrap_or(&BindingPower::Default);

        if next_bp <= bp {
            break;
        }

        let led = match parser.get_led_lookup().get(&token_kind) {
            Some(handler) => *handler,
            None => break,
        };

        left = led(parser, left, next_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    match parser.current_token_kind() {
        TokenKind::Integer => Ok(Expr::IntLiteral(parser.advance().integer_value())),
        TokenKind::Real => Ok(Expr::RealLiteral(parser.advance().real_value())),
        TokenKind::String => Ok(Expr::StringLiteral(parser.advance().into_text())),
        TokenKind::True => {
            parser.advance();
            Ok(Expr::BoolLiteral(true))
        }
        TokenKind::False => {
            parser.advance();
            Ok(Expr::BoolLiteral(false))
        }
        _ => Err(parser.unexpected(&parser.expression_start_kinds())),
    }
}

/// Identifier in expression position: `x`, `a[i]` or `f(args)`.
pub fn parse_symbol_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    let name = parser.expect_identifier()?;

    match parser.current_token_kind() {
        TokenKind::OpenBracket => {
            parser.advance();
            let index = parse_expr(parser, BindingPower::Default)?;
            parser.expect(TokenKind::CloseBracket)?;

            Ok(Expr::indexed(name, index))
        }
        TokenKind::OpenParen => {
            let arguments = parse_argument_list(parser)?;
            Ok(Expr::call(name, arguments))
        }
        _ => Ok(Expr::variable(name)),
    }
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, SyntaxError> {
    let operator = match BinaryOperator::from_token(parser.current_token_kind()) {
        Some(operator) => operator,
        None => return Err(parser.unexpected(&parser.infix_kinds())),
    };
    parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::binary(operator, left, right))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    let operator = match UnaryOperator::from_token(parser.current_token_kind()) {
        Some(operator) => operator,
        None => return Err(parser.unexpected(&[TokenKind::Dash, TokenKind::Not])),
    };
    parser.advance();

    // Only a primary or another prefix operator fits inside a unary operand
    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::unary(operator, operand))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, SyntaxError> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

/// `( expr, ... )`, possibly empty.
pub fn parse_argument_list(parser: &mut Parser) -> Result<ExpressionList, SyntaxError> {
    parser.expect(TokenKind::OpenParen)?;

    let mut arguments = vec![];
    if parser.current_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Ok(arguments);
    }

    loop {
        arguments.push(parse_expr(parser, BindingPower::Default)?);

        match parser.current_token_kind() {
            TokenKind::Comma => {
                parser.advance();
            }
            TokenKind::CloseParen => {
                parser.advance();
                return Ok(arguments);
            }
            _ => return Err(parser.unexpected(&[TokenKind::Comma, TokenKind::CloseParen])),
        }
    }
}
