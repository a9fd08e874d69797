//! Type parsing implementation.
//!
//! This module handles the type annotations of variable declarations,
//! parameters and function results:
//!
//! - Standard types (`integer`, `real`, `boolean`)
//! - Array types with integer bounds (`array[1..10] of real`)
//!
//! Bounds are recorded as written; an empty range is left for semantic
//! analysis to reject.

use crate::{
    ast::types::{StandardType, Type},
    errors::errors::SyntaxError,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

const STANDARD_TYPE_KINDS: [TokenKind; 3] = [
    TokenKind::IntegerType,
    TokenKind::RealType,
    TokenKind::BooleanType,
];

pub fn parse_type(parser: &mut Parser) -> Result<Type, SyntaxError> {
    match parser.current_token_kind() {
        TokenKind::Array => parse_array_type(parser),
        TokenKind::IntegerType | TokenKind::RealType | TokenKind::BooleanType => {
            Ok(Type::Standard(parse_standard_type(parser)?))
        }
        _ => {
            let mut expected = STANDARD_TYPE_KINDS.to_vec();
            expected.push(TokenKind::Array);
            Err(parser.unexpected(&expected))
        }
    }
}

pub fn parse_standard_type(parser: &mut Parser) -> Result<StandardType, SyntaxError> {
    let standard = match parser.current_token_kind() {
        TokenKind::IntegerType => StandardType::Integer,
        TokenKind::RealType => StandardType::Real,
        TokenKind::BooleanType => StandardType::Boolean,
        _ => return Err(parser.unexpected(&STANDARD_TYPE_KINDS)),
    };
    parser.advance();

    Ok(standard)
}

pub fn parse_array_type(parser: &mut Parser) -> Result<Type, SyntaxError> {
    parser.expect(TokenKind::Array)?;
    parser.expect(TokenKind::OpenBracket)?;
    let lower_bound = parse_bound(parser)?;
    parser.expect(TokenKind::DotDot)?;
    let upper_bound = parse_bound(parser)?;
    parser.expect(TokenKind::CloseBracket)?;
    parser.expect(TokenKind::Of)?;
    let element_type = parse_standard_type(parser)?;

    Ok(Type::Array {
        lower_bound,
        upper_bound,
        element_type,
    })
}

/// An integer literal with an optional leading `-`.
fn parse_bound(parser: &mut Parser) -> Result<i64, SyntaxError> {
    let negative = parser.current_token_kind() == TokenKind::Dash;
    if negative {
        parser.advance();
    } else if parser.current_token_kind() != TokenKind::Integer {
        return Err(parser.unexpected(&[TokenKind::Dash, TokenKind::Integer]));
    }

    let value = parser.expect(TokenKind::Integer)?.integer_value();

    Ok(if negative { value.wrapping_neg() } else { value })
}
