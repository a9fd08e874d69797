use crate::{
    ast::{
        ast::{
            Arguments, Declarations, IdentifierList, ParameterDeclaration, Program,
            SubprogramDeclaration, SubprogramDeclarations, SubprogramHead, VarDecl,
        },
        statements::CompoundStatement,
    },
    errors::errors::SyntaxError,
    lexer::tokens::TokenKind,
};

use super::{parser::Parser, stmt::parse_compound_statement, types::parse_type};

/// How deep subprograms may be declared inside other subprograms.
pub const MAX_SUBPROGRAM_NESTING: usize = 1;

/// `program name [(ids)]; declarations subprograms begin ... end .`
pub fn parse_program(parser: &mut Parser) -> Result<Program, SyntaxError> {
    parser.expect(TokenKind::Program)?;
    let name = parser.expect_identifier()?;

    let parameters = match parser.current_token_kind() {
        TokenKind::OpenParen => {
            parser.advance();
            let parameters = parse_identifier_list(parser)?;
            parser.expect(TokenKind::CloseParen)?;
            parameters
        }
        TokenKind::Semicolon => vec![],
        _ => return Err(parser.unexpected(&[TokenKind::OpenParen, TokenKind::Semicolon])),
    };
    parser.expect(TokenKind::Semicolon)?;

    let declarations = parse_declarations(parser)?;
    let subprograms = parse_subprogram_declarations(parser, 0)?;
    let body = parse_block_body(parser, &declarations, &subprograms, true)?;

    parser.expect(TokenKind::Dot)?;
    parser.expect(TokenKind::EOF)?;

    Ok(Program {
        name,
        parameters,
        declarations,
        subprograms,
        body,
    })
}

pub fn parse_identifier_list(parser: &mut Parser) -> Result<IdentifierList, SyntaxError> {
    let mut identifiers = vec![parser.expect_identifier()?];

    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        identifiers.push(parser.expect_identifier()?);
    }

    Ok(identifiers)
}

/// Zero or more `var` sections, each holding one or more `ids : type ;`.
pub fn parse_declarations(parser: &mut Parser) -> Result<Declarations, SyntaxError> {
    let mut declarations = vec![];

    while parser.current_token_kind() == TokenKind::Var {
        parser.advance();
        declarations.push(parse_var_decl(parser)?);

        while parser.current_token_kind() == TokenKind::Identifier {
            declarations.push(parse_var_decl(parser)?);
        }
    }

    Ok(declarations)
}

pub fn parse_var_decl(parser: &mut Parser) -> Result<VarDecl, SyntaxError> {
    let identifiers = parse_identifier_list(parser)?;
    parser.expect(TokenKind::Colon)?;
    let ty = parse_type(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(VarDecl { identifiers, ty })
}

/// Subprograms declared at `depth`, each followed by `;`.
pub fn parse_subprogram_declarations(
    parser: &mut Parser,
    depth: usize,
) -> Result<SubprogramDeclarations, SyntaxError> {
    let mut subprograms = vec![];

    while matches!(
        parser.current_token_kind(),
        TokenKind::Function | TokenKind::Procedure
    ) {
        subprograms.push(parse_subprogram_declaration(parser, depth)?);
        parser.expect(TokenKind::Semicolon)?;
    }

    Ok(subprograms)
}

pub fn parse_subprogram_declaration(
    parser: &mut Parser,
    depth: usize,
) -> Result<SubprogramDeclaration, SyntaxError> {
    let line = parser.get_line();
    let head = parse_subprogram_head(parser)?;
    let declarations = parse_declarations(parser)?;

    let allow_subprograms = depth < MAX_SUBPROGRAM_NESTING;
    let subprograms = if allow_subprograms {
        parse_subprogram_declarations(parser, depth + 1)?
    } else {
        vec![]
    };

    let body = parse_block_body(parser, &declarations, &subprograms, allow_subprograms)?;

    tracing::debug!(
        name = %head.name,
        function = head.is_function(),
        depth,
        line,
        "parsed subprogram"
    );

    Ok(SubprogramDeclaration {
        head,
        declarations,
        subprograms,
        body,
    })
}

/// The `begin ... end` of a program or subprogram. A wrong lookahead here
/// reports every kind that could still have come, given what the block
/// has declared so far.
fn parse_block_body(
    parser: &mut Parser,
    declarations: &Declarations,
    subprograms: &SubprogramDeclarations,
    allow_subprograms: bool,
) -> Result<CompoundStatement, SyntaxError> {
    if parser.current_token_kind() != TokenKind::Begin {
        let mut expected = vec![TokenKind::Begin];
        if allow_subprograms {
            expected.extend([TokenKind::Function, TokenKind::Procedure]);
        }
        // Variables are only declared ahead of the first subprogram.
        if subprograms.is_empty() {
            expected.push(TokenKind::Var);
            if !declarations.is_empty() {
                expected.push(TokenKind::Identifier);
            }
        }

        return Err(parser.unexpected(&expected));
    }

    parse_compound_statement(parser)
}

/// `function f [(params)] : type ;` or `procedure p [(params)] ;`
pub fn parse_subprogram_head(parser: &mut Parser) -> Result<SubprogramHead, SyntaxError> {
    let is_function = match parser.current_token_kind() {
        TokenKind::Function => true,
        TokenKind::Procedure => false,
        _ => return Err(parser.unexpected(&[TokenKind::Function, TokenKind::Procedure])),
    };
    parser.advance();

    let name = parser.expect_identifier()?;

    let arguments = if parser.current_token_kind() == TokenKind::OpenParen {
        Some(parse_parameter_list(parser)?)
    } else {
        None
    };

    let return_type = if is_function {
        parser.expect(TokenKind::Colon)?;
        Some(parse_type(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;

    Ok(SubprogramHead {
        name,
        arguments,
        return_type,
    })
}

/// `( ids : type ; ids : type ... )`, at least one group.
pub fn parse_parameter_list(parser: &mut Parser) -> Result<Arguments, SyntaxError> {
    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = vec![];
    loop {
        let identifiers = parse_identifier_list(parser)?;
        parser.expect(TokenKind::Colon)?;
        let ty = parse_type(parser)?;
        parameters.push(ParameterDeclaration { identifiers, ty });

        match parser.current_token_kind() {
            TokenKind::Semicolon => {
                parser.advance();
            }
            TokenKind::CloseParen => {
                parser.advance();
                return Ok(parameters);
            }
            _ => return Err(parser.unexpected(&[TokenKind::Semicolon, TokenKind::CloseParen])),
        }
    }
}
