//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! The parser reads one token of lookahead from its stream, uses a Pratt
//! parser with NUD/LED handlers for expressions and dedicated functions for
//! statements and declarations.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence
//!
//! Every table and cursor lives in the `Parser` value, so independent parses
//! share no state.

use crate::{
    ast::{ast::Program, expressions::Expr, statements::Statement},
    errors::errors::{report, SyntaxError},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    decl::parse_program,
    expr::parse_expr,
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// This struct owns the token stream and the single lookahead token, and
/// holds the lookup tables for parsing statements and expressions.
pub struct Parser<'a> {
    /// The remaining tokens
    tokens: Box<dyn Iterator<Item = Token> + 'a>,
    /// The lookahead token
    current: Token,
    /// Line of the most recently consumed token
    previous_line: u32,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser positioned at the first token of `tokens`, with
    /// all lookup tables registered.
    ///
    /// A stream that ends without an `EOF` token is treated as if one
    /// followed its last token.
    pub fn new<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = Token>,
        I::IntoIter: 'a,
    {
        let mut tokens: Box<dyn Iterator<Item = Token> + 'a> = Box::new(tokens.into_iter());
        let current = tokens.next().unwrap_or_else(|| Token::eof(1));

        let mut parser = Parser {
            tokens,
            previous_line: current.line,
            current,
            stmt_lookup: StmtLookup::new(),
            nud_lookup: NUDLookup::new(),
            led_lookup: LEDLookup::new(),
            binding_power_lookup: BPLookup::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Advances to the next token and returns the previous token.
    ///
    /// Once the lookahead is `EOF` it stays there.
    pub fn advance(&mut self) -> Token {
        if self.current.kind == TokenKind::EOF {
            return self.current.clone();
        }

        let line = self.current.line;
        let next = self.tokens.next().unwrap_or_else(|| Token::eof(line));
        self.previous_line = line;
        std::mem::replace(&mut self.current, next)
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise the
    /// SyntaxError naming `expected_kind`.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, SyntaxError> {
        if self.current.kind != expected_kind {
            return Err(self.unexpected(&[expected_kind]));
        }

        Ok(self.advance())
    }

    /// Consumes an identifier and returns its name.
    pub fn expect_identifier(&mut self) -> Result<String, SyntaxError> {
        Ok(self.expect(TokenKind::Identifier)?.into_text())
    }

    /// Builds the error for the current token when one of `expected` was
    /// required.
    ///
    /// At end of input the error carries the line of the last consumed
    /// token, which is where the missing piece belongs.
    pub fn unexpected(&self, expected: &[TokenKind]) -> SyntaxError {
        let line = if self.current.kind == TokenKind::EOF {
            self.previous_line
        } else {
            self.current.line
        };

        tracing::trace!(found = %self.current.kind, line, "unexpected token");
        report(expected, self.current.kind, line)
    }

    /// Token kinds that can begin a statement.
    pub fn statement_start_kinds(&self) -> Vec<TokenKind> {
        self.stmt_lookup.keys().copied().collect()
    }

    /// Token kinds that can begin an expression.
    pub fn expression_start_kinds(&self) -> Vec<TokenKind> {
        self.nud_lookup.keys().copied().collect()
    }

    /// Token kinds that can continue an expression.
    pub fn infix_kinds(&self) -> Vec<TokenKind> {
        self.led_lookup.keys().copied().collect()
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Line of the lookahead token.
    pub fn get_line(&self) -> u32 {
        self.current.line
    }
}

/// Parses a token stream into a Program.
///
/// This is the main entry point for parsing. The stream must describe one
/// whole program followed by end of input; the first syntax error aborts
/// the parse and no partial tree is returned.
///
/// # Arguments
///
/// * `tokens` - Any token source: a `Vec<Token>`, a cloned slice iterator, or
///   a scanner that yields tokens lazily
#[tracing::instrument(skip_all)]
pub fn parse<'a, I>(tokens: I) -> Result<Program, SyntaxError>
where
    I: IntoIterator<Item = Token>,
    I::IntoIter: 'a,
{
    let mut parser = Parser::new(tokens);

    let program = parse_program(&mut parser);
    match &program {
        Ok(program) => tracing::debug!(
            name = %program.name,
            subprograms = program.subprograms.len(),
            "parsed program"
        ),
        Err(error) => tracing::debug!(%error, "syntax error"),
    }

    program
}

/// Parses a single expression followed by end of input.
pub fn parse_expression<'a, I>(tokens: I) -> Result<Expr, SyntaxError>
where
    I: IntoIterator<Item = Token>,
    I::IntoIter: 'a,
{
    let mut parser = Parser::new(tokens);

    let expr = parse_expr(&mut parser, BindingPower::Default)?;
    if parser.current_token_kind() != TokenKind::EOF {
        let mut expected = parser.infix_kinds();
        expected.push(TokenKind::EOF);
        return Err(parser.unexpected(&expected));
    }

    Ok(expr)
}

/// Parses a single statement followed by end of input.
pub fn parse_statement<'a, I>(tokens: I) -> Result<Statement, SyntaxError>
where
    I: IntoIterator<Item = Token>,
    I::IntoIter: 'a,
{
    let mut parser = Parser::new(tokens);

    let statement = parse_stmt(&mut parser)?;
    parser.expect(TokenKind::EOF)?;

    Ok(statement)
}
