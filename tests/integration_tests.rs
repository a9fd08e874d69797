//! Integration tests for the front end.
//!
//! These tests drive the public API from source text through scanning and
//! parsing, and check that printed trees parse back to the same tree.

use minipascal::{
    ast::{
        ast::Program,
        expressions::{BinaryOperator, Expr, UnaryOperator},
        statements::{Statement, Variable},
        types::{StandardType, Type},
    },
    lexer::{lexer::tokenize, tokens::TokenKind},
    parse_source,
    parser::parser::{parse, parse_expression, parse_statement},
};

const BUBBLE_SORT: &str = include_str!("../demos/bubble_sort.pas");

fn parse_text(source: &str) -> Program {
    let tokens = tokenize(source.to_string(), Some("test.pas".to_string())).unwrap();
    parse(tokens).unwrap()
}

fn reparse(program: &Program) -> Program {
    parse_text(&program.to_string())
}

#[test]
fn test_parse_demo_program() {
    let program = parse_text(BUBBLE_SORT);

    assert_eq!(program.name, "bubble_sort");
    assert_eq!(program.parameters, vec!["input".to_string(), "output".to_string()]);

    assert_eq!(program.declarations.len(), 3);
    assert_eq!(
        program.declarations[0].ty,
        Type::Array {
            lower_bound: 1,
            upper_bound: 8,
            element_type: StandardType::Integer,
        }
    );
    assert_eq!(program.declarations[0].ty.element_type(), StandardType::Integer);
    assert_eq!(program.declarations[1].identifiers, vec!["i".to_string(), "n".to_string()]);

    let names: Vec<&str> = program
        .subprograms
        .iter()
        .map(|subprogram| subprogram.head.name.as_str())
        .collect();
    assert_eq!(names, vec!["swap", "is_sorted", "average"]);

    let is_sorted = &program.subprograms[1];
    assert_eq!(
        is_sorted.head.return_type,
        Some(Type::Standard(StandardType::Boolean))
    );
    assert_eq!(is_sorted.subprograms.len(), 1);
    assert_eq!(is_sorted.subprograms[0].head.name, "report");

    assert_eq!(program.body.statements.len(), 6);
}

#[test]
fn test_demo_program_round_trips() {
    let program = parse_text(BUBBLE_SORT);
    assert_eq!(reparse(&program), program);
}

#[test]
fn test_printing_is_stable() {
    let program = parse_text(BUBBLE_SORT);
    let printed = program.to_string();

    assert_eq!(reparse(&program).to_string(), printed);
}

#[test]
fn test_dangling_else_round_trips() {
    let source = "program demo;
begin
  if a then if b then x := 1 else x := 2;
  if a then begin if b then x := 1 end else x := 2;
  while c do if d then p else q
end.";

    let program = parse_text(source);
    assert_eq!(reparse(&program), program);
}

#[test]
fn test_literals_round_trip() {
    let source = "program demo;
begin
  s := 'it''s';
  r := 1.0;
  big := 1.5e300;
  tiny := 2e-9;
  b := not true or false;
  n := -(-3)
end.";

    let program = parse_text(source);
    let printed = program.to_string();

    assert!(printed.contains("'it''s'"));
    assert!(printed.contains("1.0"));
    assert_eq!(reparse(&program), program);
}

#[test]
fn test_expression_printing() {
    let tokens = tokenize("1 + 2 * 3".to_string(), None).unwrap();
    let expr = parse_expression(tokens).unwrap();

    assert_eq!(expr.to_string(), "(1 + (2 * 3))");
    assert_eq!(
        Expr::unary(
            UnaryOperator::Not,
            Expr::binary(BinaryOperator::And, Expr::variable("a"), Expr::BoolLiteral(true))
        )
        .to_string(),
        "not (a and true)"
    );
}

#[test]
fn test_statement_printing() {
    let source = "if x then begin a[1] := f(); p(1, 2) end else return 0";
    let tokens = tokenize(source.to_string(), None).unwrap();
    let statement = parse_statement(tokens).unwrap();

    assert_eq!(
        statement.to_string(),
        "if x then begin\n  a[1] := f();\n  p(1, 2)\nend else return 0"
    );
}

#[test]
fn test_precedence_through_public_api() {
    let tokens = tokenize("-2 * 3".to_string(), None).unwrap();

    assert_eq!(
        parse_expression(tokens).unwrap(),
        Expr::binary(
            BinaryOperator::Multiply,
            Expr::unary(UnaryOperator::Negate, Expr::IntLiteral(2)),
            Expr::IntLiteral(3)
        )
    );
}

#[test]
fn test_parse_source() {
    let program = parse_source(
        "program demo; var a: array[0..3] of real; begin a[0] := 1.5 end.".to_string(),
        Some("demo.pas".to_string()),
    )
    .unwrap();

    match &program.body.statements[0] {
        Statement::Assign { target, .. } => assert_eq!(target.name(), "a"),
        other => panic!("expected an assignment, got {:?}", other),
    }
    assert_eq!(
        program.body.statements,
        vec![Statement::assign(
            Variable::indexed("a", Expr::IntLiteral(0)),
            Expr::RealLiteral(1.5)
        )]
    );
}

#[test]
fn test_parse_source_missing_end() {
    let error = parse_source("program demo;\nbegin\n  x := 1\n\n".to_string(), None).unwrap_err();

    assert_eq!(error.line(), 3);
    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_independent_parses_agree() {
    let tokens = tokenize(BUBBLE_SORT.to_string(), None).unwrap();

    let first = parse(tokens.iter().cloned()).unwrap();
    let second = parse(tokens.clone()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_parallel_parses() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                let tokens = tokenize(BUBBLE_SORT.to_string(), None).unwrap();
                parse(tokens).unwrap()
            })
        })
        .collect();

    let programs: Vec<Program> = handles.into_iter().map(|handle| handle.join().unwrap()).collect();
    for program in &programs[1..] {
        assert_eq!(program, &programs[0]);
    }
}

#[test]
fn test_error_found_kind_at_end_of_input() {
    let tokens = tokenize("program demo; begin x := 1".to_string(), None).unwrap();
    let error = parse(tokens).unwrap_err();

    assert_eq!(error.found, TokenKind::EOF);
    assert_eq!(error.line, 1);
}
