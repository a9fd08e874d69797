//! Property tests for printing syntax trees back to source.
//!
//! Trees are generated in the shapes the parser itself produces, printed,
//! scanned and parsed again, and must come back unchanged.

use minipascal::{
    ast::{
        expressions::{BinaryOperator, Expr, UnaryOperator},
        statements::{CompoundStatement, Statement, Variable},
    },
    lexer::{lexer::tokenize, tokens::RESERVED_LOOKUP},
    parser::parser::{parse_expression, parse_statement},
};
use proptest::prelude::*;

fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}".prop_filter("not a reserved word", |name| {
        !RESERVED_LOOKUP.contains_key(name.as_str())
    })
}

fn binary_operator_strategy() -> impl Strategy<Value = BinaryOperator> {
    prop_oneof![
        Just(BinaryOperator::Or),
        Just(BinaryOperator::And),
        Just(BinaryOperator::Equal),
        Just(BinaryOperator::NotEqual),
        Just(BinaryOperator::Less),
        Just(BinaryOperator::LessEqual),
        Just(BinaryOperator::Greater),
        Just(BinaryOperator::GreaterEqual),
        Just(BinaryOperator::Add),
        Just(BinaryOperator::Subtract),
        Just(BinaryOperator::Multiply),
        Just(BinaryOperator::Divide),
        Just(BinaryOperator::IntegerDivide),
    ]
}

fn unary_operator_strategy() -> impl Strategy<Value = UnaryOperator> {
    prop_oneof![Just(UnaryOperator::Not), Just(UnaryOperator::Negate)]
}

// Literals are never negative: a leading `-` always parses as a unary minus.
fn leaf_strategy() -> impl Strategy<Value = Expr> {
    prop_oneof![
        (0..=i64::MAX).prop_map(Expr::IntLiteral),
        (0.0f64..1e12).prop_map(Expr::RealLiteral),
        any::<bool>().prop_map(Expr::BoolLiteral),
        "[ -~]{0,8}".prop_map(Expr::StringLiteral),
        ident_strategy().prop_map(|name| Expr::variable(name)),
    ]
}

fn expr_strategy() -> impl Strategy<Value = Expr> {
    leaf_strategy().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (binary_operator_strategy(), inner.clone(), inner.clone())
                .prop_map(|(operator, left, right)| Expr::binary(operator, left, right)),
            (unary_operator_strategy(), inner.clone())
                .prop_map(|(operator, operand)| Expr::unary(operator, operand)),
            (ident_strategy(), prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(callee, arguments)| Expr::call(callee, arguments)),
            (ident_strategy(), inner).prop_map(|(name, index)| Expr::indexed(name, index)),
        ]
    })
}

fn variable_strategy() -> impl Strategy<Value = Variable> {
    prop_oneof![
        ident_strategy().prop_map(Variable::Simple),
        (ident_strategy(), expr_strategy())
            .prop_map(|(name, index)| Variable::indexed(name, index)),
    ]
}

// The then-branch of an `if` with an else never ends in an else-less `if`;
// the parser only yields that shape when a block closes the inner `if`.
fn statement_strategy() -> impl Strategy<Value = Statement> {
    let leaf = prop_oneof![
        (variable_strategy(), expr_strategy())
            .prop_map(|(target, value)| Statement::assign(target, value)),
        (ident_strategy(), prop::collection::vec(expr_strategy(), 0..3))
            .prop_map(|(name, arguments)| Statement::call(name, arguments)),
        expr_strategy().prop_map(Statement::Return),
    ];

    leaf.prop_recursive(3, 16, 3, |inner| {
        prop_oneof![
            (expr_strategy(), inner.clone(), inner.clone()).prop_map(
                |(condition, then_branch, else_branch)| {
                    Statement::if_then(condition, close_dangling(then_branch), Some(else_branch))
                }
            ),
            (expr_strategy(), inner.clone())
                .prop_map(|(condition, body)| Statement::if_then(condition, body, None)),
            (expr_strategy(), inner.clone())
                .prop_map(|(condition, body)| Statement::while_do(condition, body)),
            prop::collection::vec(inner, 0..3)
                .prop_map(|statements| Statement::Compound(CompoundStatement::new(statements))),
        ]
    })
}

/// Wraps a statement in a block when an `else` following it would attach
/// to an inner else-less `if`.
fn close_dangling(statement: Statement) -> Statement {
    if ends_in_open_if(&statement) {
        Statement::Compound(CompoundStatement::new(vec![statement]))
    } else {
        statement
    }
}

fn ends_in_open_if(statement: &Statement) -> bool {
    match statement {
        Statement::If { else_branch: None, .. } => true,
        Statement::If {
            else_branch: Some(else_branch),
            ..
        } => ends_in_open_if(else_branch),
        Statement::While { body, .. } => ends_in_open_if(body),
        _ => false,
    }
}

proptest! {
    #[test]
    fn printed_expressions_parse_back(expr in expr_strategy()) {
        let printed = expr.to_string();
        let tokens = tokenize(printed.clone(), None).unwrap();
        let parsed = parse_expression(tokens).unwrap();

        prop_assert_eq!(parsed, expr, "printed as {}", printed);
    }

    #[test]
    fn printed_statements_parse_back(statement in statement_strategy()) {
        let printed = statement.to_string();
        let tokens = tokenize(printed.clone(), None).unwrap();
        let parsed = parse_statement(tokens).unwrap();

        prop_assert_eq!(parsed, statement, "printed as {}", printed);
    }
}
