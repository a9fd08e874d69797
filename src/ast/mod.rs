/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Every node is plain data: a closed enum or struct that owns its
/// children, compares structurally and prints back as concrete syntax.
///
/// Submodules:
/// - ast: Program, declarations and subprograms
/// - expressions: Expressions and their operators
/// - statements: Statements, compound blocks and variables
/// - types: Standard and array types
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
