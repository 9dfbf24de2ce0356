/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: Definitions for expression, term, and factor nodes
/// - statements: Definitions for program, declaration, and statement nodes
/// - types: Definitions for type specifications
///
/// Every node is an immutable value type built bottom-up during the parse;
/// ordered lists preserve source order and are empty when absent, never null.
pub mod expressions;
pub mod statements;
pub mod types;
