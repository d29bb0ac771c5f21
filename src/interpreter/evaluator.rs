/// Default implementations of the binary operators.
///
/// One submodule per concern: addition/subtraction, multiplication/
/// division, exponentiation, the comparison family, and the logical
/// connectives. Each operator is a plain function with the binding
/// signature, registered in the default environment.
pub mod binary;
/// The tree-walking evaluator.
///
/// Walks a parsed expression depth-first, left-to-right, resolving
/// identifiers and operator bindings through the environment and
/// invoking host functions at call nodes.
pub mod core;
/// Default implementations of the prefix modifiers.
pub mod unary;
